//! Print the arcs of a circular-arc lobe cam and a small offset cam outline.
//!
//! Usage:
//!   cargo run -p profilegen --example lobe_cam

use profilegen::prelude::*;

fn main() -> Result<(), GeomError> {
    let cfg = ProfileCfg {
        angular_steps: 12,
        ..ProfileCfg::default()
    };

    let cam = LobeCam::new(1.0, 1.0, 0.5, 5.0);
    println!("{cam}");
    for (name, arc) in ["base", "flank1", "nose", "flank2"]
        .iter()
        .zip(cam.arcs(&cfg)?.chain())
    {
        println!(
            "{name:>6}: center ({:.4}, {:.4}) r {:.4} from {:.2} to {:.2} deg",
            arc.center.x, arc.center.y, arc.radius, arc.start_deg, arc.end_deg
        );
    }

    let outline = OffsetCam::new(0.25, 1.0).boundary(&cfg)?;
    for p in outline {
        println!("{:.4}, {:.4}", p.x, p.y);
    }
    Ok(())
}
