use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use profilegen::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod output;
mod provenance;

use config::CfgFile;
use output::{PolygonIn, ProfileOut};
use provenance::{write_sidecar, RunRecord};

#[derive(Parser)]
#[command(name = "profilegen")]
#[command(about = "Generate 2D cam, gear and wheel profiles as JSON entity lists")]
struct Cmd {
    /// JSON config file; flags below override its fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Samples per full turn for sampled curves
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Samples along one involute flank
    #[arg(long, global = true)]
    involute_steps: Option<usize>,

    /// Fail on fillets that do not fit instead of keeping the corner
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Outline of a circle offset from the rotation axis
    CamOffset {
        #[arg(long)]
        offset: f64,
        #[arg(long)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Four-arc lobe cam: base, nose and two tangent flanks
    CamLobe {
        #[arg(long)]
        nose_offset: f64,
        #[arg(long)]
        base: f64,
        #[arg(long)]
        nose: f64,
        #[arg(long)]
        flank: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Involute spur gear outline
    GearInvolute {
        #[arg(long)]
        teeth: usize,
        #[arg(long)]
        pitch_diameter: f64,
        #[arg(long, default_value_t = 20.0)]
        pressure_angle: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Cycloidal gear outline
    GearCycloid {
        #[arg(long)]
        teeth: usize,
        #[arg(long)]
        pitch_diameter: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Smoothed half cross-section of a cast wheel
    Wheel {
        #[arg(long)]
        bore: Option<f64>,
        #[arg(long)]
        hub: Option<f64>,
        #[arg(long)]
        hub_width: Option<f64>,
        #[arg(long)]
        web: Option<f64>,
        #[arg(long)]
        rim_inner: Option<f64>,
        #[arg(long)]
        rim: Option<f64>,
        #[arg(long)]
        rim_width: Option<f64>,
        #[arg(long)]
        fillet: Option<f64>,
        #[arg(long)]
        edge: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Smooth a JSON vertex list `{name?, closed?, vertices: [{x, y, radius?, facets?}]}`
    Smooth {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block with the resolved config
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    execute(Cmd::parse())
}

fn resolve_cfg(cmd: &Cmd) -> Result<ProfileCfg> {
    let mut cfg = match &cmd.config {
        Some(path) => CfgFile::load(path)?.apply(ProfileCfg::default()),
        None => ProfileCfg::default(),
    };
    if let Some(n) = cmd.steps {
        cfg.angular_steps = n;
    }
    if let Some(n) = cmd.involute_steps {
        cfg.involute_steps = n;
    }
    if cmd.strict {
        cfg.fillet_policy = FilletPolicy::Abort;
    }
    Ok(cfg)
}

fn execute(cmd: Cmd) -> Result<()> {
    let cfg = resolve_cfg(&cmd)?;
    match cmd.action {
        Action::CamOffset {
            offset,
            radius,
            out,
        } => {
            tracing::info!(offset, radius, out = %out.display(), "cam-offset");
            let profile = OffsetCam::new(offset, radius).profile(&cfg)?;
            emit(
                &profile,
                &out,
                RunRecord::new("cam-offset", json!({ "offset": offset, "radius": radius })),
            )
        }
        Action::CamLobe {
            nose_offset,
            base,
            nose,
            flank,
            out,
        } => {
            tracing::info!(nose_offset, base, nose, flank, out = %out.display(), "cam-lobe");
            let cam = LobeCam::new(nose_offset, base, nose, flank);
            let profile = cam.profile(&cfg)?;
            emit(
                &profile,
                &out,
                RunRecord::new(
                    "cam-lobe",
                    json!({
                        "nose_offset": nose_offset,
                        "base_radius": base,
                        "nose_radius": nose,
                        "flank_radius": flank,
                        "lift": cam.lift()
                    }),
                ),
            )
        }
        Action::GearInvolute {
            teeth,
            pitch_diameter,
            pressure_angle,
            out,
        } => {
            tracing::info!(teeth, pitch_diameter, pressure_angle, out = %out.display(), "gear-involute");
            let gear = InvoluteGear::new(teeth, pitch_diameter, pressure_angle)?;
            let profile = gear.profile(&cfg)?;
            emit(
                &profile,
                &out,
                RunRecord::new(
                    "gear-involute",
                    json!({
                        "teeth": teeth,
                        "pitch_diameter": pitch_diameter,
                        "pressure_angle": pressure_angle,
                        "involute_steps": cfg.involute_steps,
                        "base_radius": gear.base_radius,
                        "addendum_radius": gear.addendum_radius,
                        "dedendum_radius": gear.dedendum_radius
                    }),
                ),
            )
        }
        Action::GearCycloid {
            teeth,
            pitch_diameter,
            out,
        } => {
            tracing::info!(teeth, pitch_diameter, out = %out.display(), "gear-cycloid");
            let profile = CycloidGear::new(teeth, pitch_diameter)?.profile(&cfg)?;
            emit(
                &profile,
                &out,
                RunRecord::new(
                    "gear-cycloid",
                    json!({
                        "teeth": teeth,
                        "pitch_diameter": pitch_diameter,
                        "angular_steps": cfg.angular_steps
                    }),
                ),
            )
        }
        Action::Wheel {
            bore,
            hub,
            hub_width,
            web,
            rim_inner,
            rim,
            rim_width,
            fillet,
            edge,
            out,
        } => {
            let d = Wheel::default();
            let wheel = Wheel {
                bore_radius: bore.unwrap_or(d.bore_radius),
                hub_radius: hub.unwrap_or(d.hub_radius),
                hub_width: hub_width.unwrap_or(d.hub_width),
                web_thickness: web.unwrap_or(d.web_thickness),
                rim_inner_radius: rim_inner.unwrap_or(d.rim_inner_radius),
                rim_radius: rim.unwrap_or(d.rim_radius),
                rim_width: rim_width.unwrap_or(d.rim_width),
                fillet_radius: fillet.unwrap_or(d.fillet_radius),
                edge_radius: edge.unwrap_or(d.edge_radius),
            };
            tracing::info!(wheel = ?wheel, out = %out.display(), "wheel");
            let profile = wheel.profile(&cfg)?;
            emit(
                &profile,
                &out,
                RunRecord::new(
                    "wheel",
                    json!({
                        "bore_radius": wheel.bore_radius,
                        "hub_radius": wheel.hub_radius,
                        "hub_width": wheel.hub_width,
                        "web_thickness": wheel.web_thickness,
                        "rim_inner_radius": wheel.rim_inner_radius,
                        "rim_radius": wheel.rim_radius,
                        "rim_width": wheel.rim_width,
                        "fillet_radius": wheel.fillet_radius,
                        "edge_radius": wheel.edge_radius,
                        "extrusion_facets": wheel.extrusion_facets(&cfg)
                    }),
                ),
            )
        }
        Action::Smooth { input, out } => {
            tracing::info!(input = %input.display(), out = %out.display(), "smooth");
            let raw =
                std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let poly: PolygonIn = serde_json::from_slice(&raw)
                .with_context(|| format!("parsing {}", input.display()))?;
            let smoothed = smooth_vertices(&poly.specs(), poly.closed, &cfg)?;
            let report = &smoothed.report;
            tracing::info!(
                filleted = report.filleted,
                skipped = report.skipped.len(),
                passes = report.passes,
                "smoothed"
            );
            let mut profile = Profile::new(poly.name.as_str());
            profile.polyline(smoothed.polygon.points(), poly.closed);
            let skipped: Vec<_> = report
                .skipped
                .iter()
                .map(|s| json!({ "index": s.index, "x": s.p.x, "y": s.p.y, "radius": s.radius }))
                .collect();
            emit(
                &profile,
                &out,
                RunRecord::new(
                    "smooth",
                    json!({
                        "input": input.to_string_lossy(),
                        "closed": poly.closed,
                        "input_vertices": report.input_vertices,
                        "output_vertices": report.output_vertices,
                        "filleted": report.filleted,
                        "skipped": skipped
                    }),
                ),
            )
        }
        Action::Report => report(&cfg),
    }
}

fn emit(profile: &Profile, out: &Path, record: RunRecord) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let body = serde_json::to_vec_pretty(&ProfileOut::from(profile))?;
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let prov = write_sidecar(out, record)?;
    tracing::info!(
        entities = profile.entities.len(),
        out = %out.display(),
        provenance = %prov.display(),
        "wrote profile"
    );
    Ok(())
}

fn report(cfg: &ProfileCfg) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "profilegen_version": profilegen::VERSION,
        "params": {
            "angular_steps": cfg.angular_steps,
            "involute_steps": cfg.involute_steps,
            "facet_epsilon": cfg.facet_epsilon,
            "zero_tolerance": cfg.geom.zero_tolerance,
            "eps_det": cfg.geom.eps_det,
            "strict": cfg.fillet_policy == FilletPolicy::Abort
        },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn run(args: &[&str]) -> Result<()> {
        let argv = std::iter::once("profilegen").chain(args.iter().copied());
        execute(Cmd::try_parse_from(argv)?)
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn cam_lobe_writes_four_arcs_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("lobe.json");
        let out_s = out.to_str().unwrap();
        run(&[
            "cam-lobe",
            "--nose-offset",
            "1",
            "--base",
            "1",
            "--nose",
            "0.5",
            "--flank",
            "5",
            "--out",
            out_s,
        ])
        .unwrap();
        let v = read_json(&out);
        assert_eq!(v["name"], "cam_lobe");
        let arcs = v["entities"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|e| e["kind"] == "arc")
            .count();
        assert_eq!(arcs, 4);
        let prov = read_json(&dir.path().join("lobe.provenance.json"));
        assert_eq!(prov["command"], "cam-lobe");
        assert_eq!(prov["params"]["lift"], 0.5);
    }

    #[test]
    fn global_steps_flag_controls_sampling() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("cam.json");
        run(&[
            "--steps",
            "36",
            "cam-offset",
            "--offset",
            "1",
            "--radius",
            "2",
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let v = read_json(&out);
        assert_eq!(v["entities"][0]["kind"], "polyline");
        assert_eq!(v["entities"][0]["points"].as_array().unwrap().len(), 37);
    }

    #[test]
    fn smooth_reads_vertex_list() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("poly.json");
        std::fs::write(
            &input,
            r#"{"name": "corner", "vertices": [
                {"x": 0, "y": 0},
                {"x": 10, "y": 0, "radius": 5, "facets": 6},
                {"x": 10, "y": 10}
            ]}"#,
        )
        .unwrap();
        let out = dir.path().join("corner.json");
        run(&[
            "smooth",
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let v = read_json(&out);
        assert_eq!(v["name"], "corner");
        assert_eq!(v["entities"][0]["points"].as_array().unwrap().len(), 9);
        let prov = read_json(&dir.path().join("corner.provenance.json"));
        assert_eq!(prov["params"]["filleted"], 1);
    }

    #[test]
    fn strict_flag_turns_oversized_fillet_into_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("poly.json");
        std::fs::write(
            &input,
            r#"{"vertices": [
                {"x": 0, "y": 0},
                {"x": 10, "y": 0, "radius": 15, "facets": 6},
                {"x": 10, "y": 10}
            ]}"#,
        )
        .unwrap();
        let out = dir.path().join("p.json");
        let args = [
            "smooth",
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ];
        run(&args).unwrap();
        let mut strict = vec!["--strict"];
        strict.extend_from_slice(&args);
        assert!(run(&strict).is_err());
    }

    #[test]
    fn invalid_gear_is_reported() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("g.json");
        let res = run(&[
            "gear-involute",
            "--teeth",
            "2",
            "--pitch-diameter",
            "10",
            "--out",
            out.to_str().unwrap(),
        ]);
        assert!(res.is_err());
        assert!(!out.exists());
    }
}
