//! Cam profiles.
//!
//! - `OffsetCam`: an eccentric circle sampled by rays from the rotation axis.
//! - `LobeCam`: base circle, nose circle and two flank arcs tangent to both,
//!   located by circle-circle intersection.

use std::f64::consts::TAU;
use std::fmt;

use tracing::debug;

use super::cfg::ProfileCfg;
use super::entity::{Arc, Entity, Profile};
use super::{check_positive, check_steps};
use crate::error::GeomError;
use crate::geom2::{circle_circle, line_circle, Circle, Line, Point2};

/// Circle of `radius` centred at `(0, offset)`, turning about the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetCam {
    pub offset: f64,
    pub radius: f64,
}

impl OffsetCam {
    pub fn new(offset: f64, radius: f64) -> Self {
        Self { offset, radius }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(Point2::new(0.0, self.offset), self.radius)
    }

    /// Boundary sampled at `angular_steps + 1` equally spaced ray angles.
    ///
    /// Each ray keeps its far crossing; the near one lies behind the axis.
    pub fn boundary(&self, cfg: &ProfileCfg) -> Result<Vec<Point2>, GeomError> {
        check_positive("radius", self.radius)?;
        if !self.offset.is_finite() {
            return Err(GeomError::NonFinite {
                context: "cam offset",
            });
        }
        if self.offset.abs() > self.radius {
            return Err(GeomError::InvalidParameter {
                name: "offset",
                value: self.offset,
                reason: "rotation axis must lie inside the cam circle",
            });
        }
        let steps = check_steps("angular_steps", cfg.angular_steps)?;
        let circle = self.circle();
        let origin = Point2::zeros();
        let delta = TAU / steps as f64;

        (0..=steps)
            .map(|k| {
                let ray = Line::ray(origin, k as f64 * delta);
                let t = line_circle(&ray, &circle, cfg.geom)?.max().ok_or_else(|| {
                    GeomError::missing(format!("cam ray {k} misses the offset circle"))
                })?;
                Ok(ray.at(t))
            })
            .collect()
    }

    pub fn profile(&self, cfg: &ProfileCfg) -> Result<Profile, GeomError> {
        let pts = self.boundary(cfg)?;
        debug!(samples = pts.len(), "offset cam");
        let mut out = Profile::new("cam_offset");
        out.polyline(pts, false);
        Ok(out)
    }
}

/// Circular-arc cam: base circle at the origin, nose circle on the +y axis,
/// flanks of a common radius tangent to both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LobeCam {
    pub nose_offset: f64,
    pub base_radius: f64,
    pub nose_radius: f64,
    pub flank_radius: f64,
}

/// The four arcs of a lobe cam, each counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LobeArcs {
    pub nose: Arc,
    pub base: Arc,
    pub flank1: Arc,
    pub flank2: Arc,
}

impl LobeArcs {
    /// Arcs in profile order: base, flank1, nose, flank2.
    pub fn chain(&self) -> [Arc; 4] {
        [self.base, self.flank1, self.nose, self.flank2]
    }
}

impl LobeCam {
    pub fn new(nose_offset: f64, base_radius: f64, nose_radius: f64, flank_radius: f64) -> Self {
        Self {
            nose_offset,
            base_radius,
            nose_radius,
            flank_radius,
        }
    }

    pub fn base(&self) -> Circle {
        Circle::origin(self.base_radius)
    }

    pub fn nose(&self) -> Circle {
        Circle::new(Point2::new(0.0, self.nose_offset), self.nose_radius)
    }

    /// Maximum follower lift above the base circle.
    pub fn lift(&self) -> f64 {
        self.nose_offset + self.nose_radius - self.base_radius
    }

    fn validate(&self) -> Result<(), GeomError> {
        check_positive("base_radius", self.base_radius)?;
        check_positive("nose_radius", self.nose_radius)?;
        check_positive("flank_radius", self.flank_radius)?;
        check_positive("nose_offset", self.nose_offset)?;
        if self.flank_radius <= self.base_radius.max(self.nose_radius) {
            return Err(GeomError::InvalidParameter {
                name: "flank_radius",
                value: self.flank_radius,
                reason: "must exceed both the base and nose radius",
            });
        }
        Ok(())
    }

    /// Flank circles, left (`x < 0`) first.
    pub fn flanks(&self, cfg: &ProfileCfg) -> Result<(Circle, Circle), GeomError> {
        self.validate()?;
        let (base, nose) = (self.base(), self.nose());
        // flank centres sit flank - r away from each circle's centre
        let c1 = Circle::new(nose.c, self.flank_radius - nose.r);
        let c2 = Circle::new(base.c, self.flank_radius - base.r);
        let centers = circle_circle(&c1, &c2, cfg.geom)?.into_points(&c1)?;
        match centers.as_slice() {
            [a, b] => Ok((
                Circle::new(*a, self.flank_radius),
                Circle::new(*b, self.flank_radius),
            )),
            other => Err(GeomError::missing(format!(
                "flank centres: expected 2 solutions, found {}",
                other.len()
            ))),
        }
    }

    /// Resolve tangent points and the four arcs.
    pub fn arcs(&self, cfg: &ProfileCfg) -> Result<LobeArcs, GeomError> {
        let (flank1, flank2) = self.flanks(cfg)?;
        let (base, nose) = (self.base(), self.nose());

        let tangent = |a: &Circle, b: &Circle, what: &str| -> Result<Point2, GeomError> {
            circle_circle(a, b, cfg.geom)?
                .into_points(a)?
                .first()
                .copied()
                .ok_or_else(|| GeomError::missing(format!("{what} tangent point")))
        };
        let nf1 = tangent(&nose, &flank1, "nose/flank1")?;
        let nf2 = tangent(&nose, &flank2, "nose/flank2")?;
        let bf1 = tangent(&base, &flank1, "base/flank1")?;
        let bf2 = tangent(&base, &flank2, "base/flank2")?;

        Ok(LobeArcs {
            nose: Arc::on_circle(&nose, nf1, nf2),
            base: Arc::on_circle(&base, bf2, bf1),
            flank1: Arc::on_circle(&flank1, bf1, nf1),
            flank2: Arc::on_circle(&flank2, nf2, bf2),
        })
    }

    pub fn profile(&self, cfg: &ProfileCfg) -> Result<Profile, GeomError> {
        let arcs = self.arcs(cfg)?;
        debug!(lift = self.lift(), "lobe cam");
        let mut out = Profile::new("cam_lobe");
        for a in [arcs.nose, arcs.base, arcs.flank1, arcs.flank2] {
            out.push(Entity::Arc(a));
        }
        Ok(out)
    }
}

impl fmt::Display for LobeCam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base radius {:.3}", self.base_radius)?;
        writeln!(f, "nose radius {:.3}", self.nose_radius)?;
        writeln!(f, "nose offset {:.3}", self.nose_offset)?;
        writeln!(f, "flank radius {:.3}", self.flank_radius)?;
        write!(f, "lift {:.3}", self.lift())
    }
}
