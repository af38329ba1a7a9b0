//! Gear tooth profiles by direct parametric sampling.
//!
//! No intersections here: the involute and the cycloids are sampled
//! point-by-point and placed with rotations and a mirror about the x-axis.

use std::f64::consts::TAU;
use std::fmt;

use tracing::debug;

use super::cfg::ProfileCfg;
use super::entity::{Arc, Entity, Profile};
use super::{check_positive, check_steps};
use crate::error::GeomError;
use crate::geom2::vec::{mirror_x, polar, rot_matrix};
use crate::geom2::{Circle, Point2};

/// Point on the involute of a circle of radius `base` at roll angle `theta`.
pub fn involute_point(base: f64, theta: f64) -> Point2 {
    let (s, c) = theta.sin_cos();
    let l = base * theta;
    Point2::new(base * c + l * s, base * s - l * c)
}

/// Radial distance of the involute point at roll angle `theta`.
pub fn involute_radius(base: f64, theta: f64) -> f64 {
    base * (1.0 + theta * theta).sqrt()
}

/// Roll angle at which the involute reaches `radius` (`radius >= base`).
pub fn involute_theta(base: f64, radius: f64) -> f64 {
    ((radius * radius) / (base * base) - 1.0).max(0.0).sqrt()
}

/// Epicycloid traced by a circle of radius `pr / (n + 1)` rolling outside the
/// pitch circle.
pub fn epicycloid_point(pr: f64, n: usize, theta: f64) -> Point2 {
    let k = (n + 1) as f64;
    let cr = pr / k;
    polar(pr + cr, theta) + polar(cr, k * theta)
}

/// Hypocycloid traced by a circle of radius `pr / (n - 1)` rolling inside the
/// pitch circle; the rolling circle turns backwards.
pub fn hypocycloid_point(pr: f64, n: usize, theta: f64) -> Point2 {
    let k = n.saturating_sub(1).max(1) as f64;
    let cr = pr / k;
    polar(pr - cr, theta) + polar(cr, -k * theta)
}

/// Involute spur gear in diametral-pitch units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvoluteGear {
    pub teeth: usize,
    pub pitch_diameter: f64,
    /// Pressure angle, radians.
    pub pressure_angle: f64,
    pub diametral_pitch: f64,
    pub addendum: f64,
    pub dedendum: f64,
    pub clearance: f64,
    pub pitch_radius: f64,
    pub base_radius: f64,
    pub addendum_radius: f64,
    pub dedendum_radius: f64,
    /// Angle between adjacent teeth, radians.
    pub angular_pitch: f64,
}

/// One tooth at angle zero; the rest are rotations of it.
#[derive(Clone, Debug, PartialEq)]
pub struct ToothProfile {
    pub lower: Vec<Point2>,
    pub upper: Vec<Point2>,
    pub radial_lower: [Point2; 2],
    pub radial_upper: [Point2; 2],
    /// Root arc angles on the dedendum circle, radians.
    pub root: (f64, f64),
    /// Crown arc angles on the addendum circle, radians.
    pub crown: (f64, f64),
}

impl InvoluteGear {
    pub fn new(
        teeth: usize,
        pitch_diameter: f64,
        pressure_angle_deg: f64,
    ) -> Result<Self, GeomError> {
        if teeth < 3 {
            return Err(GeomError::InvalidParameter {
                name: "teeth",
                value: teeth as f64,
                reason: "need at least 3 teeth",
            });
        }
        check_positive("pitch_diameter", pitch_diameter)?;
        if !(pressure_angle_deg > 0.0 && pressure_angle_deg < 45.0) {
            return Err(GeomError::InvalidParameter {
                name: "pressure_angle",
                value: pressure_angle_deg,
                reason: "must lie in (0, 45) degrees",
            });
        }
        let pressure_angle = pressure_angle_deg.to_radians();
        let diametral_pitch = teeth as f64 / pitch_diameter;
        let addendum = 1.0 / diametral_pitch;
        let dedendum = 1.25 / diametral_pitch;
        let pitch_radius = pitch_diameter / 2.0;
        Ok(Self {
            teeth,
            pitch_diameter,
            pressure_angle,
            diametral_pitch,
            addendum,
            dedendum,
            clearance: 0.25 / diametral_pitch,
            pitch_radius,
            base_radius: pitch_radius * pressure_angle.cos(),
            addendum_radius: pitch_radius + addendum,
            dedendum_radius: pitch_radius - dedendum,
            angular_pitch: TAU / teeth as f64,
        })
    }

    /// Involute from the base circle to the addendum circle, rotated so the
    /// flank crosses the pitch circle at `-angular_pitch / 4` (equal tooth and
    /// gap on the pitch circle).
    pub fn flank(&self, cfg: &ProfileCfg) -> Result<Vec<Point2>, GeomError> {
        let steps = check_steps("involute_steps", cfg.involute_steps)?;
        let br = self.base_radius;
        let step = involute_theta(br, self.addendum_radius) / steps as f64;
        let pitch = involute_point(br, involute_theta(br, self.pitch_radius));
        let ofs = pitch.y.atan2(pitch.x) + self.angular_pitch / 4.0;
        let rot = rot_matrix(-ofs);
        Ok((0..=steps)
            .map(|k| rot * involute_point(br, k as f64 * step))
            .collect())
    }

    pub fn tooth(&self, cfg: &ProfileCfg) -> Result<ToothProfile, GeomError> {
        let lower = self.flank(cfg)?;
        let upper: Vec<Point2> = lower.iter().copied().map(mirror_x).collect();
        let (foot, tip) = match (upper.first(), upper.last()) {
            (Some(f), Some(t)) => (*f, *t),
            _ => return Err(GeomError::missing("empty involute flank")),
        };
        let foot_angle = foot.y.atan2(foot.x);
        let tip_angle = tip.y.atan2(tip.x);
        let inner = polar(self.dedendum_radius, foot_angle);
        Ok(ToothProfile {
            lower,
            upper,
            radial_upper: [foot, inner],
            radial_lower: [mirror_x(foot), mirror_x(inner)],
            root: (foot_angle, self.angular_pitch - foot_angle),
            crown: (-tip_angle, tip_angle),
        })
    }

    pub fn profile(&self, cfg: &ProfileCfg) -> Result<Profile, GeomError> {
        let tooth = self.tooth(cfg)?;
        let mut out = Profile::new("gear_involute");
        for i in 0..self.teeth {
            let a = i as f64 * self.angular_pitch;
            let rot = rot_matrix(a);
            let turn = |pts: &[Point2]| pts.iter().map(|p| rot * *p).collect::<Vec<_>>();
            out.polyline(turn(&tooth.lower[..]), false);
            out.polyline(turn(&tooth.upper[..]), false);
            out.push(Entity::Arc(arc_deg(
                self.dedendum_radius,
                tooth.root.0 + a,
                tooth.root.1 + a,
            )));
            out.push(Entity::Arc(arc_deg(
                self.addendum_radius,
                tooth.crown.0 + a,
                tooth.crown.1 + a,
            )));
            out.polyline(turn(&tooth.radial_upper[..]), false);
            out.polyline(turn(&tooth.radial_lower[..]), false);
        }
        for r in [
            self.dedendum_radius,
            self.base_radius,
            self.pitch_radius,
            self.addendum_radius,
        ] {
            out.push(Entity::Circle(Circle::origin(r)));
        }
        debug!(teeth = self.teeth, entities = out.entities.len(), "involute gear");
        Ok(out)
    }
}

impl fmt::Display for InvoluteGear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "number of teeth {}", self.teeth)?;
        writeln!(f, "pressure angle {:.1}", self.pressure_angle.to_degrees())?;
        writeln!(f, "outside diameter {:.3}", 2.0 * self.addendum_radius)?;
        writeln!(f, "pitch diameter {:.3}", self.pitch_diameter)?;
        writeln!(f, "base diameter {:.3}", 2.0 * self.base_radius)?;
        writeln!(f, "inside diameter {:.3}", 2.0 * self.dedendum_radius)?;
        write!(f, "angular pitch {:.3}", self.angular_pitch.to_degrees())
    }
}

/// Cycloidal gear outline curves on a pitch circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycloidGear {
    pub teeth: usize,
    pub pitch_diameter: f64,
}

impl CycloidGear {
    pub fn new(teeth: usize, pitch_diameter: f64) -> Result<Self, GeomError> {
        if teeth < 3 {
            return Err(GeomError::InvalidParameter {
                name: "teeth",
                value: teeth as f64,
                reason: "need at least 3 teeth",
            });
        }
        check_positive("pitch_diameter", pitch_diameter)?;
        Ok(Self {
            teeth,
            pitch_diameter,
        })
    }

    pub fn pitch_radius(&self) -> f64 {
        self.pitch_diameter / 2.0
    }

    pub fn angular_pitch(&self) -> f64 {
        TAU / self.teeth as f64
    }

    fn sample(
        &self,
        cfg: &ProfileCfg,
        f: fn(f64, usize, f64) -> Point2,
    ) -> Result<Vec<Point2>, GeomError> {
        let steps = check_steps("angular_steps", cfg.angular_steps)?;
        let delta = TAU / steps as f64;
        let pr = self.pitch_radius();
        Ok((0..=steps)
            .map(|k| f(pr, self.teeth, k as f64 * delta))
            .collect())
    }

    pub fn epicycloid(&self, cfg: &ProfileCfg) -> Result<Vec<Point2>, GeomError> {
        self.sample(cfg, epicycloid_point)
    }

    pub fn hypocycloid(&self, cfg: &ProfileCfg) -> Result<Vec<Point2>, GeomError> {
        self.sample(cfg, hypocycloid_point)
    }

    pub fn profile(&self, cfg: &ProfileCfg) -> Result<Profile, GeomError> {
        let mut out = Profile::new("gear_cycloid");
        out.push(Entity::Circle(Circle::origin(self.pitch_radius())));
        out.polyline(self.epicycloid(cfg)?, false);
        out.polyline(self.hypocycloid(cfg)?, false);
        Ok(out)
    }
}

impl fmt::Display for CycloidGear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "number of teeth {}", self.teeth)?;
        writeln!(f, "pitch diameter {:.3}", self.pitch_diameter)?;
        write!(f, "angular pitch {:.3}", self.angular_pitch().to_degrees())
    }
}

fn arc_deg(radius: f64, start: f64, end: f64) -> Arc {
    Arc {
        center: Point2::zeros(),
        radius,
        start_deg: start.to_degrees(),
        end_deg: end.to_degrees(),
    }
}
