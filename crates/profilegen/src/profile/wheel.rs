//! Cast wheel half cross-section: hub, web and rim in the (radial, axial)
//! plane, with fillets where the web meets hub and rim.

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use super::cfg::ProfileCfg;
use super::check_positive;
use super::entity::Profile;
use crate::error::GeomError;
use crate::geom2::Point2;
use crate::polygon::{smooth, Polygon, Smoothed, Vertex};

/// Wheel dimensions. Radii are measured from the axle, widths along it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wheel {
    pub bore_radius: f64,
    pub hub_radius: f64,
    pub hub_width: f64,
    pub web_thickness: f64,
    pub rim_inner_radius: f64,
    pub rim_radius: f64,
    pub rim_width: f64,
    /// Fillet where the web meets hub and rim.
    pub fillet_radius: f64,
    /// Rounding of the four rim corners.
    pub edge_radius: f64,
}

impl Default for Wheel {
    fn default() -> Self {
        Self {
            bore_radius: 6.0,
            hub_radius: 15.0,
            hub_width: 20.0,
            web_thickness: 5.0,
            rim_inner_radius: 40.0,
            rim_radius: 50.0,
            rim_width: 16.0,
            fillet_radius: 3.0,
            edge_radius: 1.0,
        }
    }
}

impl Wheel {
    fn validate(&self) -> Result<(), GeomError> {
        if !(self.bore_radius >= 0.0) {
            return Err(GeomError::InvalidParameter {
                name: "bore_radius",
                value: self.bore_radius,
                reason: "must be >= 0",
            });
        }
        check_positive("hub_width", self.hub_width)?;
        check_positive("web_thickness", self.web_thickness)?;
        check_positive("rim_width", self.rim_width)?;
        let ordered = [
            ("hub_radius", self.hub_radius, self.bore_radius),
            ("rim_inner_radius", self.rim_inner_radius, self.hub_radius),
            ("rim_radius", self.rim_radius, self.rim_inner_radius),
        ];
        for (name, value, below) in ordered {
            if !(value > below) {
                return Err(GeomError::InvalidParameter {
                    name,
                    value,
                    reason: "radii must increase from bore to rim",
                });
            }
        }
        if !(self.web_thickness < self.hub_width.min(self.rim_width)) {
            return Err(GeomError::InvalidParameter {
                name: "web_thickness",
                value: self.web_thickness,
                reason: "web must be thinner than hub and rim",
            });
        }
        for (name, value) in [
            ("fillet_radius", self.fillet_radius),
            ("edge_radius", self.edge_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GeomError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite and >= 0",
                });
            }
        }
        Ok(())
    }

    /// Unsmoothed closed section, counter-clockwise from the bore.
    pub fn polygon(&self, cfg: &ProfileCfg) -> Result<Polygon, GeomError> {
        self.validate()?;
        let (hw, wt, rw) = (
            self.hub_width / 2.0,
            self.web_thickness / 2.0,
            self.rim_width / 2.0,
        );
        let (bore, hub, rim_in, rim) = (
            self.bore_radius,
            self.hub_radius,
            self.rim_inner_radius,
            self.rim_radius,
        );
        let fillet = |x: f64, y: f64| -> Result<Vertex, GeomError> {
            Vertex::filleted(
                Point2::new(x, y),
                self.fillet_radius,
                cfg.facets_for_arc(self.fillet_radius, FRAC_PI_2),
            )
        };
        let edge = |x: f64, y: f64| -> Result<Vertex, GeomError> {
            Vertex::filleted(
                Point2::new(x, y),
                self.edge_radius,
                cfg.facets_for_arc(self.edge_radius, FRAC_PI_2),
            )
        };
        let sharp = |x: f64, y: f64| -> Result<Vertex, GeomError> {
            Ok(Vertex::fixed(Point2::new(x, y)))
        };

        let verts = [
            sharp(bore, -hw),
            sharp(hub, -hw),
            fillet(hub, -wt),
            fillet(rim_in, -wt),
            edge(rim_in, -rw),
            edge(rim, -rw),
            edge(rim, rw),
            edge(rim_in, rw),
            fillet(rim_in, wt),
            fillet(hub, wt),
            sharp(hub, hw),
            sharp(bore, hw),
        ]
        .into_iter()
        .collect::<Result<Vec<_>, GeomError>>()?;
        Polygon::new(verts, true)
    }

    pub fn smoothed(&self, cfg: &ProfileCfg) -> Result<Smoothed, GeomError> {
        smooth(&self.polygon(cfg)?, cfg.fillet_policy)
    }

    /// Facets for a full rotational extrusion of the section.
    pub fn extrusion_facets(&self, cfg: &ProfileCfg) -> usize {
        cfg.facets_for_radius(self.rim_radius)
    }

    pub fn profile(&self, cfg: &ProfileCfg) -> Result<Profile, GeomError> {
        let s = self.smoothed(cfg)?;
        debug!(
            vertices = s.report.output_vertices,
            skipped = s.report.skipped.len(),
            "wheel section"
        );
        let mut out = Profile::new("wheel_section");
        out.polyline(s.polygon.points(), true);
        Ok(out)
    }
}
