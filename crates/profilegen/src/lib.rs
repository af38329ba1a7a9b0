//! Profile geometry for mechanical parts: cam lobes, gear teeth and cast-wheel
//! cross-sections.
//!
//! Layers
//! - `geom2`: vector primitives, circles, parametric lines, the quadratic
//!   solver and the circle/line intersection kernel.
//! - `polygon`: vertex sequences with per-vertex fillet requests and the
//!   corner-smoothing engine.
//! - `profile`: builders that assemble kernel output into ordered entity lists
//!   (polylines, arcs, circles) for downstream serializers.
//!
//! Everything is a pure function of its inputs. Tolerances and sampling
//! densities travel in `GeomCfg` / `ProfileCfg` rather than module globals.

pub mod error;
pub mod geom2;
pub mod polygon;
pub mod profile;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom2::{Circle, CircleIntersection, GeomCfg, Line, Point2, Roots};
pub use polygon::{FilletPolicy, Polygon, SmoothReport, Smoothed, Vertex};
pub use profile::{Arc, Entity, Profile, ProfileCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::geom2::{
        circle_circle, line_circle, solve_quadratic, Circle, CircleIntersection, GeomCfg, Line,
        Point2, Roots,
    };
    pub use crate::polygon::{smooth, FilletPolicy, Polygon, SmoothReport, Smoothed, Vertex};
    pub use crate::profile::{
        polygon_profile, smooth_vertices, CycloidGear, Entity, InvoluteGear, LobeCam, OffsetCam,
        Profile, ProfileCfg, VertexSpec, Wheel,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
