//! Output entities handed to serializers.

use crate::geom2::{Circle, Point2};

/// Circular arc, counter-clockwise from `start_deg` to `end_deg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Point2,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Arc {
    /// Arc on `circle` from `from` to `to` (both assumed on the boundary).
    pub fn on_circle(circle: &Circle, from: Point2, to: Point2) -> Self {
        Self {
            center: circle.c,
            radius: circle.r,
            start_deg: circle.angle_of_deg(from),
            end_deg: circle.angle_of_deg(to),
        }
    }

    pub fn start(&self) -> Point2 {
        self.point_at_deg(self.start_deg)
    }

    pub fn end(&self) -> Point2 {
        self.point_at_deg(self.end_deg)
    }

    /// Counter-clockwise sweep in degrees, in [0, 360).
    pub fn sweep_deg(&self) -> f64 {
        (self.end_deg - self.start_deg).rem_euclid(360.0)
    }

    fn point_at_deg(&self, deg: f64) -> Point2 {
        Circle::new(self.center, self.radius).point_at(deg.to_radians())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Polyline { points: Vec<Point2>, closed: bool },
    Arc(Arc),
    Circle(Circle),
}

/// Named, ordered entity list produced by one builder call.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub entities: Vec<Entity>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    pub fn push(&mut self, e: Entity) {
        self.entities.push(e);
    }

    pub fn polyline(&mut self, points: Vec<Point2>, closed: bool) {
        self.push(Entity::Polyline { points, closed });
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Arc(a) => Some(a),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Circle(c) => Some(c),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Point2], bool)> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Polyline { points, closed } => Some((points.as_slice(), *closed)),
            _ => None,
        })
    }

    /// All polyline vertices in entity order.
    pub fn points(&self) -> Vec<Point2> {
        self.polylines()
            .flat_map(|(pts, _)| pts.iter().copied())
            .collect()
    }
}
