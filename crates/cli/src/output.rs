//! JSON shapes for profiles on disk and polygons read from disk.

use profilegen::profile::VertexSpec;
use profilegen::{Entity, Point2, Profile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityOut {
    Polyline {
        points: Vec<[f64; 2]>,
        closed: bool,
    },
    Arc {
        center: [f64; 2],
        radius: f64,
        start_deg: f64,
        end_deg: f64,
    },
    Circle {
        center: [f64; 2],
        radius: f64,
    },
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileOut {
    pub name: String,
    pub entities: Vec<EntityOut>,
}

fn xy(p: &Point2) -> [f64; 2] {
    [p.x, p.y]
}

impl From<&Entity> for EntityOut {
    fn from(e: &Entity) -> Self {
        match e {
            Entity::Polyline { points, closed } => EntityOut::Polyline {
                points: points.iter().map(xy).collect(),
                closed: *closed,
            },
            Entity::Arc(a) => EntityOut::Arc {
                center: xy(&a.center),
                radius: a.radius,
                start_deg: a.start_deg,
                end_deg: a.end_deg,
            },
            Entity::Circle(c) => EntityOut::Circle {
                center: xy(&c.c),
                radius: c.r,
            },
        }
    }
}

impl From<&Profile> for ProfileOut {
    fn from(p: &Profile) -> Self {
        Self {
            name: p.name.clone(),
            entities: p.entities.iter().map(EntityOut::from).collect(),
        }
    }
}

/// Input polygon for the `smooth` command.
#[derive(Debug, Deserialize)]
pub struct PolygonIn {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    pub vertices: Vec<VertexIn>,
}

fn default_name() -> String {
    "polygon".to_string()
}

#[derive(Debug, Deserialize)]
pub struct VertexIn {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub facets: usize,
}

impl PolygonIn {
    pub fn specs(&self) -> Vec<VertexSpec> {
        self.vertices
            .iter()
            .map(|v| VertexSpec {
                x: v.x,
                y: v.y,
                radius: v.radius,
                facets: v.facets,
            })
            .collect()
    }
}
