use serde::{Deserialize, Serialize};

use crate::coords::Point;

use super::ColorTag;

/// A single colored cone glyph placed by a tap. Never a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MarkerRepr", into = "MarkerRepr")]
pub struct Marker {
    pub id: Option<String>,
    pub position: Point,
    pub color: ColorTag,
}

impl Marker {
    pub fn new(position: Point, color: ColorTag) -> Self {
        Self {
            id: None,
            position,
            color,
        }
    }
}

/// Wire shape: the position is flattened to `{x, y, color}`, with `id` only
/// when present. Matches the external record store's marker records.
#[derive(Serialize, Deserialize)]
struct MarkerRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    x: f32,
    y: f32,
    color: ColorTag,
}

impl From<MarkerRepr> for Marker {
    fn from(r: MarkerRepr) -> Self {
        Self {
            id: r.id,
            position: Point::new(r.x, r.y),
            color: r.color,
        }
    }
}

impl From<Marker> for MarkerRepr {
    fn from(m: Marker) -> Self {
        Self {
            id: m.id,
            x: m.position.x,
            y: m.position.y,
            color: m.color,
        }
    }
}
