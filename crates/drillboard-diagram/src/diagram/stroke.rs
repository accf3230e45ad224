use serde::{Deserialize, Serialize};

use crate::coords::Point;

/// One continuous freehand line, stored as an ordered point sequence.
///
/// Points are in draw order and append-only while the stroke is being
/// authored; once finalized a stroke changes only by whole-stroke removal
/// (undo). Degenerate strokes (0 or 1 point) are legal content and render
/// as nothing or a single dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Opaque identifier. The editor generates UUIDs; deserialized data may
    /// carry any string (older records used timestamps).
    pub id: String,
    #[serde(default)]
    pub points: Vec<Point>,
    /// Line width in pixels, independent of surface size. Always positive.
    #[serde(rename = "size")]
    pub pen_size: f32,
    /// Carried through serialization for compatibility; rendering always
    /// uses the ink color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Stroke {
    /// Starts a new stroke from its first sampled point.
    pub fn begin(id: String, first: Point, pen_size: f32) -> Self {
        Self {
            id,
            points: vec![first],
            pen_size,
            color: None,
        }
    }

    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
