//! Diagram store types.
//!
//! Responsibilities:
//! - hold the ordered strokes and markers that make up one drill diagram
//! - round-trip losslessly through serde in the external record-store shape
//! - keep list order authoritative: it is both undo order and render order
//!   (all strokes draw, in list order, before any marker)
//!
//! Mutation goes through [`crate::editor::DiagramEditor`]; nothing here
//! enforces authoring policy.

mod color_tag;
mod marker;
mod stroke;

pub use color_tag::ColorTag;
pub use marker::Marker;
pub use stroke::Stroke;

use serde::{Deserialize, Serialize};

/// The stroke + marker content illustrating one drill.
///
/// Created empty when a drill draft begins, mutated only through
/// [`crate::editor::DiagramEditor`], and handed off by value once the
/// owning drill record is saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub strokes: Vec<Stroke>,
    pub markers: Vec<Marker>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.markers.is_empty()
    }

    /// Total undoable entities (strokes count whole, however many points).
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.strokes.len() + self.markers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;

    fn sample_diagram() -> Diagram {
        Diagram {
            strokes: vec![
                Stroke {
                    id: "s1".to_owned(),
                    points: vec![
                        Point::new(0.1, 0.1),
                        Point::new(0.5, 0.5),
                        Point::new(0.9, 0.2),
                    ],
                    pen_size: 3.0,
                    color: None,
                },
                Stroke {
                    id: "s2".to_owned(),
                    points: vec![Point::new(0.2, 0.8)],
                    pen_size: 5.0,
                    color: Some("#1B263B".to_owned()),
                },
            ],
            markers: vec![
                Marker::new(Point::new(0.25, 0.75), ColorTag::Red),
                Marker::new(Point::new(0.75, 0.25), ColorTag::Yellow),
            ],
        }
    }

    // ── round-trip ────────────────────────────────────────────────────────

    #[test]
    fn serde_round_trip_preserves_everything() {
        let d = sample_diagram();
        let json = serde_json::to_string(&d).unwrap();
        let back: Diagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn round_trip_preserves_order() {
        let d = sample_diagram();
        let back: Diagram = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
        assert_eq!(back.strokes[0].id, "s1");
        assert_eq!(back.strokes[1].id, "s2");
        assert_eq!(back.markers[0].color, ColorTag::Red);
        assert_eq!(back.markers[1].color, ColorTag::Yellow);
        assert_eq!(back.strokes[0].points, d.strokes[0].points);
    }

    #[test]
    fn round_trip_preserves_unknown_color_tag() {
        let mut d = sample_diagram();
        d.markers
            .push(Marker::new(Point::new(0.5, 0.5), ColorTag::Other("teal".into())));
        let back: Diagram = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
        assert_eq!(back, d);
    }

    // ── wire shape ────────────────────────────────────────────────────────

    #[test]
    fn marker_serializes_flat() {
        let d = Diagram {
            strokes: vec![],
            markers: vec![Marker::new(Point::new(0.5, 0.25), ColorTag::Blue)],
        };
        let v: serde_json::Value = serde_json::to_value(&d).unwrap();
        assert_eq!(v["markers"][0]["x"], 0.5);
        assert_eq!(v["markers"][0]["y"], 0.25);
        assert_eq!(v["markers"][0]["color"], "blue");
        // No nested position object, no id when absent.
        assert!(v["markers"][0].get("position").is_none());
        assert!(v["markers"][0].get("id").is_none());
    }

    #[test]
    fn stroke_serializes_with_size_field() {
        let d = sample_diagram();
        let v: serde_json::Value = serde_json::to_value(&d).unwrap();
        assert_eq!(v["strokes"][0]["size"], 3.0);
        assert!(v["strokes"][0].get("color").is_none());
        assert_eq!(v["strokes"][1]["color"], "#1B263B");
    }

    #[test]
    fn deserializes_legacy_record() {
        // Shape written by older clients: timestamp ids, marker ids present.
        let json = r#"{
            "strokes": [{"id": "1714378625123", "points": [{"x": 0.1, "y": 0.2}], "size": 3}],
            "markers": [{"id": "m1", "x": 0.4, "y": 0.6, "color": "yellow"}]
        }"#;
        let d: Diagram = serde_json::from_str(json).unwrap();
        assert_eq!(d.strokes[0].id, "1714378625123");
        assert_eq!(d.markers[0].id.as_deref(), Some("m1"));
        assert_eq!(d.markers[0].color, ColorTag::Yellow);
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn entity_count_sums_both_lists() {
        assert_eq!(sample_diagram().entity_count(), 4);
        assert_eq!(Diagram::new().entity_count(), 0);
        assert!(Diagram::new().is_empty());
    }
}
