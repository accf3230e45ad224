use crate::coords::{PxPoint, Surface};
use crate::diagram::Diagram;
use crate::paint::{marker_fill, INK};
use crate::scene::DrawList;

/// Cone glyph half-extent in pixels, fixed at every surface size.
pub const MARKER_HALF_SIZE: f32 = 8.0;

/// Cone glyph outline width in pixels.
pub const MARKER_OUTLINE_WIDTH: f32 = 1.5;

/// Renders a diagram onto a target surface as an ordered draw stream.
///
/// Pure: never mutates the diagram, and identical `(diagram, surface)`
/// inputs produce identical lists regardless of caller. All strokes are
/// recorded, in list order, before any marker.
///
/// Degenerate content never errors: an empty stroke records nothing, a
/// one-point stroke records a dot, and non-finite points are skipped. An
/// invalid surface yields an empty list.
pub fn render_diagram(diagram: &Diagram, surface: Surface) -> DrawList {
    let mut list = DrawList::new();

    if !surface.is_valid() {
        log::warn!(
            "render skipped: invalid surface {}x{}",
            surface.width,
            surface.height
        );
        return list;
    }

    for stroke in &diagram.strokes {
        let points: Vec<PxPoint> = stroke
            .points
            .iter()
            .filter(|p| p.is_finite())
            .map(|&p| surface.to_pixels(p))
            .collect();

        match points.as_slice() {
            [] => {}
            [center] => list.push_dot(*center, stroke.pen_size * 0.5, INK),
            _ => list.push_polyline(points, stroke.pen_size, INK),
        }
    }

    for marker in &diagram.markers {
        if !marker.position.is_finite() {
            continue;
        }
        list.push_cone_glyph(
            surface.to_pixels(marker.position),
            MARKER_HALF_SIZE,
            marker_fill(&marker.color),
            INK,
            MARKER_OUTLINE_WIDTH,
        );
    }

    list
}
