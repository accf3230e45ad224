use crate::scene::shapes::cone::ConeGlyphCmd;
use crate::scene::shapes::dot::DotCmd;
use crate::scene::shapes::polyline::PolylineCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Connected line through two or more pixel points.
    Polyline(PolylineCmd),
    /// Single filled dot (a degenerate one-point stroke).
    Dot(DotCmd),
    /// Triangular cone marker glyph.
    ConeGlyph(ConeGlyphCmd),
}
