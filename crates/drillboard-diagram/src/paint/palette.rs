use crate::diagram::ColorTag;

use super::Color;

/// Ink used for stroke lines and glyph outlines (`#1B263B`).
pub const INK: Color = Color::from_srgb_u8(0x1B, 0x26, 0x3B);

/// Marker fill for the `red` tag (`#EF4444`).
pub const MARKER_RED: Color = Color::from_srgb_u8(0xEF, 0x44, 0x44);

/// Marker fill for the `blue` tag (`#3B82F6`).
pub const MARKER_BLUE: Color = Color::from_srgb_u8(0x3B, 0x82, 0xF6);

/// Marker fill for the `yellow` tag (`#F59E0B`).
pub const MARKER_YELLOW: Color = Color::from_srgb_u8(0xF5, 0x9E, 0x0B);

/// Fill color for a marker tag.
///
/// Unrecognized tags fall back to the red fill: authored content is
/// visually approximated, never omitted.
pub fn marker_fill(tag: &ColorTag) -> Color {
    match tag {
        ColorTag::Red => MARKER_RED,
        ColorTag::Blue => MARKER_BLUE,
        ColorTag::Yellow => MARKER_YELLOW,
        ColorTag::Other(_) => MARKER_RED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_palette() {
        assert_eq!(marker_fill(&ColorTag::Red), MARKER_RED);
        assert_eq!(marker_fill(&ColorTag::Blue), MARKER_BLUE);
        assert_eq!(marker_fill(&ColorTag::Yellow), MARKER_YELLOW);
    }

    #[test]
    fn unknown_tag_falls_back_to_red() {
        assert_eq!(marker_fill(&ColorTag::Other("teal".into())), MARKER_RED);
    }
}
