pub(crate) mod cone;
pub(crate) mod dot;
pub(crate) mod polyline;

pub use cone::ConeGlyphCmd;
pub use dot::DotCmd;
pub use polyline::PolylineCmd;
