/// Classification of a raw pointer event, as supplied by the host shell.
///
/// The shell's gesture system decides drag vs. tap; this core only keeps the
/// two mutually exclusive once a touch sequence has committed to one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerPhase {
    /// A drag began.
    Start,
    /// The pointer moved during a drag.
    Move,
    /// The drag ended (pointer lifted).
    End,
    /// A discrete tap (never part of a drag).
    Tap,
}

/// Raw pointer event in surface pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    #[inline]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }
}
