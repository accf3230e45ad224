use crate::editor::Mode;

use super::PointerPhase;

/// Authoring-session gesture state.
///
/// `TapPending` exists only inside a single `on_event` call: a tap in
/// marker mode enters and leaves it synchronously, so observers between
/// events only ever see `Idle` or `Dragging`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    TapPending,
}

/// What the editor should do in response to an accepted event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GestureAction {
    BeginStroke,
    ExtendStroke,
    EndStroke,
    PlaceMarker,
}

/// Drag/tap arbitration for one input surface.
///
/// Exactly one gesture stream is active at a time; committing to a drag
/// cancels tap eligibility and vice versa. Transitions:
///
/// - `Idle → Dragging` on `Start` in draw mode
/// - `Dragging → Idle` on `End`
/// - `Idle → TapPending → Idle` on `Tap` in marker mode
///
/// Anything else is ignored (logged at trace). A drag is never reclassified
/// as a tap mid-gesture.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    state: GestureState,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Applies one classified pointer event under the current authoring
    /// mode. Returns the action to dispatch, or `None` for an illegal or
    /// mode-mismatched event.
    pub fn on_event(&mut self, phase: PointerPhase, mode: Mode) -> Option<GestureAction> {
        match (self.state, phase) {
            (GestureState::Idle, PointerPhase::Start) => {
                if mode != Mode::Draw {
                    log::trace!("gesture start ignored: mode is {mode:?}");
                    return None;
                }
                self.state = GestureState::Dragging;
                Some(GestureAction::BeginStroke)
            }

            (GestureState::Dragging, PointerPhase::Move) => Some(GestureAction::ExtendStroke),

            (GestureState::Dragging, PointerPhase::End) => {
                self.state = GestureState::Idle;
                Some(GestureAction::EndStroke)
            }

            (GestureState::Idle, PointerPhase::Tap) => {
                if mode != Mode::Marker {
                    log::trace!("tap ignored: mode is {mode:?}");
                    return None;
                }
                // Transient: commit the tap and return to idle in one step.
                self.state = GestureState::TapPending;
                self.state = GestureState::Idle;
                Some(GestureAction::PlaceMarker)
            }

            (state, phase) => {
                log::trace!("illegal gesture transition ignored: {state:?} + {phase:?}");
                None
            }
        }
    }

    /// Abandons any in-flight gesture (e.g. the session is being discarded).
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── draw mode ─────────────────────────────────────────────────────────

    #[test]
    fn drag_cycle_in_draw_mode() {
        let mut g = GestureRecognizer::new();
        assert_eq!(g.on_event(PointerPhase::Start, Mode::Draw), Some(GestureAction::BeginStroke));
        assert_eq!(g.state(), GestureState::Dragging);
        assert_eq!(g.on_event(PointerPhase::Move, Mode::Draw), Some(GestureAction::ExtendStroke));
        assert_eq!(g.on_event(PointerPhase::End, Mode::Draw), Some(GestureAction::EndStroke));
        assert_eq!(g.state(), GestureState::Idle);
    }

    #[test]
    fn tap_in_draw_mode_is_ignored() {
        let mut g = GestureRecognizer::new();
        assert_eq!(g.on_event(PointerPhase::Tap, Mode::Draw), None);
        assert_eq!(g.state(), GestureState::Idle);
    }

    // ── marker mode ───────────────────────────────────────────────────────

    #[test]
    fn tap_in_marker_mode_places_and_returns_to_idle() {
        let mut g = GestureRecognizer::new();
        assert_eq!(g.on_event(PointerPhase::Tap, Mode::Marker), Some(GestureAction::PlaceMarker));
        assert_eq!(g.state(), GestureState::Idle);
    }

    #[test]
    fn drag_start_in_marker_mode_is_ignored() {
        let mut g = GestureRecognizer::new();
        assert_eq!(g.on_event(PointerPhase::Start, Mode::Marker), None);
        assert_eq!(g.state(), GestureState::Idle);
    }

    // ── illegal transitions ───────────────────────────────────────────────

    #[test]
    fn drag_cannot_be_reclassified_as_tap() {
        let mut g = GestureRecognizer::new();
        g.on_event(PointerPhase::Start, Mode::Draw);
        assert_eq!(g.on_event(PointerPhase::Tap, Mode::Draw), None);
        assert_eq!(g.state(), GestureState::Dragging);
    }

    #[test]
    fn move_and_end_without_start_are_ignored() {
        let mut g = GestureRecognizer::new();
        assert_eq!(g.on_event(PointerPhase::Move, Mode::Draw), None);
        assert_eq!(g.on_event(PointerPhase::End, Mode::Draw), None);
        assert_eq!(g.state(), GestureState::Idle);
    }

    #[test]
    fn nested_start_is_ignored() {
        let mut g = GestureRecognizer::new();
        g.on_event(PointerPhase::Start, Mode::Draw);
        assert_eq!(g.on_event(PointerPhase::Start, Mode::Draw), None);
        assert_eq!(g.state(), GestureState::Dragging);
    }

    #[test]
    fn reset_abandons_drag() {
        let mut g = GestureRecognizer::new();
        g.on_event(PointerPhase::Start, Mode::Draw);
        g.reset();
        assert_eq!(g.state(), GestureState::Idle);
    }
}
