//! Interactive diagram authoring.
//!
//! The editor owns the one authoritative in-progress [`Diagram`]: rendering
//! surfaces read immutable snapshots and nothing else holds a mutable copy.
//! All mutation happens synchronously inside discrete event calls.

use uuid::Uuid;

use crate::coords::{Point, Surface};
use crate::diagram::{ColorTag, Diagram, Marker, Stroke};
use crate::input::{GestureAction, GestureRecognizer, PointerEvent, PointerPhase, SamplerConfig};

/// Pen size used until the host configures one.
pub const DEFAULT_PEN_SIZE: f32 = 3.0;

/// Authoring mode: fully determines how a gesture is interpreted. A single
/// gesture is never split between the two behaviors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Mode {
    #[default]
    Draw,
    Marker,
}

/// Which list the n-th inserted entity went into. Drives insertion-order
/// undo without widening the serialized diagram shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum EntityKind {
    Stroke,
    Marker,
}

/// Interactive authoring session over one diagram.
///
/// Operations are infallible: malformed geometry (non-finite or
/// out-of-range coordinates, invalid surfaces, non-positive pen sizes) is
/// rejected at the boundary as a logged no-op. A single dropped sample is
/// invisible; a mid-gesture failure would not be. Every operation leaves
/// the diagram structurally valid, including on an empty diagram.
#[derive(Debug)]
pub struct DiagramEditor {
    diagram: Diagram,
    mode: Mode,
    color: ColorTag,
    pen_size: f32,
    sampler: SamplerConfig,
    recognizer: GestureRecognizer,
    /// Insertion order of entities, newest last. Undo pops from here.
    history: Vec<EntityKind>,
    /// Whether the last stroke in the diagram is still being drawn.
    stroke_open: bool,
}

impl Default for DiagramEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramEditor {
    /// Starts an empty authoring session.
    pub fn new() -> Self {
        Self::with_sampler(SamplerConfig::default())
    }

    /// Starts an empty session with a custom sampling threshold.
    pub fn with_sampler(sampler: SamplerConfig) -> Self {
        Self {
            diagram: Diagram::new(),
            mode: Mode::Draw,
            color: ColorTag::Red,
            pen_size: DEFAULT_PEN_SIZE,
            sampler,
            recognizer: GestureRecognizer::new(),
            history: Vec::new(),
            stroke_open: false,
        }
    }

    // ── snapshots & handoff ───────────────────────────────────────────────

    /// Read-only view of the working diagram, for rendering.
    #[inline]
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Hands the finished diagram to the host (to attach to a drill record)
    /// and resets the working state. The returned value is immutable as far
    /// as this editor is concerned; further edits start from empty.
    pub fn take_diagram(&mut self) -> Diagram {
        self.history.clear();
        self.stroke_open = false;
        self.recognizer.reset();
        std::mem::take(&mut self.diagram)
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn color(&self) -> &ColorTag {
        &self.color
    }

    #[inline]
    pub fn pen_size(&self) -> f32 {
        self.pen_size
    }

    /// Sets the authoring mode for subsequent gestures. Never retroactive.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Sets the color tag for subsequently placed markers.
    pub fn set_color(&mut self, color: ColorTag) {
        self.color = color;
    }

    /// Sets the pen size for subsequently begun strokes. Non-positive or
    /// non-finite sizes are rejected; existing strokes are never altered.
    pub fn set_pen_size(&mut self, size: f32) {
        if !size.is_finite() || size <= 0.0 {
            log::debug!("pen size {size} rejected");
            return;
        }
        self.pen_size = size;
    }

    // ── pointer front-end ─────────────────────────────────────────────────

    /// Applies one classified pointer event from the host's input surface.
    ///
    /// Normalizes through `surface`, arbitrates drag vs. tap, and dispatches
    /// to the editing operations below. A malformed event (invalid surface,
    /// non-finite or out-of-surface position) is dropped and editing
    /// continues.
    pub fn apply_pointer(&mut self, ev: PointerEvent, surface: Surface) {
        if !surface.is_valid() {
            log::warn!(
                "pointer event dropped: invalid surface {}x{}",
                surface.width,
                surface.height
            );
            return;
        }

        let pos = match surface.to_normalized(ev.x, ev.y) {
            Some(p) if p.in_unit() => Some(p),
            // End carries no geometry we need; anything else without a
            // usable position is dropped before it can move the recognizer.
            // A Start past the surface edge must not strand the recognizer
            // in Dragging with no stroke to extend.
            _ if ev.phase == PointerPhase::End => None,
            _ => {
                log::debug!("pointer event dropped: position outside the surface");
                return;
            }
        };

        let Some(action) = self.recognizer.on_event(ev.phase, self.mode) else {
            return;
        };

        match (action, pos) {
            (GestureAction::BeginStroke, Some(p)) => self.begin_stroke(p),
            (GestureAction::ExtendStroke, Some(p)) => self.extend_stroke(p),
            (GestureAction::EndStroke, _) => self.end_stroke(),
            (GestureAction::PlaceMarker, Some(p)) => self.place_marker(p, self.color.clone()),
            // Unreachable: only EndStroke can be produced without a position.
            (_, None) => {}
        }
    }

    // ── stroke authoring ──────────────────────────────────────────────────

    /// Starts a new stroke at `start` with the current pen size.
    /// No-op when mode is not [`Mode::Draw`] or the point is out of range.
    pub fn begin_stroke(&mut self, start: Point) {
        if self.mode != Mode::Draw {
            return;
        }
        if !start.in_unit() {
            log::debug!("stroke start rejected: point out of range");
            return;
        }
        // A begin while a stroke is still open finalizes the old one; a
        // gesture stream can only do this after a dropped End event.
        self.stroke_open = false;

        let id = Uuid::new_v4().to_string();
        self.diagram
            .strokes
            .push(Stroke::begin(id, start, self.pen_size));
        self.history.push(EntityKind::Stroke);
        self.stroke_open = true;
    }

    /// Appends a move sample to the active stroke, if it clears the
    /// minimum-distance filter. Accepted points are never later removed.
    /// No-op when mode is not [`Mode::Draw`] or no stroke is active.
    pub fn extend_stroke(&mut self, pos: Point) {
        if self.mode != Mode::Draw || !self.stroke_open {
            return;
        }
        if !pos.in_unit() {
            log::debug!("stroke sample rejected: point out of range");
            return;
        }

        let sampler = self.sampler;
        let Some(stroke) = self.diagram.strokes.last_mut() else {
            return;
        };
        let Some(last) = stroke.last_point() else {
            return;
        };

        if sampler.accepts(last, pos) {
            stroke.points.push(pos);
        }
    }

    /// Finalizes the active stroke; later gestures never extend it.
    /// No-op when mode is not [`Mode::Draw`].
    pub fn end_stroke(&mut self) {
        if self.mode != Mode::Draw {
            return;
        }
        self.stroke_open = false;
    }

    // ── marker placement ──────────────────────────────────────────────────

    /// Places one marker at `pos`. Taps never consult the distance filter.
    /// No-op when mode is not [`Mode::Marker`] or the point is out of range.
    pub fn place_marker(&mut self, pos: Point, color: ColorTag) {
        if self.mode != Mode::Marker {
            return;
        }
        if !pos.in_unit() {
            log::debug!("marker rejected: point out of range");
            return;
        }
        self.diagram.markers.push(Marker::new(pos, color));
        self.history.push(EntityKind::Marker);
    }

    // ── undo & clear ──────────────────────────────────────────────────────

    /// Removes the most recently added entity: a whole stroke (one
    /// continuous drag is one user action) or one marker. No-op on an
    /// empty diagram.
    pub fn undo(&mut self) {
        match self.history.pop() {
            Some(EntityKind::Stroke) => {
                self.diagram.strokes.pop();
                // The open stroke is always the newest one, so popping a
                // stroke always closes any active drag.
                self.stroke_open = false;
            }
            Some(EntityKind::Marker) => {
                self.diagram.markers.pop();
            }
            None => {}
        }
    }

    /// Empties the diagram. Idempotent.
    pub fn clear(&mut self) {
        self.diagram.strokes.clear();
        self.diagram.markers.clear();
        self.history.clear();
        self.stroke_open = false;
        self.recognizer.reset();
    }
}
