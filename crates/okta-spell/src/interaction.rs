#![forbid(unsafe_code)]

//! Pointer gesture state machine.
//!
//! ```text
//!            down on legal start vertex
//!   ┌──────┐ ─────────────────────────▶ ┌──────────────────┐
//!   │ Idle │                            │ Dragging(anchor) │ ◀─┐ move
//!   └──────┘ ◀───────────────────────── └──────────────────┘ ──┘
//!                      up (always)
//! ```
//!
//! # Rules
//!
//! - A stroke may only start on the session's current vertex: vertex 0
//!   before the first step, afterwards the vertex the last step landed on.
//! - An up with no move in between is a tap. A tap released on the anchor
//!   records a marker there.
//! - An up after a move is a drag. The first vertex (in index order) within
//!   the end threshold that is not the anchor receives a line.
//! - Every miss is a silent no-op. Up always returns the machine to idle.
//!
//! The machine never mutates the session. It returns a [`StepIntent`] and the
//! caller records it.

use okta_core::geometry::{OctagonLayout, Point, VertexId};

use crate::codec::StepKind;
use crate::config::LogicConfig;
use crate::error::{GestureRejection, SpellError};
use crate::session::Session;

/// Transient state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Vertex the stroke started on.
    pub anchor: VertexId,
    /// Latest pointer position, once the pointer has moved.
    pub pointer: Option<Point>,
}

impl DragState {
    /// True once any move arrived; distinguishes a drag from a tap.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.pointer.is_some()
    }
}

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragState),
}

/// A step the machine wants recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIntent {
    pub kind: StepKind,
    pub source: Option<VertexId>,
    pub target: VertexId,
}

impl StepIntent {
    /// A line from `source` to `target`.
    #[must_use]
    pub const fn line(source: VertexId, target: VertexId) -> Self {
        Self {
            kind: StepKind::Line,
            source: Some(source),
            target,
        }
    }

    /// A marker on `at`.
    #[must_use]
    pub const fn marker(at: VertexId) -> Self {
        Self {
            kind: StepKind::Marker,
            source: None,
            target: at,
        }
    }

    /// A skip anchored at `at`.
    #[must_use]
    pub const fn skip(at: VertexId) -> Self {
        Self {
            kind: StepKind::Skip,
            source: None,
            target: at,
        }
    }
}

/// Result of feeding one pointer event to the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing happened.
    Ignored(GestureRejection),
    /// A drag began on this vertex.
    DragStarted(VertexId),
    /// The live preview moved.
    DragMoved(Point),
    /// The gesture completed a step.
    Committed(StepIntent),
}

impl GestureOutcome {
    /// The committed step, if any.
    #[must_use]
    pub fn intent(&self) -> Option<StepIntent> {
        match self {
            Self::Committed(intent) => Some(*intent),
            _ => None,
        }
    }

    /// The rejection as an error, for callers that report ignored gestures.
    #[must_use]
    pub fn error(&self) -> Option<SpellError> {
        match self {
            Self::Ignored(reason) => Some(SpellError::IllegalGesture(*reason)),
            _ => None,
        }
    }
}

/// Gesture state machine. See the module docs for the rules.
#[derive(Debug, Clone, Default)]
pub struct InteractionMachine {
    state: InteractionState,
}

impl InteractionMachine {
    /// Create an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The in-progress drag, if any.
    pub fn drag(&self) -> Option<&DragState> {
        match &self.state {
            InteractionState::Dragging(drag) => Some(drag),
            InteractionState::Idle => None,
        }
    }

    /// Abandon any gesture in progress.
    pub fn cancel(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Pointer pressed at `p`.
    ///
    /// A press while a drag is already in progress (a lost release) restarts
    /// gesture recognition from idle.
    pub fn pointer_down(
        &mut self,
        p: Point,
        session: &Session,
        layout: &OctagonLayout,
        logic: &LogicConfig,
    ) -> GestureOutcome {
        self.state = InteractionState::Idle;

        if session.is_completed() {
            return reject(GestureRejection::SessionCompleted);
        }

        let start = session.legal_start();
        let threshold = layout.radius() * logic.start_threshold_scale;
        if !layout.is_hit(start, p, threshold) {
            return reject(GestureRejection::NotOnStartVertex);
        }

        self.state = InteractionState::Dragging(DragState {
            anchor: start,
            pointer: None,
        });
        okta_core::trace!(anchor = start.index(), "drag started");
        GestureOutcome::DragStarted(start)
    }

    /// Pointer moved to `p`. Only meaningful while dragging.
    pub fn pointer_move(&mut self, p: Point) -> GestureOutcome {
        match &mut self.state {
            InteractionState::Dragging(drag) => {
                drag.pointer = Some(p);
                GestureOutcome::DragMoved(p)
            }
            InteractionState::Idle => GestureOutcome::Ignored(GestureRejection::NotDragging),
        }
    }

    /// Pointer released at `p`. Always leaves the machine idle.
    pub fn pointer_up(
        &mut self,
        p: Point,
        session: &Session,
        layout: &OctagonLayout,
        logic: &LogicConfig,
    ) -> GestureOutcome {
        let drag = match std::mem::take(&mut self.state) {
            InteractionState::Dragging(drag) => drag,
            InteractionState::Idle => return reject(GestureRejection::NotDragging),
        };

        if session.is_completed() || session.log().is_full() {
            return reject(GestureRejection::SessionCompleted);
        }

        if !drag.has_moved() {
            let threshold = layout.radius() * logic.tap_threshold_scale;
            if drag.anchor != session.legal_start() || !layout.is_hit(drag.anchor, p, threshold) {
                return reject(GestureRejection::TapMissed);
            }
            return GestureOutcome::Committed(StepIntent::marker(drag.anchor));
        }

        let threshold = layout.radius() * logic.end_threshold_scale;
        match layout.hits(p, threshold).find(|id| *id != drag.anchor) {
            Some(target) => GestureOutcome::Committed(StepIntent::line(drag.anchor, target)),
            None => reject(GestureRejection::NoDropTarget),
        }
    }
}

fn reject(reason: GestureRejection) -> GestureOutcome {
    okta_core::trace!(reason = %reason, "gesture ignored");
    GestureOutcome::Ignored(reason)
}
