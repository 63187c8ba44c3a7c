#![forbid(unsafe_code)]

//! Pointer events and host input normalization.
//!
//! The host (browser, window system, test script) delivers raw pointer input
//! in client coordinates. [`InputAdapter`] turns that into layout-local
//! [`PointerEvent`]s, the only input the interaction state machine consumes.
//!
//! # Design Notes
//!
//! - Mouse and touch are folded into one `Down`/`Move`/`Up` stream.
//! - Touch-end events carry no coordinates of their own; the adapter
//!   substitutes the last position seen for that touch (from `Down` or
//!   `Move`). A touch-end with no remembered position is dropped.
//! - Every type here is JSON-friendly so scripted input can be recorded and
//!   replayed deterministically.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// A pointer event in layout-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    #[serde(default)]
    pub source: PointerSource,
}

impl PointerEvent {
    /// Create a mouse event.
    #[must_use]
    pub const fn new(phase: PointerPhase, position: Point) -> Self {
        Self {
            phase,
            position,
            source: PointerSource::Mouse,
        }
    }

    /// Mouse-down at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, Point::new(x, y))
    }

    /// Mouse-move at `(x, y)`.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y))
    }

    /// Mouse-up at `(x, y)`.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, Point::new(x, y))
    }

    /// Mark this event as coming from a touch surface.
    #[must_use]
    pub const fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    /// True if the event came from a touch surface.
    #[inline]
    pub const fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch)
    }
}

/// Raw pointer input as delivered by the host, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPointerInput {
    pub phase: PointerPhase,
    #[serde(default)]
    pub source: PointerSource,
    /// Client coordinates. `None` for touch-end events.
    #[serde(default)]
    pub client: Option<Point>,
}

impl RawPointerInput {
    /// Raw mouse input.
    #[must_use]
    pub const fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse,
            client: Some(Point::new(x, y)),
        }
    }

    /// Raw touch input with a known position.
    #[must_use]
    pub const fn touch(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            source: PointerSource::Touch,
            client: Some(Point::new(x, y)),
        }
    }

    /// Raw touch-end, which carries no coordinates.
    #[must_use]
    pub const fn touch_end() -> Self {
        Self {
            phase: PointerPhase::Up,
            source: PointerSource::Touch,
            client: None,
        }
    }
}

/// Converts host pointer input into layout-local [`PointerEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    /// Client-space position of the drawing surface's top-left corner.
    origin: Point,
    /// Last layout-local touch position, used to resolve touch-end.
    last_touch: Option<Point>,
}

impl InputAdapter {
    /// Create an adapter for a surface whose top-left corner is at `origin`
    /// in client coordinates.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            last_touch: None,
        }
    }

    /// Update the surface origin (after a scroll or resize).
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Surface origin in client coordinates.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Last remembered touch position, if a touch is in progress.
    #[inline]
    pub fn last_touch(&self) -> Option<Point> {
        self.last_touch
    }

    /// Normalize one raw input.
    ///
    /// Returns `None` when the input cannot be placed (mouse input without
    /// coordinates, or a touch-end with no remembered touch position).
    pub fn normalize(&mut self, raw: RawPointerInput) -> Option<PointerEvent> {
        let local = raw
            .client
            .map(|p| Point::new(p.x - self.origin.x, p.y - self.origin.y));

        let position = match (raw.source, raw.phase) {
            (PointerSource::Touch, PointerPhase::Up) => {
                let resolved = self.last_touch.or(local);
                self.last_touch = None;
                resolved
            }
            (PointerSource::Touch, _) => {
                if local.is_some() {
                    self.last_touch = local;
                }
                local.or(self.last_touch)
            }
            (PointerSource::Mouse, _) => local,
        }?;

        crate::trace!(
            phase = ?raw.phase,
            source = ?raw.source,
            x = position.x,
            y = position.y,
            "pointer normalized"
        );

        Some(PointerEvent {
            phase: raw.phase,
            position,
            source: raw.source,
        })
    }
}
