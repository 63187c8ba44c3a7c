#![forbid(unsafe_code)]

//! Collaborators that display a session.
//!
//! The controller never draws or writes text itself. It hands a [`Scene`] to
//! a [`Renderer`] after every state change, and reports progress, completion
//! and user-facing errors to a [`PresentationSink`].

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::codec::SpellSummary;
use crate::error::SpellError;
use crate::scene::Scene;

/// Live counters shown while a spell is being drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub step_count: usize,
    pub total_cost: u32,
    /// Heading for the next step; `None` once the spell is complete.
    pub title: Option<String>,
}

/// Text-side output of the controller.
///
/// All methods default to no-ops so a sink only implements what it shows.
pub trait PresentationSink {
    /// Step count, cost, or title changed.
    fn progress(&mut self, _progress: &Progress) {}

    /// The eighth step was recorded.
    fn completed(&mut self, _summary: &SpellSummary) {}

    /// A command was refused with a user-visible error.
    fn notice(&mut self, _error: &SpellError) {}

    /// The session was cleared; any completion text should go away.
    fn cleared(&mut self) {}
}

/// Draws a scene.
pub trait Renderer {
    fn render(&mut self, scene: &Scene);
}

/// Sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {}

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresentationEvent {
    Progress(Progress),
    Completed(SpellSummary),
    Notice { message: String },
    Cleared,
}

/// Sink that records every call.
///
/// Clones share the same buffer, so one handle can be given to the
/// controller and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<PresentationEvent>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<PresentationEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<PresentationEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Recorded progress updates.
    pub fn progress_updates(&self) -> Vec<Progress> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Progress(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Recorded completions.
    pub fn completions(&self) -> Vec<SpellSummary> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Completed(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: PresentationEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PresentationSink for RecordingSink {
    fn progress(&mut self, progress: &Progress) {
        self.push(PresentationEvent::Progress(progress.clone()));
    }

    fn completed(&mut self, summary: &SpellSummary) {
        self.push(PresentationEvent::Completed(summary.clone()));
    }

    fn notice(&mut self, error: &SpellError) {
        self.push(PresentationEvent::Notice {
            message: error.to_string(),
        });
    }

    fn cleared(&mut self) {
        self.push(PresentationEvent::Cleared);
    }
}

/// Renderer that keeps the most recent scene and counts frames.
#[derive(Debug, Clone, Default)]
pub struct SceneCapture {
    inner: Rc<RefCell<(usize, Scene)>>,
}

impl SceneCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scenes rendered.
    pub fn frames(&self) -> usize {
        self.inner.borrow().0
    }

    /// Most recent scene.
    pub fn last(&self) -> Scene {
        self.inner.borrow().1.clone()
    }
}

impl Renderer for SceneCapture {
    fn render(&mut self, scene: &Scene) {
        let mut inner = self.inner.borrow_mut();
        inner.0 += 1;
        inner.1 = scene.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkipRejection;

    #[test]
    fn recording_sink_shares_buffer() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();
        handle.cleared();
        handle.progress(&Progress::default());
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.progress_updates(), vec![Progress::default()]);
        assert_eq!(sink.drain().len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn notice_carries_message() {
        let mut sink = RecordingSink::new();
        let err = SpellError::SkipNotAllowed(SkipRejection::TooEarly {
            steps: 1,
            required: 4,
        });
        sink.notice(&err);
        assert_eq!(
            sink.events(),
            vec![PresentationEvent::Notice {
                message: err.to_string()
            }]
        );
    }

    #[test]
    fn events_serialize_tagged() {
        let json = serde_json::to_string(&PresentationEvent::Cleared).unwrap();
        assert_eq!(json, r#"{"event":"cleared"}"#);
        let json = serde_json::to_string(&PresentationEvent::Progress(Progress {
            step_count: 2,
            total_cost: 11,
            title: Some("EFEKT".into()),
        }))
        .unwrap();
        assert_eq!(
            json,
            r#"{"event":"progress","step_count":2,"total_cost":11,"title":"EFEKT"}"#
        );
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.progress(&Progress::default());
        sink.completed(&SpellSummary::default());
        sink.cleared();
    }

    #[test]
    fn scene_capture_counts_frames() {
        let capture = SceneCapture::new();
        let mut handle = capture.clone();
        handle.render(&Scene::default());
        handle.render(&Scene::default());
        assert_eq!(capture.frames(), 2);
        assert!(capture.last().is_empty());
    }
}
