#![forbid(unsafe_code)]

//! Spell drawing core for the Omnioktagram widget.
//!
//! A session is eight steps drawn on a fixed octagon. Each step is a line
//! between vertices, a marker tapped on the current vertex, or a skip. The
//! finished drawing encodes to an 8-digit spell code, and any valid code
//! decodes back into a finished drawing.
//!
//! - [`interaction`]: pointer gesture state machine (tap vs. drag, legality).
//! - [`action_log`]: the recorded steps with their running cost.
//! - [`codec`]: step ↔ digit mapping, code parsing, decode and encode.
//! - [`session`]: the controller composing all of the above.
//! - [`scene`]: display list for a renderer.
//! - [`presentation`]: collaborator traits for renderers and text sinks.

pub mod action_log;
pub mod codec;
pub mod config;
pub mod error;
pub mod interaction;
pub mod presentation;
pub mod scene;
pub mod session;
pub mod vocabulary;

pub use action_log::{ActionLog, Step, StepColor};
pub use codec::{ACTION_LIMIT, Digit, SpellCode, SpellSummary, StepKind};
pub use config::{LayoutConfig, LogicConfig, OktagramConfig, SceneConfig};
pub use error::{CodeFormatError, GestureRejection, SkipRejection, SpellError};
pub use interaction::{DragState, GestureOutcome, InteractionMachine, InteractionState, StepIntent};
pub use presentation::{
    NullSink, PresentationEvent, PresentationSink, Progress, RecordingSink, Renderer, SceneCapture,
};
pub use scene::{Ink, Primitive, Scene, Stroke, build_scene};
pub use session::{Command, CommandOutcome, Recorded, Session, SessionController};
pub use vocabulary::{BuiltinVocabulary, DescriptionRow, DescriptionSlot, Vocabulary};
