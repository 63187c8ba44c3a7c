#![forbid(unsafe_code)]

//! Omnioktagram public facade crate.
//!
//! Re-exports the geometry, input and spell types an embedding application
//! needs, plus a top-level [`Error`] and a small prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use okta_core::event::{
    InputAdapter, PointerEvent, PointerPhase, PointerSource, RawPointerInput,
};
pub use okta_core::geometry::{OctagonLayout, Point, Size, VERTEX_COUNT, VertexId};

// --- Spell re-exports ------------------------------------------------------

pub use okta_spell::{
    ACTION_LIMIT, ActionLog, BuiltinVocabulary, CodeFormatError, Command, CommandOutcome, Digit,
    GestureOutcome, GestureRejection, Ink, LayoutConfig, LogicConfig, NullSink, OktagramConfig,
    PresentationEvent, PresentationSink, Primitive, Progress, RecordingSink, Renderer, Scene,
    SceneCapture, SceneConfig, Session, SessionController, SkipRejection, SpellCode, SpellError,
    SpellSummary, Step, StepColor, StepKind, Vocabulary,
};
pub use okta_spell::config::ConfigError;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for applications embedding the widget.
#[derive(Debug)]
pub enum Error {
    /// A command or code was refused.
    Spell(SpellError),
    /// Configuration failed validation.
    Config(ConfigError),
    /// I/O failure reading scripts or config.
    Io(std::io::Error),
    /// Malformed JSON input.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spell(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "invalid config: {err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid json: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spell(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<SpellError> for Error {
    fn from(err: SpellError) -> Self {
        Self::Spell(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Standard result type for okta APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Command, Error, GestureOutcome, OktagramConfig, Point, PointerEvent, PresentationSink,
        Renderer, Result, Scene, SessionController, Size, SpellCode, SpellSummary, VertexId,
    };

    pub use crate::{core, spell};
}

pub use okta_core as core;
pub use okta_spell as spell;
