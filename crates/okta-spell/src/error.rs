#![forbid(unsafe_code)]

//! Error taxonomy.
//!
//! | Failure | Detected in | Reported |
//! |---------|-------------|----------|
//! | [`SpellError::InvalidCodeFormat`] | code parsing | to the user, no state change |
//! | [`SpellError::IllegalGesture`] | interaction hit tests | never (silent no-op) |
//! | [`SpellError::SkipNotAllowed`] | skip command | to the user, no state change |
//! | [`SpellError::ActionLimitReached`] | log append guard | never |
//! | [`SpellError::Unsupported`] | undo command | to the caller |
//!
//! None of these propagate past the session controller except as return
//! values; there is no retry.

use std::fmt;

use crate::codec::ACTION_LIMIT;

/// Why a spell code string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFormatError {
    /// The code was not exactly eight characters long.
    WrongLength { found: usize },
    /// A character outside `'0'..='8'`.
    InvalidDigit { position: usize, found: char },
}

impl fmt::Display for CodeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { found } => write!(
                f,
                "spell code must be exactly {ACTION_LIMIT} digits (got {found})"
            ),
            Self::InvalidDigit { position, found } => write!(
                f,
                "spell code digit {found:?} at position {position} is outside 0-8"
            ),
        }
    }
}

impl std::error::Error for CodeFormatError {}

/// Why a pointer gesture produced no step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureRejection {
    /// The session already holds all eight steps.
    SessionCompleted,
    /// Pointer-down was not on the one vertex a stroke may start from.
    NotOnStartVertex,
    /// Move or up arrived without a drag in progress.
    NotDragging,
    /// A tap released away from the anchor vertex.
    TapMissed,
    /// A drag released away from every other vertex.
    NoDropTarget,
}

impl fmt::Display for GestureRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::SessionCompleted => "session already completed",
            Self::NotOnStartVertex => "pointer down is not on the current vertex",
            Self::NotDragging => "no drag in progress",
            Self::TapMissed => "tap released away from the current vertex",
            Self::NoDropTarget => "drag released away from any target vertex",
        };
        f.write_str(msg)
    }
}

/// Why a skip was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipRejection {
    /// Fewer than the required number of steps have been drawn.
    TooEarly { steps: usize, required: usize },
    /// The session is already complete.
    SessionCompleted,
}

impl fmt::Display for SkipRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooEarly { steps, required } => write!(
                f,
                "at least {required} actions are required before skipping ({steps} so far)"
            ),
            Self::SessionCompleted => write!(f, "the spell is already complete"),
        }
    }
}

/// Top-level error for spell operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// Decode input was not exactly eight digits in `0..=8`.
    InvalidCodeFormat(CodeFormatError),
    /// A gesture missed its target. Expected during normal use.
    IllegalGesture(GestureRejection),
    /// Skip requested before enough steps, or after completion.
    SkipNotAllowed(SkipRejection),
    /// Attempt to append a ninth step.
    ActionLimitReached,
    /// Command that exists on the surface but has no behavior yet.
    Unsupported(&'static str),
}

impl SpellError {
    /// True for failures the user should see a message for.
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        matches!(
            self,
            Self::InvalidCodeFormat(_) | Self::SkipNotAllowed(_) | Self::Unsupported(_)
        )
    }
}

impl fmt::Display for SpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodeFormat(e) => write!(f, "invalid spell code: {e}"),
            Self::IllegalGesture(r) => write!(f, "gesture ignored: {r}"),
            Self::SkipNotAllowed(r) => write!(f, "cannot skip: {r}"),
            Self::ActionLimitReached => {
                write!(f, "action limit of {ACTION_LIMIT} steps reached")
            }
            Self::Unsupported(what) => write!(f, "{what} is not supported"),
        }
    }
}

impl std::error::Error for SpellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidCodeFormat(e) = self {
            return Some(e);
        }
        None
    }
}

impl From<CodeFormatError> for SpellError {
    fn from(e: CodeFormatError) -> Self {
        Self::InvalidCodeFormat(e)
    }
}
