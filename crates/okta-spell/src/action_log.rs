#![forbid(unsafe_code)]

//! Ordered log of recorded steps.
//!
//! # Invariants
//!
//! 1. Steps are stored in ordinal order and `steps[i].ordinal == i`.
//! 2. The log never holds more than [`ACTION_LIMIT`] steps.
//! 3. `total_cost` equals the sum of every step's cost at all times; it is
//!    updated on append and never recomputed.

use okta_core::geometry::VertexId;
use serde::{Deserialize, Serialize};

use crate::codec::{ACTION_LIMIT, Digit, StepKind};
use crate::error::SpellError;

/// Display color of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "ordinal")]
pub enum StepColor {
    /// Per-ordinal palette entry, used while drawing.
    Ordinal(u8),
    /// Single color every step takes once the spell is complete.
    Finalized,
}

/// One completed user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position in the sequence, `0..8`.
    pub ordinal: u8,
    pub kind: StepKind,
    /// Landing vertex for lines and markers; anchor vertex for skips.
    pub target: VertexId,
    /// Start vertex, for lines only.
    pub source: Option<VertexId>,
    pub digit: Digit,
    pub cost: u32,
    pub description: String,
    pub color: StepColor,
}

impl Step {
    /// True for markers and skips, which draw as rings around a vertex.
    #[inline]
    #[must_use]
    pub fn is_ring(&self) -> bool {
        matches!(self.kind, StepKind::Marker | StepKind::Skip)
    }
}

/// Ordered step log with a running cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    steps: Vec<Step>,
    total_cost: u32,
}

impl ActionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::with_capacity(ACTION_LIMIT),
            total_cost: 0,
        }
    }

    /// Number of recorded steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no step has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True once the action limit is reached.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.steps.len() >= ACTION_LIMIT
    }

    /// Sum of all step costs.
    #[inline]
    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    /// Recorded steps in ordinal order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step at `ordinal`, if recorded.
    #[inline]
    pub fn get(&self, ordinal: usize) -> Option<&Step> {
        self.steps.get(ordinal)
    }

    /// Most recent step.
    #[inline]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Digits of all recorded steps, in ordinal order.
    pub fn digit_string(&self) -> String {
        self.steps.iter().map(|s| s.digit.as_char()).collect()
    }

    /// Append a step, updating the running cost.
    ///
    /// The step's ordinal must equal the current length.
    pub fn push(&mut self, step: Step) -> Result<&Step, SpellError> {
        if self.is_full() {
            return Err(SpellError::ActionLimitReached);
        }
        debug_assert_eq!(
            step.ordinal as usize,
            self.steps.len(),
            "step ordinal must match log position"
        );
        self.total_cost += step.cost;
        self.steps.push(step);
        Ok(&self.steps[self.steps.len() - 1])
    }

    /// Recolor every step with the finalized color.
    pub fn finalize_colors(&mut self) {
        for step in &mut self.steps {
            step.color = StepColor::Finalized;
        }
    }

    /// Drop every step.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.total_cost = 0;
    }
}
