#![forbid(unsafe_code)]

//! Spell code codec.
//!
//! A finished spell is eight steps, and each step maps to one digit `0..=8`:
//!
//! | Step | Digit | Cost |
//! |------|-------|------|
//! | Skip | `0` | 0 |
//! | Line or Marker landing on vertex 0 | `8` | 8 |
//! | Line or Marker landing on vertex `v` (1–7) | `v` | `v` |
//!
//! Digit `9` never occurs. The code does not record the gesture kind, so
//! [`decode`] reconstructs it:
//!
//! - `8` at position 0 is a marker tapped on vertex 0 (the "loop").
//! - `0` is a skip anchored at the current vertex.
//! - A digit equal to the one before it is a marker on the current vertex.
//! - Anything else is a line from the current vertex to the digit's vertex.
//!
//! The repeat rule is a quirk of the format: a line that leaves a vertex and
//! a marker on it can both follow the same digit, and the decoder always
//! picks the marker. Round-trips through the digit string are still exact,
//! because each decoded step re-encodes to the digit it came from.

use std::fmt;
use std::str::FromStr;

use okta_core::geometry::VertexId;
use serde::{Deserialize, Serialize};

use crate::action_log::ActionLog;
use crate::error::CodeFormatError;
use crate::vocabulary::DescriptionSlot;

/// Number of steps in a complete spell, and digits in a spell code.
pub const ACTION_LIMIT: usize = 8;

/// Digit used for skips.
const SKIP_DIGIT: u8 = 0;

/// Digit used for steps landing on vertex 0.
const FIRST_VERTEX_DIGIT: u8 = 8;

/// Description slot used for the decoded loop marker at position 0.
const LOOP_DESCRIPTION_VERTEX: VertexId = VertexId::wrapping(7);

// ---------------------------------------------------------------------------
// StepKind / Digit
// ---------------------------------------------------------------------------

/// Kind of a recorded step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// A stroke dragged from one vertex to another.
    Line,
    /// A tap on the current vertex.
    Marker,
    /// An explicit skip, anchored at the current vertex.
    Skip,
}

impl StepKind {
    /// Short lowercase name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Marker => "marker",
            Self::Skip => "skip",
        }
    }
}

/// One spell code symbol, `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The skip digit.
    pub const SKIP: Digit = Digit(SKIP_DIGIT);

    /// The digit for steps landing on vertex 0.
    pub const FIRST_VERTEX: Digit = Digit(FIRST_VERTEX_DIGIT);

    /// Create a digit, returning `None` outside `0..=8`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= FIRST_VERTEX_DIGIT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse one ASCII character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Numeric value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Mana cost of a step encoded with this digit.
    #[inline]
    #[must_use]
    pub const fn cost(self) -> u32 {
        self.0 as u32
    }

    /// ASCII character for this digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Destination vertex, or `None` for the skip digit.
    #[must_use]
    pub const fn vertex(self) -> Option<VertexId> {
        match self.0 {
            SKIP_DIGIT => None,
            FIRST_VERTEX_DIGIT => Some(VertexId::FIRST),
            v => VertexId::new(v),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| format!("spell digit {value} out of range 0..=8"))
    }
}

/// Encode one step.
///
/// `target` is the vertex the step lands on (the anchor, for skips).
#[must_use]
pub fn encode_step(kind: StepKind, target: VertexId) -> Digit {
    match kind {
        StepKind::Skip => Digit::SKIP,
        StepKind::Line | StepKind::Marker if target == VertexId::FIRST => Digit::FIRST_VERTEX,
        StepKind::Line | StepKind::Marker => Digit(target.index() as u8),
    }
}

/// Description slot for a step drawn live.
#[must_use]
pub fn live_description_slot(kind: StepKind, target: VertexId) -> DescriptionSlot {
    match kind {
        StepKind::Skip => DescriptionSlot::Skip,
        StepKind::Line | StepKind::Marker => DescriptionSlot::Vertex(target),
    }
}

// ---------------------------------------------------------------------------
// SpellCode
// ---------------------------------------------------------------------------

/// A validated eight-digit spell code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpellCode([Digit; ACTION_LIMIT]);

impl SpellCode {
    /// The digits in order.
    #[inline]
    pub fn digits(&self) -> &[Digit; ACTION_LIMIT] {
        &self.0
    }

    /// Sum of every digit's cost.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.0.iter().map(|d| d.cost()).sum()
    }
}

impl FromStr for SpellCode {
    type Err = CodeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != ACTION_LIMIT {
            return Err(CodeFormatError::WrongLength { found });
        }
        let mut digits = [Digit::SKIP; ACTION_LIMIT];
        for (position, (c, slot)) in s.chars().zip(digits.iter_mut()).enumerate() {
            *slot = Digit::from_char(c).ok_or(CodeFormatError::InvalidDigit { position, found: c })?;
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for SpellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d.as_char())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// One step reconstructed from a spell code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedStep {
    pub kind: StepKind,
    /// Start vertex, for lines only.
    pub source: Option<VertexId>,
    /// Landing vertex (anchor for skips and markers).
    pub target: VertexId,
    pub digit: Digit,
    pub slot: DescriptionSlot,
}

/// Reconstruct the step sequence for a code, starting at vertex 0.
#[must_use]
pub fn decode(code: &SpellCode) -> Vec<DecodedStep> {
    let mut current = VertexId::FIRST;
    let mut previous: Option<Digit> = None;
    let mut steps = Vec::with_capacity(ACTION_LIMIT);

    for (ordinal, &digit) in code.digits().iter().enumerate() {
        let step = match digit.vertex() {
            _ if ordinal == 0 && digit == Digit::FIRST_VERTEX => DecodedStep {
                kind: StepKind::Marker,
                source: None,
                target: current,
                digit,
                slot: DescriptionSlot::Vertex(LOOP_DESCRIPTION_VERTEX),
            },
            None => DecodedStep {
                kind: StepKind::Skip,
                source: None,
                target: current,
                digit,
                slot: DescriptionSlot::Skip,
            },
            Some(mapped) if previous == Some(digit) => DecodedStep {
                kind: StepKind::Marker,
                source: None,
                target: current,
                digit,
                slot: DescriptionSlot::Vertex(mapped),
            },
            Some(mapped) => {
                let step = DecodedStep {
                    kind: StepKind::Line,
                    source: Some(current),
                    target: mapped,
                    digit,
                    slot: DescriptionSlot::Vertex(mapped),
                };
                current = mapped;
                step
            }
        };
        previous = Some(digit);
        steps.push(step);
    }

    steps
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Text rendering of a log: the three things shown when a spell completes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpellSummary {
    /// Concatenated step digits in ordinal order.
    pub code: String,
    /// Concatenated step descriptions in presentation order.
    pub description: String,
    /// Running mana cost.
    pub total_cost: u32,
}

/// Render a log as digits, description, and cost.
///
/// Descriptions are joined in `order` (a permutation over ordinals), not
/// chronologically; ordinals with no step yet contribute nothing.
#[must_use]
pub fn encode(log: &ActionLog, order: &[usize]) -> SpellSummary {
    let code = log.steps().iter().map(|s| s.digit.as_char()).collect();
    let description = order
        .iter()
        .filter_map(|&ordinal| log.get(ordinal))
        .map(|s| s.description.as_str())
        .collect();
    SpellSummary {
        code,
        description,
        total_cost: log.total_cost(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::StepIntent;
    use crate::session::Session;
    use crate::vocabulary::{BuiltinVocabulary, PRESENTATION_ORDER};

    fn v(i: u8) -> VertexId {
        VertexId::new(i).unwrap()
    }

    fn code(s: &str) -> SpellCode {
        s.parse().unwrap()
    }

    #[test]
    fn encode_step_rules() {
        assert_eq!(encode_step(StepKind::Skip, v(3)), Digit::SKIP);
        assert_eq!(encode_step(StepKind::Marker, v(0)).value(), 8);
        assert_eq!(encode_step(StepKind::Line, v(0)).value(), 8);
        assert_eq!(encode_step(StepKind::Line, v(5)).value(), 5);
        assert_eq!(encode_step(StepKind::Marker, v(7)).value(), 7);
    }

    #[test]
    fn digit_vertex_mapping() {
        assert_eq!(Digit::SKIP.vertex(), None);
        assert_eq!(Digit::FIRST_VERTEX.vertex(), Some(v(0)));
        assert_eq!(Digit::new(3).unwrap().vertex(), Some(v(3)));
        assert!(Digit::new(9).is_none());
        assert_eq!(Digit::from_char('8'), Some(Digit::FIRST_VERTEX));
        assert_eq!(Digit::from_char('9'), None);
        assert_eq!(Digit::from_char('x'), None);
    }

    #[test]
    fn parse_rejects_bad_codes() {
        assert_eq!(
            "1234567".parse::<SpellCode>(),
            Err(CodeFormatError::WrongLength { found: 7 })
        );
        assert_eq!(
            "123456789".parse::<SpellCode>(),
            Err(CodeFormatError::WrongLength { found: 9 })
        );
        assert_eq!(
            "12345679".parse::<SpellCode>(),
            Err(CodeFormatError::InvalidDigit {
                position: 7,
                found: '9'
            })
        );
        assert_eq!(
            "1234a678".parse::<SpellCode>(),
            Err(CodeFormatError::InvalidDigit {
                position: 4,
                found: 'a'
            })
        );
        assert!("１２３４５６７８".parse::<SpellCode>().is_err());
    }

    #[test]
    fn decode_ascending_code() {
        let steps = decode(&code("81234567"));
        assert_eq!(steps[0].kind, StepKind::Marker);
        assert_eq!(steps[0].target, v(0));
        assert_eq!(steps[0].slot, DescriptionSlot::Vertex(v(7)));
        for (i, step) in steps.iter().enumerate().skip(1) {
            assert_eq!(step.kind, StepKind::Line);
            assert_eq!(step.source, Some(v(i as u8 - 1)));
            assert_eq!(step.target, v(i as u8));
        }
        assert_eq!(code("81234567").total_cost(), 36);
    }

    #[test]
    fn decode_repeat_is_marker() {
        let steps = decode(&code("88000000"));
        assert_eq!(steps[0].kind, StepKind::Marker);
        assert_eq!(steps[1].kind, StepKind::Marker);
        assert_eq!(steps[1].target, v(0));
        assert_eq!(steps[1].slot, DescriptionSlot::Vertex(v(0)));
        assert!(steps[2..].iter().all(|s| s.kind == StepKind::Skip && s.target == v(0)));
        assert_eq!(code("88000000").total_cost(), 16);
    }

    #[test]
    fn decode_skip_keeps_current_vertex() {
        let steps = decode(&code("30555077"));
        assert_eq!(steps[0].kind, StepKind::Line);
        assert_eq!(steps[1].kind, StepKind::Skip);
        assert_eq!(steps[1].target, v(3));
        assert_eq!(steps[2].kind, StepKind::Line);
        assert_eq!(steps[2].source, Some(v(3)));
        assert_eq!(steps[3].kind, StepKind::Marker);
        assert_eq!(steps[4].kind, StepKind::Marker);
        assert_eq!(steps[5].kind, StepKind::Skip);
        assert_eq!(steps[5].target, v(5));
        assert_eq!(steps[6].kind, StepKind::Line);
        assert_eq!(steps[7].kind, StepKind::Marker);
        assert_eq!(steps[7].target, v(7));
    }

    #[test]
    fn decode_eight_after_start_is_line_home() {
        let steps = decode(&code("28000000"));
        assert_eq!(steps[1].kind, StepKind::Line);
        assert_eq!(steps[1].source, Some(v(2)));
        assert_eq!(steps[1].target, v(0));
        assert_eq!(steps[1].slot, DescriptionSlot::Vertex(v(0)));
    }

    #[test]
    fn decoded_steps_reencode_to_same_digits() {
        for s in ["81234567", "88000000", "30555077", "12121212", "00000000", "77777777"] {
            let c = code(s);
            let again: String = decode(&c)
                .iter()
                .map(|d| encode_step(d.kind, d.target).as_char())
                .collect();
            assert_eq!(again, s);
        }
    }

    #[test]
    fn code_display_round_trip() {
        assert_eq!(code("01234567").to_string(), "01234567");
    }

    #[test]
    fn encode_partial_log_joins_only_recorded_ordinals() {
        let vocab = BuiltinVocabulary;
        let mut session = Session::new();
        session.record(StepIntent::line(v(0), v(1)), &vocab).unwrap();
        session.record(StepIntent::line(v(1), v(2)), &vocab).unwrap();
        session.record(StepIntent::marker(v(2)), &vocab).unwrap();

        // Ordinals 7..=3 are empty; 2, 0, 1 follow in that order.
        let summary = encode(session.log(), &PRESENTATION_ORDER);
        assert_eq!(summary.code, "122");
        assert_eq!(summary.description, "zaatakuj elementem światła za K4.");
        assert_eq!(summary.total_cost, 5);
    }
}
