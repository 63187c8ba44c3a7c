//! Property-based invariant tests for the spell code codec.
//!
//! Verifies:
//! 1. Parsing accepts exactly 8 characters from `0..=8`
//! 2. Display of a parsed code reproduces the trimmed input
//! 3. Decode always yields exactly 8 steps with ordinals in order
//! 4. Decoded total cost equals the digit sum
//! 5. Decoding is deterministic
//! 6. A decoded session re-encodes to the code it came from
//! 7. Digit 0 always decodes to a skip; skips are never produced otherwise
//! 8. Lines leave from the landing vertex of the previous line (vertex 0 first)

use okta_spell::codec::{self, SpellCode};
use okta_spell::vocabulary::BuiltinVocabulary;
use okta_spell::{Session, StepKind};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_code_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..=8, 8)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

fn load(code: &SpellCode) -> Session {
    let mut session = Session::new();
    for step in codec::decode(code) {
        session.record_decoded(&step, &BuiltinVocabulary).unwrap();
    }
    session
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn valid_codes_parse_and_display(s in arb_code_string()) {
        let code: SpellCode = s.parse().unwrap();
        prop_assert_eq!(code.to_string(), s);
    }

    #[test]
    fn wrong_length_is_rejected(len in 0usize..16, d in 0u8..=8) {
        prop_assume!(len != 8);
        let s: String = std::iter::repeat_n(char::from(b'0' + d), len).collect();
        prop_assert!(s.parse::<SpellCode>().is_err());
    }

    #[test]
    fn digit_nine_or_letters_rejected(
        s in arb_code_string(),
        pos in 0usize..8,
        bad in prop_oneof![Just('9'), Just('a'), Just(' '), Just('-')],
    ) {
        let mut chars: Vec<char> = s.chars().collect();
        chars[pos] = bad;
        let s: String = chars.into_iter().collect();
        prop_assert!(s.parse::<SpellCode>().is_err());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–5. Decode shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_yields_eight_steps(s in arb_code_string()) {
        let code: SpellCode = s.parse().unwrap();
        let session = load(&code);
        prop_assert_eq!(session.step_count(), 8);
        prop_assert!(session.is_completed());
        for (i, step) in session.log().steps().iter().enumerate() {
            prop_assert_eq!(step.ordinal as usize, i);
        }
    }

    #[test]
    fn decoded_cost_is_digit_sum(s in arb_code_string()) {
        let code: SpellCode = s.parse().unwrap();
        let sum: u32 = s.bytes().map(|b| u32::from(b - b'0')).sum();
        prop_assert_eq!(code.total_cost(), sum);
        prop_assert_eq!(load(&code).total_cost(), sum);
    }

    #[test]
    fn decode_is_deterministic(s in arb_code_string()) {
        let code: SpellCode = s.parse().unwrap();
        prop_assert_eq!(codec::decode(&code), codec::decode(&code));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    /// Decoded sessions always re-encode to their own code.
    #[test]
    fn decoded_session_reencodes(s in arb_code_string()) {
        let code: SpellCode = s.parse().unwrap();
        let session = load(&code);
        let summary = codec::encode(session.log(), &okta_spell::vocabulary::PRESENTATION_ORDER);
        prop_assert_eq!(summary.code, s);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7–8. Step kinds and continuity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_means_skip(s in arb_code_string()) {
        let code: SpellCode = s.parse().unwrap();
        for (step, ch) in codec::decode(&code).iter().zip(s.chars()) {
            prop_assert_eq!(step.kind == StepKind::Skip, ch == '0');
        }
    }

    #[test]
    fn lines_chain_from_previous_landing(s in arb_code_string()) {
        let code: SpellCode = s.parse().unwrap();
        let mut current = okta_core::geometry::VertexId::FIRST;
        for step in codec::decode(&code) {
            match step.kind {
                StepKind::Line => {
                    prop_assert_eq!(step.source, Some(current));
                    current = step.target;
                }
                StepKind::Marker | StepKind::Skip => {
                    prop_assert_eq!(step.target, current);
                }
            }
        }
    }
}
