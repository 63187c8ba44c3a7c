#![forbid(unsafe_code)]

//! Description vocabulary.
//!
//! Every ordinal has its own row of phrase fragments, one per vertex, and
//! rows 4–7 also carry a fragment for a skip. A finished spell's text is the
//! fragments of its steps joined in [`PRESENTATION_ORDER`].

use okta_core::geometry::{VERTEX_COUNT, VertexId};

use crate::codec::ACTION_LIMIT;

/// Ordinals in the order their descriptions are joined.
pub const PRESENTATION_ORDER: [usize; ACTION_LIMIT] = [7, 6, 5, 4, 3, 2, 0, 1];

/// Which fragment of a row a step uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionSlot {
    Vertex(VertexId),
    Skip,
}

/// One ordinal's fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionRow<'a> {
    pub vertices: [&'a str; VERTEX_COUNT],
    pub skip: Option<&'a str>,
}

impl<'a> DescriptionRow<'a> {
    /// Fragment for `slot`. Rows without a skip fragment yield `""`.
    #[must_use]
    pub fn fragment(&self, slot: DescriptionSlot) -> &'a str {
        match slot {
            DescriptionSlot::Vertex(id) => self.vertices[id.index()],
            DescriptionSlot::Skip => self.skip.unwrap_or(""),
        }
    }
}

/// Source of description fragments and step headings.
pub trait Vocabulary {
    /// Fragments for the step at `ordinal`.
    fn description_row(&self, ordinal: usize) -> DescriptionRow<'_>;

    /// Heading shown while the step at `step_count` is being drawn.
    fn step_title(&self, step_count: usize) -> Option<&str>;

    /// Order in which step descriptions are joined.
    fn presentation_order(&self) -> [usize; ACTION_LIMIT] {
        PRESENTATION_ORDER
    }

    /// Convenience: the fragment for one step.
    fn describe(&self, ordinal: usize, slot: DescriptionSlot) -> &str {
        self.description_row(ordinal).fragment(slot)
    }
}

const STEP_TITLES: [&str; ACTION_LIMIT] = [
    "NATURA",
    "MOC",
    "EFEKT",
    "FORMA",
    "ODLEGŁOŚĆ",
    "OBSZAR",
    "CZAS TRWANIA",
    "OPÓŹNIENIE",
];

const ROWS: [DescriptionRow<'static>; ACTION_LIMIT] = [
    DescriptionRow {
        vertices: [
            "elementem chaosu ",
            "elementem światła ",
            "elemetem ognia ",
            "elementem wody ",
            "elementem ziemii ",
            "elementem powietrza ",
            "elementem psychicznym ",
            "elementem śmierci ",
        ],
        skip: None,
    },
    DescriptionRow {
        vertices: [
            "za K100.", "za K2.", "za K4.", "za K6.", "za K8.", "za K10.", "za K12.", "za K20.",
        ],
        skip: None,
    },
    DescriptionRow {
        vertices: [
            "wylosuj ",
            "przemieść ",
            "zaatakuj ",
            "ulecz ",
            "obroń ",
            "okryj ",
            "pokaż ",
            "zniszcz ",
        ],
        skip: None,
    },
    DescriptionRow {
        vertices: [
            "z użyciem kreacji ",
            "z użyciem dotyku ",
            "z użyciem wybuchu ",
            "z użyciem plamy ",
            "z użyciem ściany ",
            "z użyciem pocisku ",
            "z użyciem iluzji ",
            "z użyciem przywołania ",
        ],
        skip: None,
    },
    DescriptionRow {
        vertices: [
            "i w zasięgu 9, ",
            " i w zasięgu 2, ",
            "i w zasięgu 3, ",
            "i w zasięgu 4, ",
            "i w zasięgu 5, ",
            "i w zasięgu 6, ",
            "i w zasięgu 7, ",
            "i w zasięgu 8, ",
        ],
        skip: Some("i w zasięgu 1, "),
    },
    DescriptionRow {
        vertices: [
            "w obszarze 9 pól ",
            "w obszarze 2 pól ",
            "w obszarze 3 pól ",
            "w obszarze 4 pól ",
            "w obszarze 5 pól ",
            "w obszarze 6 pól ",
            "w obszarze 7 pól ",
            "w obszarze 8 pól ",
        ],
        skip: Some("w obszarze 1 pola "),
    },
    DescriptionRow {
        vertices: [
            "przez następne 9, ",
            "przez następne 2, ",
            "przez następne 3, ",
            "przez następne 4, ",
            "przez następne 5, ",
            "przez następne 6, ",
            "przez następne 7, ",
            "przez następne 8, ",
        ],
        skip: Some("przez 1, "),
    },
    DescriptionRow {
        vertices: [
            "Za 9 tur, ",
            "Za 2 tury, ",
            "Za 3 tury, ",
            "Za 4 tury, ",
            "Za 5 tur, ",
            "Za 6 tur, ",
            "Za 7 tur, ",
            "Za 8 tur, ",
        ],
        skip: Some("W tej turze, "),
    },
];

/// The built-in (Polish) spell vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinVocabulary;

impl Vocabulary for BuiltinVocabulary {
    fn description_row(&self, ordinal: usize) -> DescriptionRow<'_> {
        ROWS[ordinal % ROWS.len()]
    }

    fn step_title(&self, step_count: usize) -> Option<&str> {
        STEP_TITLES.get(step_count).copied()
    }
}
