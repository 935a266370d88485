use crate::error::InterpreterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Marker prefix for an explicit tag line. The marker itself is matched
/// case-sensitively on the trimmed line.
pub const TAG_LINE_MARKER: &str = "TAGS:";

/// The closed recipe tag vocabulary.
///
/// Tags cover meal type, diet, and cuisine. The set is fixed: every tag a
/// recipe ever carries is a member of this enum, whether it came from an
/// explicit tag line or from keyword inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Low-Carb")]
    LowCarb,
    #[serde(rename = "High-Protein")]
    HighProtein,
    #[serde(rename = "Comfort Food")]
    ComfortFood,
    Spicy,
    Sweet,
    Keto,
    Paleo,
    Healthy,
    Quick,
    Italian,
    Asian,
    Mexican,
    American,
}

impl Tag {
    /// Every member of the vocabulary, in display order.
    pub const ALL: [Tag; 20] = [
        Tag::Breakfast,
        Tag::Lunch,
        Tag::Dinner,
        Tag::Snack,
        Tag::Vegetarian,
        Tag::Vegan,
        Tag::GlutenFree,
        Tag::LowCarb,
        Tag::HighProtein,
        Tag::ComfortFood,
        Tag::Spicy,
        Tag::Sweet,
        Tag::Keto,
        Tag::Paleo,
        Tag::Healthy,
        Tag::Quick,
        Tag::Italian,
        Tag::Asian,
        Tag::Mexican,
        Tag::American,
    ];

    /// Display label, as it appears in tag lines and persisted documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Breakfast => "Breakfast",
            Tag::Lunch => "Lunch",
            Tag::Dinner => "Dinner",
            Tag::Snack => "Snack",
            Tag::Vegetarian => "Vegetarian",
            Tag::Vegan => "Vegan",
            Tag::GlutenFree => "Gluten-Free",
            Tag::LowCarb => "Low-Carb",
            Tag::HighProtein => "High-Protein",
            Tag::ComfortFood => "Comfort Food",
            Tag::Spicy => "Spicy",
            Tag::Sweet => "Sweet",
            Tag::Keto => "Keto",
            Tag::Paleo => "Paleo",
            Tag::Healthy => "Healthy",
            Tag::Quick => "Quick",
            Tag::Italian => "Italian",
            Tag::Asian => "Asian",
            Tag::Mexican => "Mexican",
            Tag::American => "American",
        }
    }

    /// Case-exact lookup by display label.
    pub fn from_label(label: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|t| t.as_str() == label)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = InterpreterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::from_label(s).ok_or_else(|| InterpreterError::UnknownTag(s.to_string()))
    }
}

/// Built-in keyword inference rules: lowercase keyword to tag, applied as
/// substring matches against the lowercased recipe text. Many keywords may
/// map to the same tag ("low carb" and "low-carb"); no keyword maps to more
/// than one. The alternate spellings were collected by observing real model
/// output, which is not guaranteed stable.
pub const KEYWORD_RULES: &[(&str, Tag)] = &[
    ("breakfast", Tag::Breakfast),
    ("lunch", Tag::Lunch),
    ("dinner", Tag::Dinner),
    ("snack", Tag::Snack),
    ("vegetarian", Tag::Vegetarian),
    ("vegan", Tag::Vegan),
    ("gluten-free", Tag::GlutenFree),
    ("gluten free", Tag::GlutenFree),
    ("low-carb", Tag::LowCarb),
    ("low carb", Tag::LowCarb),
    ("protein", Tag::HighProtein),
    ("comfort", Tag::ComfortFood),
    ("spicy", Tag::Spicy),
    ("sweet", Tag::Sweet),
    ("keto", Tag::Keto),
    ("paleo", Tag::Paleo),
    ("healthy", Tag::Healthy),
    ("quick", Tag::Quick),
    ("italian", Tag::Italian),
    ("asian", Tag::Asian),
    ("mexican", Tag::Mexican),
    ("american", Tag::American),
];

/// Parse an explicit tag line (one already known to start with
/// [`TAG_LINE_MARKER`] once trimmed). Pieces split on commas; each piece is
/// trimmed and kept only on a case-exact vocabulary match. Unknown labels
/// are silently dropped.
pub(crate) fn parse_tag_line(line: &str) -> BTreeSet<Tag> {
    let rest = line
        .trim()
        .strip_prefix(TAG_LINE_MARKER)
        .unwrap_or_default();

    rest.split(',')
        .filter_map(|piece| Tag::from_label(piece.trim()))
        .collect()
}

/// Infer tags by keyword matching when no explicit tag line is present.
/// `extra_rules` (lowercase keyword, tag) pairs run after the built-in
/// table; since they carry `Tag` values they cannot escape the vocabulary.
pub(crate) fn infer_tags(text: &str, extra_rules: &[(String, Tag)]) -> BTreeSet<Tag> {
    let haystack = text.to_lowercase();
    let mut tags = BTreeSet::new();

    for (keyword, tag) in KEYWORD_RULES {
        if haystack.contains(keyword) {
            tags.insert(*tag);
        }
    }
    for (keyword, tag) in extra_rules {
        if haystack.contains(keyword.as_str()) {
            tags.insert(*tag);
        }
    }
    tags
}
