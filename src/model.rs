use crate::tags::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// The result of interpreting one block of generated recipe text.
///
/// Immutable once produced. All fields are best-effort: the interpreter is a
/// heuristic extractor, not a validating parser, so consumers must treat
/// every field as advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    /// Extracted recipe name. Never empty; falls back to a literal title
    /// when no line qualifies.
    pub title: String,
    /// Remaining text after the title and tag lines are removed.
    pub body: String,
    /// Raw substring between the "Ingredients" and "Instructions" markers,
    /// or empty when the markers are missing or out of order.
    pub ingredients: String,
    /// `ingredients` with blank lines, bullets, headers, and the Equipment
    /// sub-section stripped.
    pub cleaned_ingredients: String,
    /// Tags from the explicit tag line, or inferred by keyword matching.
    /// Always a subset of the fixed vocabulary.
    pub tags: BTreeSet<Tag>,
}

/// The document persisted into a user's saved-recipes collection by the
/// storage collaborator. Storage itself is external to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub cleaned_ingredients: String,
    pub tags: BTreeSet<Tag>,
    /// User-assigned rating, 1 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl SavedRecipe {
    /// Build a persistable record from an interpreted recipe, generating a
    /// fresh id. Ratings outside 1..=5 are clamped.
    pub fn from_parsed(recipe: &ParsedRecipe, rating: Option<u8>) -> Self {
        SavedRecipe {
            id: Uuid::new_v4(),
            title: recipe.title.clone(),
            content: recipe.body.clone(),
            cleaned_ingredients: recipe.cleaned_ingredients.clone(),
            tags: recipe.tags.clone(),
            rating: rating.map(|r| r.clamp(1, 5)),
        }
    }
}

/// Weather fields interpolated into the suggestion prompt. Supplied by the
/// external weather client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_f: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parsed() -> ParsedRecipe {
        ParsedRecipe {
            title: "Chicken Tikka".to_string(),
            body: "A spicy dish.".to_string(),
            ingredients: "\nChicken\n".to_string(),
            cleaned_ingredients: "Chicken".to_string(),
            tags: BTreeSet::from([Tag::Dinner, Tag::Spicy]),
        }
    }

    #[test]
    fn test_saved_recipe_copies_parsed_fields() {
        let parsed = sample_parsed();
        let saved = SavedRecipe::from_parsed(&parsed, Some(4));

        assert_eq!(saved.title, "Chicken Tikka");
        assert_eq!(saved.content, "A spicy dish.");
        assert_eq!(saved.cleaned_ingredients, "Chicken");
        assert_eq!(saved.tags, parsed.tags);
        assert_eq!(saved.rating, Some(4));
    }

    #[test]
    fn test_rating_is_clamped() {
        let parsed = sample_parsed();
        assert_eq!(SavedRecipe::from_parsed(&parsed, Some(0)).rating, Some(1));
        assert_eq!(SavedRecipe::from_parsed(&parsed, Some(9)).rating, Some(5));
        assert_eq!(SavedRecipe::from_parsed(&parsed, None).rating, None);
    }

    #[test]
    fn test_saved_recipe_ids_are_unique() {
        let parsed = sample_parsed();
        let a = SavedRecipe::from_parsed(&parsed, None);
        let b = SavedRecipe::from_parsed(&parsed, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_parsed_recipe_json_shape() {
        let parsed = sample_parsed();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["title"], "Chicken Tikka");
        assert_eq!(json["tags"], serde_json::json!(["Dinner", "Spicy"]));

        let back: ParsedRecipe = serde_json::from_value(json).unwrap();
        assert_eq!(back, parsed);
    }
}
