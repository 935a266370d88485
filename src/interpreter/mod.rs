//! The recipe text interpreter: one pure, ordered pipeline from a block of
//! generated text to a [`ParsedRecipe`].
//!
//! The input is LLM prose following an advisory template, not a grammar, so
//! each step is an independent string heuristic with a documented fallback.
//! Interpretation never fails and has no side effects; it may be called
//! concurrently from independent callers without coordination.

mod ingredients;
mod title;

use crate::config::InterpreterConfig;
use crate::model::ParsedRecipe;
use crate::tags::{self, Tag, TAG_LINE_MARKER};
use log::{debug, warn};

/// Default title used when the input contains no non-blank line at all.
pub const DEFAULT_FALLBACK_TITLE: &str = "Generated Recipe";

/// Interprets generated recipe text.
///
/// The stock interpreter ([`Interpreter::default`]) implements the fixed
/// contract; the builder adds empirically discovered keyword rules or a
/// different fallback title without loosening the tag vocabulary.
#[derive(Debug, Clone)]
pub struct Interpreter {
    fallback_title: String,
    extra_keywords: Vec<(String, Tag)>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter {
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
            extra_keywords: Vec::new(),
        }
    }
}

impl Interpreter {
    /// Creates a builder for a customized interpreter.
    ///
    /// # Example
    /// ```
    /// use mood_to_meal::{Interpreter, Tag};
    ///
    /// let interpreter = Interpreter::builder()
    ///     .keyword("smoky", Tag::Spicy)
    ///     .build();
    /// ```
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::default()
    }

    /// Build an interpreter from loaded configuration. Keyword rules whose
    /// target label is outside the vocabulary are dropped with a warning;
    /// configuration can extend inference but never widen the tag set.
    pub fn from_config(config: &InterpreterConfig) -> Self {
        let mut builder = Interpreter::builder().fallback_title(&config.fallback_title);
        for (keyword, label) in &config.keywords {
            match Tag::from_label(label) {
                Some(tag) => builder = builder.keyword(keyword, tag),
                None => warn!("ignoring keyword rule {keyword:?}: unknown tag label {label:?}"),
            }
        }
        builder.build()
    }

    /// Transform one block of recipe text into a [`ParsedRecipe`].
    ///
    /// This is a one-shot operation, not a fixed point: interpreting a
    /// produced `body` a second time only strips another title line if the
    /// title heuristics independently fire again.
    ///
    /// Steps, in order:
    /// 1. extract or infer tags, removing an explicit `TAGS:` line;
    /// 2. extract the title from the first three lines, with fallbacks;
    /// 3. join the remaining lines into the body;
    /// 4. slice the raw ingredient block between the section markers;
    /// 5. clean the block into a displayable ingredient list.
    pub fn interpret(&self, text: &str) -> ParsedRecipe {
        let mut lines: Vec<&str> = text.lines().collect();

        let tag_line = lines
            .iter()
            .position(|line| line.trim().starts_with(TAG_LINE_MARKER));
        let tags = match tag_line {
            // An explicit tag line wins even when every label on it is
            // invalid; inference only runs when the line is absent.
            Some(i) => tags::parse_tag_line(lines.remove(i)),
            None => tags::infer_tags(&lines.join("\n"), &self.extra_keywords),
        };

        let title = match title::extract_title(&mut lines) {
            Some(title) => title,
            None => self.fallback_title.clone(),
        };

        let body = lines.join("\n").trim().to_string();
        let ingredients = ingredients::extract_block(&body);
        let cleaned_ingredients = ingredients::clean_block(&ingredients);

        debug!(
            "interpreted recipe: title={title:?}, {} tag(s), {} ingredient byte(s)",
            tags.len(),
            ingredients.len()
        );

        ParsedRecipe {
            title,
            body,
            ingredients,
            cleaned_ingredients,
            tags,
        }
    }
}

/// Fluent configuration for an [`Interpreter`].
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    fallback_title: Option<String>,
    extra_keywords: Vec<(String, Tag)>,
}

impl InterpreterBuilder {
    /// Override the title used when the input is entirely blank.
    pub fn fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = Some(title.into());
        self
    }

    /// Add an inference rule: include `tag` whenever `keyword` occurs in the
    /// lowercased text. The keyword is lowercased here so callers need not
    /// care.
    pub fn keyword(mut self, keyword: impl Into<String>, tag: Tag) -> Self {
        self.extra_keywords.push((keyword.into().to_lowercase(), tag));
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            fallback_title: self
                .fallback_title
                .unwrap_or_else(|| DEFAULT_FALLBACK_TITLE.to_string()),
            extra_keywords: self.extra_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_full_pipeline() {
        let text = "Chicken Tikka Recipe\nA spicy dish.\nIngredients\n* Chicken\n* Spices\nInstructions\n1. Cook it.\nTAGS: Dinner, Spicy, Asian";
        let parsed = Interpreter::default().interpret(text);

        assert_eq!(parsed.title, "Chicken Tikka");
        assert_eq!(
            parsed.tags,
            BTreeSet::from([Tag::Dinner, Tag::Spicy, Tag::Asian])
        );
        assert_eq!(parsed.cleaned_ingredients, "Chicken\nSpices");
        assert!(parsed.body.starts_with("A spicy dish."));
        assert!(!parsed.body.contains("TAGS:"));
    }

    #[test]
    fn test_tag_line_removed_before_title_scan() {
        // With the tag line gone, the heading two lines down moves into the
        // three-line title window.
        let text = "TAGS: Lunch\nSome preamble text\n## Squash Salad\nmore";
        let parsed = Interpreter::default().interpret(text);
        assert_eq!(parsed.title, "Squash Salad");
        assert_eq!(parsed.tags, BTreeSet::from([Tag::Lunch]));
    }

    #[test]
    fn test_explicit_tag_line_suppresses_inference() {
        let text = "Vegan Curry Recipe\nA quick vegan dinner.\nTAGS: Sushi";
        let parsed = Interpreter::default().interpret(text);
        // Every explicit label was invalid, but inference must not run.
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_inference_runs_without_tag_line() {
        let text = "Vegan Curry Recipe\nA quick vegan dinner.";
        let parsed = Interpreter::default().interpret(text);
        assert!(parsed.tags.contains(&Tag::Vegan));
        assert!(parsed.tags.contains(&Tag::Quick));
        assert!(parsed.tags.contains(&Tag::Dinner));
    }

    #[test]
    fn test_tag_marker_is_case_sensitive() {
        let parsed = Interpreter::default().interpret("A dish\ntags: Vegan");
        // "tags:" is not the marker; the line stays in the body and
        // inference sees "vegan" in it.
        assert!(parsed.body.contains("tags: Vegan"));
        assert!(parsed.tags.contains(&Tag::Vegan));
    }

    #[test]
    fn test_empty_input_falls_back() {
        let parsed = Interpreter::default().interpret("");
        assert_eq!(parsed.title, DEFAULT_FALLBACK_TITLE);
        assert_eq!(parsed.body, "");
        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.ingredients, "");
        assert_eq!(parsed.cleaned_ingredients, "");
    }

    #[test]
    fn test_builder_overrides() {
        let interpreter = Interpreter::builder()
            .fallback_title("Untitled Meal")
            .keyword("SMOKY", Tag::Spicy)
            .build();

        assert_eq!(interpreter.interpret("   \n  ").title, "Untitled Meal");
        let parsed = interpreter.interpret("Smoky beans on toast");
        assert!(parsed.tags.contains(&Tag::Spicy));
    }

    #[test]
    fn test_from_config_drops_unknown_labels() {
        let mut config = InterpreterConfig::default();
        config
            .keywords
            .insert("smoky".to_string(), "Spicy".to_string());
        config
            .keywords
            .insert("noodle".to_string(), "Sushi".to_string());

        let interpreter = Interpreter::from_config(&config);
        let parsed = interpreter.interpret("A smoky noodle dish");
        assert!(parsed.tags.contains(&Tag::Spicy));
        // The "Sushi" rule was dropped, so nothing outside the vocabulary
        // can appear.
        for tag in &parsed.tags {
            assert!(Tag::from_label(tag.as_str()).is_some());
        }
    }

    #[test]
    fn test_interpret_is_one_shot() {
        let text = "Chicken Tikka Recipe\nA mild dish.\nServe warm.";
        let first = Interpreter::default().interpret(text);
        assert_eq!(first.title, "Chicken Tikka");

        // Re-interpreting the body picks a new title only because the
        // fallback heuristic fires on the first non-blank line.
        let second = Interpreter::default().interpret(&first.body);
        assert_eq!(second.title, "A mild dish.");
        assert_eq!(second.body, "Serve warm.");
    }
}
