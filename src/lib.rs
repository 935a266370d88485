//! Recipe text interpretation core for the Mood to Meal assistant.
//!
//! The generative-text service replies with free-form recipe prose. This
//! crate turns one such block into a structured [`ParsedRecipe`] (title,
//! body, ingredient list, tag set) through a small set of pure, ordered
//! string heuristics, and owns the adjacent pure pieces of that text
//! contract: the prompts that request the format, the saved-recipe record
//! shape, and the shopping-list projection. Network calls, persistence,
//! and rendering all live with external collaborators.

pub mod config;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod prompt;
pub mod shopping;
pub mod tags;

pub use crate::config::InterpreterConfig;
pub use crate::error::InterpreterError;
pub use crate::interpreter::{Interpreter, InterpreterBuilder};
pub use crate::model::{ParsedRecipe, SavedRecipe, WeatherSnapshot};
pub use crate::shopping::{ShoppingItem, ShoppingList};
pub use crate::tags::Tag;

/// Interpret recipe text with the stock heuristics.
///
/// Equivalent to `Interpreter::default().interpret(text)`.
pub fn interpret(text: &str) -> ParsedRecipe {
    Interpreter::default().interpret(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_interpret_uses_defaults() {
        let parsed = interpret("");
        assert_eq!(parsed.title, "Generated Recipe");
    }
}
