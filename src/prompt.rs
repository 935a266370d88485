//! Prompt templates for the external generative-text client.
//!
//! The HTTP call itself lives outside this crate; these helpers only render
//! the text sent upstream. The recipe prompt asks for output in the advisory
//! format the interpreter consumes, closing the loop on the text contract:
//! title line, description, Ingredients, Instructions, trailing `TAGS:` line
//! restricted to the fixed vocabulary.

use crate::model::WeatherSnapshot;
use crate::tags::Tag;

/// Mood/weather meal-suggestion prompt template.
///
/// Loaded from `prompts/suggestion.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax. Contains `{{MOOD}}`, `{{TEMPERATURE}}`, and
/// `{{WEATHER}}` placeholders.
pub const SUGGESTION_PROMPT: &str = include_str!("prompts/suggestion.txt");

/// Full-recipe generation prompt template.
///
/// Contains `{{DISH}}`, `{{COOK_TIME}}`, `{{DIETARY}}`, and `{{TAGS}}`
/// placeholders; the last expands to the complete tag vocabulary.
pub const RECIPE_PROMPT: &str = include_str!("prompts/recipe.txt");

/// Render the short suggestion prompt from the user's mood and the current
/// weather. Missing inputs render as explicit placeholders so the model
/// knows they were not provided.
pub fn render_suggestion_prompt(mood: Option<&str>, weather: Option<&WeatherSnapshot>) -> String {
    let temperature = weather
        .map(|w| format!("{}°F", w.temperature_f))
        .unwrap_or_else(|| "Not available".to_string());
    let description = weather
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Not available".to_string());

    SUGGESTION_PROMPT
        .replace("{{MOOD}}", mood.unwrap_or("Not specified"))
        .replace("{{TEMPERATURE}}", &temperature)
        .replace("{{WEATHER}}", &description)
}

/// Render the full-recipe prompt for a chosen dish, constrained by the
/// user's cook time and dietary preferences.
pub fn render_recipe_prompt(
    dish: &str,
    cook_time_minutes: Option<u32>,
    dietary: &[String],
) -> String {
    let cook_time = cook_time_minutes
        .map(|m| format!("at most {m} minutes"))
        .unwrap_or_else(|| "no limit".to_string());
    let dietary = if dietary.is_empty() {
        "none".to_string()
    } else {
        dietary.join(", ")
    };
    let vocabulary = Tag::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    RECIPE_PROMPT
        .replace("{{DISH}}", dish)
        .replace("{{COOK_TIME}}", &cook_time)
        .replace("{{DIETARY}}", &dietary)
        .replace("{{TAGS}}", &vocabulary)
}
