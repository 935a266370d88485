use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Runtime configuration for the interpreter.
///
/// The built-in heuristics cover the stock model output; the keyword map
/// exists because the upstream generative service's formatting drifts, and
/// new spellings get discovered empirically. Rules here can only ever point
/// at vocabulary members (unknown labels are dropped on load).
#[derive(Debug, Deserialize, Clone)]
pub struct InterpreterConfig {
    /// Title used when the input text has no non-blank line.
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
    /// Extra keyword inference rules: lowercase keyword to tag label.
    #[serde(default)]
    pub keywords: HashMap<String, String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            fallback_title: default_fallback_title(),
            keywords: HashMap::new(),
        }
    }
}

fn default_fallback_title() -> String {
    crate::interpreter::DEFAULT_FALLBACK_TITLE.to_string()
}

impl InterpreterConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MOODMEAL__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MOODMEAL__FALLBACK_TITLE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: MOODMEAL__KEYWORDS__SMOKY
pub fn load_config() -> Result<InterpreterConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with MOODMEAL_ prefix
        // Use double underscore for nested: MOODMEAL__KEYWORDS__SMOKY
        .add_source(
            Environment::with_prefix("MOODMEAL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
