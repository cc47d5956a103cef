#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::view::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{KeywordError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use toml_config::TomlConfig;

pub const API_KEY_ENV: &str = "API_KEY";
pub const API_KEY_ENV_FALLBACK: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Provider credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Reads the credential once, `API_KEY` first, then `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        [API_KEY_ENV, API_KEY_ENV_FALLBACK]
            .into_iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(Self)
            .ok_or_else(|| KeywordError::MissingConfigError {
                field: API_KEY_ENV.to_string(),
            })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

/// Immutable runtime configuration handed to the adapter at construction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: ApiKey,
    pub model: String,
    pub base_url: String,
    pub format: OutputFormat,
    pub color: bool,
}

impl AppConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            format: OutputFormat::default(),
            color: true,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Precedence: overrides, then file, then defaults.
    pub fn resolve(api_key: ApiKey, file: Option<&TomlConfig>, overrides: ConfigOverrides) -> Self {
        let defaults = TomlConfig::default();
        let file = file.unwrap_or(&defaults);

        Self {
            api_key,
            model: overrides
                .model
                .or_else(|| file.provider.model.clone())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: overrides
                .base_url
                .or_else(|| file.provider.base_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            format: overrides
                .format
                .or(file.display.format)
                .unwrap_or_default(),
            color: !overrides.no_color && file.display.color.unwrap_or(true),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn api_key(&self) -> &str {
        self.api_key.expose()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("model", &self.model)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn api_key_prefers_primary_variable() {
        let key = ApiKey::from_lookup(lookup(&[
            ("API_KEY", "primary"),
            ("GEMINI_API_KEY", "fallback"),
        ]))
        .unwrap();
        assert_eq!(key.expose(), "primary");
    }

    #[test]
    fn api_key_falls_back_and_skips_blank() {
        let key =
            ApiKey::from_lookup(lookup(&[("API_KEY", "  "), ("GEMINI_API_KEY", "fallback")]))
                .unwrap();
        assert_eq!(key.expose(), "fallback");
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = ApiKey::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, KeywordError::MissingConfigError { ref field } if field == "API_KEY"));
    }

    #[test]
    fn debug_output_redacts_credential() {
        let config = AppConfig::new(ApiKey::new("super-secret"));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("ApiKey(***)"));
    }

    #[test]
    fn resolve_applies_precedence() {
        let file = TomlConfig::from_toml_str(
            r#"
[provider]
model = "file-model"
base_url = "http://file.example"

[display]
format = "json"
"#,
        )
        .unwrap();

        let config = AppConfig::resolve(
            ApiKey::new("k"),
            Some(&file),
            ConfigOverrides {
                model: Some("cli-model".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(config.model, "cli-model");
        assert_eq!(config.base_url, "http://file.example");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.color);

        let defaults = AppConfig::resolve(ApiKey::new("k"), None, ConfigOverrides::default());
        assert_eq!(defaults.model, DEFAULT_MODEL);
        assert_eq!(defaults.base_url, DEFAULT_BASE_URL);
        assert_eq!(defaults.format, OutputFormat::Table);
        assert!(defaults.validate().is_ok());
    }
}
