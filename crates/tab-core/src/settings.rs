//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::candidate::ViewKind;
use crate::shortcuts::ModifierStyle;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub pool: PoolSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolSettings {
    pub eligible_kinds: Vec<ViewKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub tips: String,
    pub empty_text: String,
    #[serde(default)]
    pub modifier: ModifierSetting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierSetting {
    #[default]
    Auto,
    Cmd,
    Ctrl,
}

impl DisplaySettings {
    pub fn modifier_style(&self) -> ModifierStyle {
        match self.modifier {
            ModifierSetting::Auto => ModifierStyle::platform_default(),
            ModifierSetting::Cmd => ModifierStyle::Cmd,
            ModifierSetting::Ctrl => ModifierStyle::Ctrl,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(pool.eligible_kinds);
    check_non_empty!(display.tips);
    check_non_empty!(display.empty_text);

    if let Some(blank) = s
        .pool
        .eligible_kinds
        .iter()
        .position(|k| k.as_str().trim().is_empty())
    {
        return Err(SettingsError::InvalidValue {
            field: format!("pool.eligible_kinds[{blank}]"),
            reason: "view type must not be blank".to_string(),
        });
    }

    Ok(())
}
