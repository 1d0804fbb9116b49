//! Application configuration.
//!
//! The helper bundle identifier is fixed at build time and can be
//! overridden with `LOGIN_ITEM_HELPER_ID` for local testing against a
//! differently signed helper. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Bundle identifier of the helper app registered as a login item.
pub const DEFAULT_HELPER_IDENTIFIER: &str = "com.georgebabichev.LoginItem-Helper";

pub const HELPER_ID_ENV: &str = "LOGIN_ITEM_HELPER_ID";

/// Message shown when register/unregister fails.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update Login Item.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub helper_identifier: String,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            helper_identifier: DEFAULT_HELPER_IDENTIFIER.to_string(),
            window_title: "LoginItem Demo".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Blank values are
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(id) = lookup(HELPER_ID_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            config.helper_identifier = id;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identifier() {
        let config = AppConfig::default();
        assert_eq!(config.helper_identifier, DEFAULT_HELPER_IDENTIFIER);
    }

    #[test]
    fn test_env_override() {
        let config = AppConfig::from_lookup(|key| {
            (key == HELPER_ID_ENV).then(|| " com.example.Helper ".to_string())
        });
        assert_eq!(config.helper_identifier, "com.example.Helper");
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = AppConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.helper_identifier, DEFAULT_HELPER_IDENTIFIER);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(value["helperIdentifier"], DEFAULT_HELPER_IDENTIFIER);
        assert_eq!(value["windowTitle"], "LoginItem Demo");
    }
}
