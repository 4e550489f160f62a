//! Persisted application settings.

use crate::style::palette::ThemeMode;

/// Endpoint used when no settings file exists yet.
pub const DEFAULT_ENDPOINT: &str = "https://prod2.readychatai.com/business/mock-messages";

/// Application settings that persist across sessions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Messages endpoint URL.
    pub endpoint: String,
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            theme_mode: ThemeMode::Dark,
        }
    }
}

/// Serde helpers for `ThemeMode` (kept as a plain string on disk).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "light" => Ok(ThemeMode::Light),
            _ => Ok(ThemeMode::Dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_roundtrip() {
        let settings = AppSettings {
            endpoint: "https://example.com/messages".to_owned(),
            theme_mode: ThemeMode::Light,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.endpoint, settings.endpoint);
        assert_eq!(back.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let back: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(back.endpoint, DEFAULT_ENDPOINT);
    }
}
