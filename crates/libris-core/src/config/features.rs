//! Feature flag configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Feature flag source configuration.
///
/// Flags live in a JSON file edited out-of-band; the server only reads
/// and serves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlagConfig {
    /// Path to the feature flag JSON file.
    #[serde(default = "default_flags_path")]
    pub flags_path: String,
}

impl Default for FeatureFlagConfig {
    fn default() -> Self {
        Self {
            flags_path: default_flags_path(),
        }
    }
}

impl FeatureFlagConfig {
    /// Load the flag map from the configured JSON file.
    ///
    /// A missing file yields an empty flag map rather than an error, so a
    /// deployment without flags still serves `GET /feature-flags`.
    pub fn load_flags(&self) -> Result<serde_json::Value, AppError> {
        match std::fs::read_to_string(&self.flags_path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::configuration(format!(
                    "Invalid feature flag file '{}': {e}",
                    self.flags_path
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(serde_json::Value::Object(serde_json::Map::new()))
            }
            Err(e) => Err(AppError::configuration(format!(
                "Failed to read feature flag file '{}': {e}",
                self.flags_path
            ))),
        }
    }
}

fn default_flags_path() -> String {
    "config/feature_flags.json".to_string()
}
