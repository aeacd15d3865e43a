// =============================================================================
// Scenario Common - Client Configuration
// =============================================================================

use serde::{Deserialize, Serialize};

/// API base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Settings for the scenario API client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Config baked in at build time.
    ///
    /// `SCENARIO_API_URL` overrides the default base URL when set while
    /// compiling (e.g. `SCENARIO_API_URL=https://host/api trunk build`).
    pub fn from_build_env() -> Self {
        match option_env!("SCENARIO_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Set the base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Full URL for an endpoint path such as `/scenarios`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
