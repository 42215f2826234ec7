//! Remote content store endpoints.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_origin() -> String {
    "http://localhost".into()
}

fn default_mount_paths() -> Vec<String> {
    vec![String::new()]
}

fn default_api_paths() -> Vec<String> {
    vec!["/api/portfolio.php".into(), "/api/portfolio".into()]
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("folio/{}", env!("CARGO_PKG_VERSION"))
}

/// Where the content store lives and how candidate URLs are built.
///
/// `endpoints` are tried first, verbatim. After them come the generated
/// candidates: every API path under every mount path of `origin`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Origin the site is served from (e.g., `https://example.com`).
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Origin of a local Apache/PHP install, probed when `origin` is a
    /// development host. Empty disables the probe.
    #[serde(default = "default_origin")]
    pub local_origin: String,

    /// Sub-paths the app may be mounted under (`""` is the root).
    #[serde(default = "default_mount_paths")]
    pub mount_paths: Vec<String>,

    /// API paths relative to a mount, in priority order.
    #[serde(default = "default_api_paths")]
    pub api_paths: Vec<String>,

    /// Explicit endpoint URLs, tried before any generated candidate.
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            local_origin: default_origin(),
            mount_paths: default_mount_paths(),
            api_paths: default_api_paths(),
            endpoints: Vec::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl RemoteConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether any endpoint can be derived from this config.
    #[must_use]
    pub fn has_candidates(&self) -> bool {
        !self.endpoints.is_empty() || (!self.origin.is_empty() && !self.api_paths.is_empty())
    }
}
