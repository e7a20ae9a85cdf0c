use serde::{Deserialize, Serialize};

fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}

/// Startup configuration, read from `config.json`.
///
/// The site URL is always explicit injected state so everything downstream
/// stays a pure function of its inputs; there is no environment lookup.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Bearer credential for authenticated endpoints (notification count).
    /// Absent means anonymous.
    #[serde(default)]
    pub session_token: Option<String>,
    /// Market shortcodes listed when the CLI is run without an id argument.
    #[serde(default)]
    pub watchlist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_url: default_site_url(),
            session_token: None,
            watchlist: Vec::new(),
        }
    }
}
