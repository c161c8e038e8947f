use std::time::Duration;

use credgen_core::DEFAULT_SERVICE_ADDR;

/// Where the credential service lives. Held by the HTTP client for the life
/// of the process and never written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    /// `--addr` (or `CREDGEN_ADDR`, via clap) wins over the built-in default.
    pub fn resolve(addr: Option<String>, timeout_secs: Option<u64>) -> Self {
        let base_url = addr
            .as_deref()
            .map(normalize_base_url)
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_ADDR.to_string());
        Self {
            base_url,
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

pub(crate) fn normalize_base_url(addr: &str) -> String {
    addr.trim().trim_end_matches('/').to_string()
}
