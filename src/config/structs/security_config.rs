use serde::{Deserialize, Serialize};

/// Admission policy settings.
///
/// Patterns in `ip_whitelist`/`ip_blacklist` are exact addresses, `a.b.*`
/// prefixes or `a.b.0.0/16` style networks (matched on the network prefix).
/// A `requests_per_minute` of `0` disables rate limiting.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SecurityConfig {
    pub ip_whitelist: Vec<String>,
    pub ip_blacklist: Vec<String>,
    pub requests_per_minute: u32,
    pub ban_duration: u64,
}
