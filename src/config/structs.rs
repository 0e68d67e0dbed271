//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core tracker behaviour (intervals, timeouts, private mode).
pub mod tracker_config;

/// HTTP tracker listener configuration.
pub mod http_trackers_config;

/// UDP tracker listener configuration.
pub mod udp_trackers_config;

/// IP filtering and rate limiting settings.
pub mod security_config;
