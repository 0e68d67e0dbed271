//! Configuration management module.
//!
//! Loads, validates and saves the tracker configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! - **tracker_config**: announce interval, peer timeout, private mode, scrape
//! - **http_server**: HTTP listener port and actix worker settings
//! - **udp_server**: UDP listener toggle and port
//! - **security**: IP allow/deny lists and the per-IP request rate limit
//!
//! Every section falls back to its defaults when omitted from the file.
//!
//! # Example
//!
//! ```rust,ignore
//! use embedded_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//!
//! let default_config = Configuration::init();
//! Configuration::save_from_config("config.toml", &default_config)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
