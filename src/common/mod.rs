//! Common utilities and shared functionality.
//!
//! Helpers used by every other module of the tracker:
//!
//! - Query string parsing (raw bytes, percent-decoded)
//! - Hex formatting of 20-byte identifiers
//! - Logging setup
//! - Timestamp utilities
//!
//! # Example
//!
//! ```rust,ignore
//! use embedded_tracker::common::common::{parse_query, current_time};
//!
//! let params = parse_query(Some("info_hash=%ab%cd&port=6881".to_string()))?;
//! let now = current_time();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
