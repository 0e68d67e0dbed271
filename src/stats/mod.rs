//! Real-time statistics counters.
//!
//! Atomic counters for protocol activity, updated from every handler without
//! taking a lock, and a plain `Stats` snapshot for logging.
//!
//! # Example
//!
//! ```rust,ignore
//! use embedded_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::HttpAnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
