//! Core BitTorrent tracker implementation.
//!
//! Holds the swarm state shared by the HTTP and UDP handlers and by the
//! in-process announce path.
//!
//! # Main Components
//!
//! - `TorrentTracker` - config, stores, security and counters behind one `Arc`
//! - `PeerDatabase` - live peers per torrent, expired after the peer timeout
//! - `TorrentRegistry` - per-torrent metadata and cumulative counters
//! - `InfoHash` / `PeerId` - 20-byte identifiers
//!
//! # Locking
//!
//! Each store sits behind a single `parking_lot::Mutex` that is held for the
//! whole of every operation, so readers never observe a half-applied update.
//! No lock is ever held across an `.await`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use embedded_tracker::config::structs::configuration::Configuration;
//! use embedded_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = Arc::new(TorrentTracker::new(Arc::new(Configuration::init())));
//! let expired = tracker.peer_database.expire_old_peers();
//! ```

/// Enumerations for tracker operations.
///
/// Contains the announce event, the peer list shapes and the tracker error.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases for collection types.
pub mod types;
