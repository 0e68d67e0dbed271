//! Tracker server orchestration.
//!
//! `TrackerServer` owns the `TorrentTracker` and the runtime that hosts the
//! HTTP listener, the UDP listener and the peer expiry loop. `LocalAnnouncer`
//! is the in-process announce path used by a seeding engine living in the
//! same process: it reaches the stores directly, with no socket I/O.
//!
//! # Lifecycle
//!
//! ```text
//! new(config) -> start() -> [announce / register / get_stats ...] -> stop()
//! ```
//!
//! `start()` and `stop()` block the calling thread and must not be called
//! from inside an async context.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use embedded_tracker::config::structs::configuration::Configuration;
//! use embedded_tracker::server::structs::tracker_server::TrackerServer;
//! use embedded_tracker::server::structs::local_announcer::LocalAnnouncer;
//!
//! let server = Arc::new(TrackerServer::new(Arc::new(Configuration::init())));
//! if server.start() {
//!     let announcer = LocalAnnouncer::new(server.clone());
//!     announcer.announce_started(info_hash, peer_id, 6881, 0, 0, 0);
//!     server.stop();
//! }
//! ```

/// Data structures for the server and its announcer.
pub mod structs;

/// Implementation blocks for the server structs.
pub mod impls;

/// Process-wide accessor for the installed server.
#[allow(clippy::module_inception)]
pub mod server;

/// Unit tests for the server lifecycle and the in-process announce path.
pub mod tests;
