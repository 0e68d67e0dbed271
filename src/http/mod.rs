//! HTTP tracker protocol implementation.
//!
//! Implements the BitTorrent tracker protocol over HTTP as specified in
//! BEP 3 (The BitTorrent Protocol Specification) and BEP 23 (Tracker Returns
//! Compact Peer Lists).
//!
//! # Supported Endpoints
//!
//! - `/announce` - Handle peer announcements
//! - `/scrape` - Query torrent statistics
//!
//! Any other path answers `404 Not Found` with a bencoded failure reason.
//!
//! # Response Format
//!
//! Responses are bencoded dictionaries. Tracker-level failures are still
//! `200 OK` and carry a single `failure reason` key.

/// Type aliases for HTTP module.
pub mod types;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
