//! Data structures for BitTorrent tracker operations.
//!
//! Core identifier types, stored peer and torrent records, the two stores and
//! the parsed request structures.

/// Main tracker instance struct.
///
/// Holds the configuration, both stores, the security policy and the
/// statistics counters shared by every protocol handler.
pub mod torrent_tracker;

/// Announce request parameters.
///
/// Parsed from an HTTP query string or a UDP datagram, or built directly by
/// the in-process announce path.
pub mod announce_query_request;

/// Scrape request parameters.
pub mod scrape_query_request;

/// 20-byte torrent info hash identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// One live peer of one torrent.
pub mod peer_info;

/// Per-torrent metadata and cumulative counters.
pub mod tracked_torrent;

/// Thread-safe live peer store keyed by torrent.
pub mod peer_database;

/// Thread-safe torrent metadata store.
pub mod torrent_registry;

/// Seeder/leecher/download counts for one torrent.
pub mod torrent_stats;

/// Non-compact peer list entry (`peer id`, `ip`, `port`).
pub mod dict_peer;
