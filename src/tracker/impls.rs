//! Implementation blocks for tracker data structures.
//!
//! Implementations are organized by the struct they extend.

/// InfoHash implementation: Display, FromStr, conversions, Serialize, Deserialize.
pub mod info_hash;

/// PeerId implementation: Display, FromStr, conversions, Serialize, Deserialize.
pub mod peer_id;

/// AnnounceEvent conversions from wire integers and query values.
pub mod announce_event;

/// PeerList helpers.
pub mod peer_list;

/// Live peer store operations.
pub mod peer_database;

/// Torrent metadata store operations.
pub mod torrent_registry;

/// TorrentTracker construction and the shared announce path.
pub mod torrent_tracker;

/// Announce/scrape request validation and handling.
pub mod torrent_tracker_handlers;
