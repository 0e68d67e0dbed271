/// Announce event sent by a peer (none, completed, started, stopped).
pub mod announce_event;

/// Peer list returned by `PeerDatabase::get_peers`.
pub mod peer_list;

/// Errors raised by the tracker core.
pub mod tracker_error;
