use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;

/// Torrent metadata kept for as long as the torrent stays registered,
/// independent of peer churn. Timestamps are unix seconds.
#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct TrackedTorrent {
    pub info_hash: InfoHash,
    pub name: Option<String>,
    pub total_size: Option<u64>,
    pub created_at: i64,
    pub last_announce: i64,
    pub completed: u64,
    pub uploaded: u64,
    pub downloaded: u64,
    pub is_internal: bool,
}
