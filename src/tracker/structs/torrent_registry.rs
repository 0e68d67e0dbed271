use parking_lot::Mutex;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;
use crate::tracker::types::ahash_map::AHashMap;

#[derive(Debug, Default)]
pub struct TorrentRegistry {
    pub(crate) torrents: Mutex<AHashMap<InfoHash, TrackedTorrent>>,
}
