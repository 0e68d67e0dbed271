use std::time::Duration;
use parking_lot::Mutex;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_info::PeerInfo;
use crate::tracker::types::ahash_map::AHashMap;

#[derive(Debug)]
pub struct PeerDatabase {
    pub(crate) torrents: Mutex<AHashMap<InfoHash, AHashMap<PeerId, PeerInfo>>>,
    pub(crate) peer_timeout: Duration,
}
