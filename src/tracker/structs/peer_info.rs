use std::net::IpAddr;
use std::time::Instant;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A peer as last announced. `left == 0` marks a seeder.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PeerInfo {
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub info_hash: InfoHash,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub last_seen: Instant,
    pub is_internal: bool,
}
