use serde::Serialize;
use crate::stats::structs::stats::Stats;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerStats {
    pub torrents: u64,
    pub internal_torrents: u64,
    pub peers: u64,
    pub seeders: u64,
    pub leechers: u64,
    pub completed: u64,
    pub uploaded: u64,
    pub downloaded: u64,
    pub counters: Stats,
}
