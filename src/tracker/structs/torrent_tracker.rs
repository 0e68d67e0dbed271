use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::security::structs::tracker_security::TrackerSecurity;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_database::PeerDatabase;
use crate::tracker::structs::torrent_registry::TorrentRegistry;

#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub peer_database: Arc<PeerDatabase>,
    pub torrent_registry: Arc<TorrentRegistry>,
    pub security: Arc<TrackerSecurity>,
    pub stats: Arc<StatsAtomics>,
}
