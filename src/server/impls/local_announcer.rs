use std::net::IpAddr;
use std::sync::Arc;
use log::{debug, warn};
use crate::server::structs::local_announcer::LocalAnnouncer;
use crate::server::structs::tracker_server::TrackerServer;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

impl LocalAnnouncer {
    pub fn new(server: Arc<TrackerServer>) -> LocalAnnouncer
    {
        LocalAnnouncer { server }
    }

    /// Announcer bound to the server installed with `TrackerServer::set_current`.
    pub fn from_current() -> Option<LocalAnnouncer>
    {
        TrackerServer::current().map(LocalAnnouncer::new)
    }

    pub fn announce_started(&self, info_hash: InfoHash, peer_id: PeerId, port: u16, uploaded: u64, downloaded: u64, left: u64) -> bool
    {
        self.announce(info_hash, peer_id, port, uploaded, downloaded, left, AnnounceEvent::Started)
    }

    pub fn announce_periodic(&self, info_hash: InfoHash, peer_id: PeerId, port: u16, uploaded: u64, downloaded: u64, left: u64) -> bool
    {
        self.announce(info_hash, peer_id, port, uploaded, downloaded, left, AnnounceEvent::None)
    }

    pub fn announce_stopped(&self, info_hash: InfoHash, peer_id: PeerId, port: u16, uploaded: u64, downloaded: u64, left: u64) -> bool
    {
        self.announce(info_hash, peer_id, port, uploaded, downloaded, left, AnnounceEvent::Stopped)
    }

    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(level = "debug")]
    fn announce(&self, info_hash: InfoHash, peer_id: PeerId, port: u16, uploaded: u64, downloaded: u64, left: u64, event: AnnounceEvent) -> bool
    {
        if !self.server.is_enabled() || !self.server.is_running() {
            return false;
        }

        let tracker = &self.server.tracker;
        let local_ip = &tracker.config.tracker_config.local_peer_ip;
        let ip = match local_ip.parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(_) => {
                warn!("[ANNOUNCE] Invalid local peer ip: {local_ip}");
                return false;
            }
        };

        match self.server.announce_peer(info_hash, peer_id, ip, port, uploaded, downloaded, left, event, true) {
            Ok(()) => {
                tracker.update_stats(StatsEvent::LocalAnnouncesHandled, 1);
                true
            }
            Err(error) => {
                debug!("[ANNOUNCE] Local announce for {info_hash} failed: {error}");
                false
            }
        }
    }
}
