use std::sync::Arc;
use std::time::Duration;
use log::{debug, info};
use crate::config::structs::configuration::Configuration;
use crate::security::structs::tracker_security::TrackerSecurity;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::peer_database::PeerDatabase;
use crate::tracker::structs::torrent_registry::TorrentRegistry;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        let peer_timeout = Duration::from_secs(config.peer_timeout());
        TorrentTracker {
            peer_database: Arc::new(PeerDatabase::new(peer_timeout)),
            torrent_registry: Arc::new(TorrentRegistry::new()),
            security: Arc::new(TrackerSecurity::new(&config.security)),
            stats: Arc::new(StatsAtomics::new()),
            config,
        }
    }

    /// Applies one announce to the peer database and the registry.
    ///
    /// Every announce path (HTTP, UDP, in-process) goes through here. A
    /// `stopped` event only removes the peer. Otherwise the peer is upserted,
    /// the torrent registered (outside private mode) and the registry
    /// counters advanced by the transfer since the peer's previous announce.
    #[tracing::instrument(level = "debug")]
    pub fn announce_peer(&self, announce: &AnnounceQueryRequest, is_internal: bool) -> Result<(), TrackerError>
    {
        let private_mode = self.config.tracker_config.private_mode;
        if !self.torrent_registry.is_allowed(announce.info_hash, private_mode) {
            debug!("[ANNOUNCE] Rejected unregistered torrent {}", announce.info_hash);
            return Err(TrackerError::TorrentNotRegistered);
        }

        if self.config.tracker_config.log_announces {
            info!(
                "[ANNOUNCE] {} peer {} at {}:{} event {:?} left {}{}",
                announce.info_hash, announce.peer_id, announce.remote_addr, announce.port,
                announce.event, announce.left, if is_internal { " (internal)" } else { "" }
            );
        }

        if announce.event == AnnounceEvent::Stopped {
            self.peer_database.remove_peer(announce.info_hash, announce.peer_id);
            return Ok(());
        }

        let previous = self.peer_database.add_or_update_peer(
            announce.info_hash,
            announce.peer_id,
            announce.remote_addr,
            announce.port,
            announce.uploaded,
            announce.downloaded,
            announce.left,
            is_internal,
        );

        if !private_mode {
            self.torrent_registry.register_torrent(announce.info_hash, None, None, is_internal);
        }

        let (uploaded_delta, downloaded_delta) = match previous {
            None => (announce.uploaded, announce.downloaded),
            Some(peer) => (
                announce.uploaded.saturating_sub(peer.uploaded),
                announce.downloaded.saturating_sub(peer.downloaded),
            ),
        };
        self.torrent_registry.update_announce(
            announce.info_hash,
            uploaded_delta,
            downloaded_delta,
            announce.event == AnnounceEvent::Completed,
        );
        Ok(())
    }

    /// Runs one expiry pass over the peer database.
    pub fn expire_peers(&self) -> usize
    {
        let expired = self.peer_database.expire_old_peers();
        if expired > 0 {
            self.update_stats(StatsEvent::PeersExpired, expired as i64);
        }
        expired
    }
}
