use std::net::IpAddr;
use std::time::{Duration, Instant};
use log::debug;
use parking_lot::Mutex;
use rand::RngExt;
use crate::tracker::enums::peer_list::PeerList;
use crate::tracker::structs::dict_peer::DictPeer;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_database::PeerDatabase;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_info::PeerInfo;
use crate::tracker::structs::torrent_stats::TorrentStats;
use crate::tracker::types::ahash_map::AHashMap;

impl PeerDatabase {
    pub fn new(peer_timeout: Duration) -> PeerDatabase
    {
        PeerDatabase {
            torrents: Mutex::new(AHashMap::default()),
            peer_timeout,
        }
    }

    pub fn peer_timeout(&self) -> Duration
    {
        self.peer_timeout
    }

    /// Inserts or refreshes a peer and returns its previous state, if any.
    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(level = "debug")]
    pub fn add_or_update_peer(&self, info_hash: InfoHash, peer_id: PeerId, ip: IpAddr, port: u16, uploaded: u64, downloaded: u64, left: u64, is_internal: bool) -> Option<PeerInfo>
    {
        let peer = PeerInfo {
            peer_id,
            ip,
            port,
            info_hash,
            uploaded,
            downloaded,
            left,
            last_seen: Instant::now(),
            is_internal,
        };
        let mut lock = self.torrents.lock();
        lock.entry(info_hash).or_default().insert(peer_id, peer)
    }

    /// Removes a peer. The torrent's entry goes away with its last peer.
    #[tracing::instrument(level = "debug")]
    pub fn remove_peer(&self, info_hash: InfoHash, peer_id: PeerId) -> bool
    {
        let mut lock = self.torrents.lock();
        let Some(peers) = lock.get_mut(&info_hash) else {
            return false;
        };
        let removed = peers.remove(&peer_id).is_some();
        if peers.is_empty() {
            lock.remove(&info_hash);
        }
        removed
    }

    /// Drops every peer of a torrent and returns how many there were.
    pub fn remove_torrent(&self, info_hash: InfoHash) -> usize
    {
        self.torrents.lock().remove(&info_hash).map(|peers| peers.len()).unwrap_or(0)
    }

    pub fn get_peer(&self, info_hash: InfoHash, peer_id: PeerId) -> Option<PeerInfo>
    {
        let lock = self.torrents.lock();
        lock.get(&info_hash).and_then(|peers| peers.get(&peer_id)).cloned()
    }

    /// Returns up to `max_peers` peers of a torrent, skipping `exclude_peer_id`.
    ///
    /// When more candidates exist than requested, a uniform random subset is
    /// returned so repeated announces spread load across the swarm. Compact
    /// lists only carry IPv4 peers.
    #[tracing::instrument(level = "debug")]
    pub fn get_peers(&self, info_hash: InfoHash, max_peers: usize, exclude_peer_id: Option<PeerId>, compact: bool) -> PeerList
    {
        let lock = self.torrents.lock();
        let mut candidates: Vec<&PeerInfo> = match lock.get(&info_hash) {
            None => Vec::new(),
            Some(peers) => peers.values()
                .filter(|peer| exclude_peer_id != Some(peer.peer_id))
                .filter(|peer| !compact || peer.ip.is_ipv4())
                .collect(),
        };

        if candidates.len() > max_peers {
            let mut rng = rand::rng();
            for i in 0..max_peers {
                let j = rng.random_range(i..candidates.len());
                candidates.swap(i, j);
            }
            candidates.truncate(max_peers);
        }

        if compact {
            let mut bytes = Vec::with_capacity(candidates.len() * 6);
            for peer in candidates {
                if let IpAddr::V4(ip) = peer.ip {
                    bytes.extend_from_slice(&ip.octets());
                    bytes.extend_from_slice(&peer.port.to_be_bytes());
                }
            }
            return PeerList::Compact(bytes);
        }

        PeerList::Dict(candidates.into_iter().map(|peer| DictPeer {
            peer_id: peer.peer_id,
            ip: peer.ip,
            port: peer.port,
        }).collect())
    }

    /// Seeders and leechers of one torrent. `downloaded` is always 0 here;
    /// completions are counted by the registry.
    #[tracing::instrument(level = "debug")]
    pub fn get_stats(&self, info_hash: InfoHash) -> TorrentStats
    {
        let lock = self.torrents.lock();
        let mut stats = TorrentStats::default();
        if let Some(peers) = lock.get(&info_hash) {
            for peer in peers.values() {
                if peer.left == 0 {
                    stats.complete += 1;
                } else {
                    stats.incomplete += 1;
                }
            }
        }
        stats
    }

    pub fn expire_old_peers(&self) -> usize
    {
        self.expire_old_peers_at(Instant::now())
    }

    /// Removes every peer not seen within the peer timeout, measured from `now`.
    #[tracing::instrument(level = "debug")]
    pub fn expire_old_peers_at(&self, now: Instant) -> usize
    {
        let mut lock = self.torrents.lock();
        let mut removed = 0usize;
        lock.retain(|_, peers| {
            let before = peers.len();
            peers.retain(|_, peer| now.saturating_duration_since(peer.last_seen) < self.peer_timeout);
            removed += before - peers.len();
            !peers.is_empty()
        });
        if removed > 0 {
            debug!("[PEERS] Expired {removed} peers");
        }
        removed
    }

    pub fn torrent_count(&self) -> usize
    {
        self.torrents.lock().len()
    }

    pub fn peer_count(&self) -> usize
    {
        self.torrents.lock().values().map(|peers| peers.len()).sum()
    }

    /// Seeders and leechers across every torrent.
    pub fn totals(&self) -> (u64, u64)
    {
        let lock = self.torrents.lock();
        let mut seeders = 0u64;
        let mut leechers = 0u64;
        for peer in lock.values().flat_map(|peers| peers.values()) {
            if peer.left == 0 {
                seeders += 1;
            } else {
                leechers += 1;
            }
        }
        (seeders, leechers)
    }

    pub fn info_hashes(&self) -> Vec<InfoHash>
    {
        self.torrents.lock().keys().copied().collect()
    }
}
