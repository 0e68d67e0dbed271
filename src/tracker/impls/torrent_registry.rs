use crate::common::common::current_time;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_registry::TorrentRegistry;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

impl TorrentRegistry {
    pub fn new() -> TorrentRegistry
    {
        TorrentRegistry::default()
    }

    /// Registers a torrent or refreshes an existing entry.
    ///
    /// A name or size already set is never overwritten; unset ones are filled.
    #[tracing::instrument(level = "debug")]
    pub fn register_torrent(&self, info_hash: InfoHash, name: Option<String>, total_size: Option<u64>, is_internal: bool) -> TrackedTorrent
    {
        let now = current_time();
        let mut lock = self.torrents.lock();
        let torrent = lock.entry(info_hash).or_insert_with(|| TrackedTorrent {
            info_hash,
            name: None,
            total_size: None,
            created_at: now,
            last_announce: now,
            completed: 0,
            uploaded: 0,
            downloaded: 0,
            is_internal,
        });
        if torrent.name.is_none() {
            torrent.name = name;
        }
        if torrent.total_size.is_none() {
            torrent.total_size = total_size;
        }
        torrent.is_internal |= is_internal;
        torrent.last_announce = now;
        torrent.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn unregister_torrent(&self, info_hash: InfoHash) -> bool
    {
        self.torrents.lock().remove(&info_hash).is_some()
    }

    /// Adds transfer deltas and counts a completion. Unknown torrents are ignored.
    #[tracing::instrument(level = "debug")]
    pub fn update_announce(&self, info_hash: InfoHash, uploaded: u64, downloaded: u64, completed: bool)
    {
        let mut lock = self.torrents.lock();
        if let Some(torrent) = lock.get_mut(&info_hash) {
            torrent.uploaded = torrent.uploaded.saturating_add(uploaded);
            torrent.downloaded = torrent.downloaded.saturating_add(downloaded);
            if completed {
                torrent.completed += 1;
            }
            torrent.last_announce = current_time();
        }
    }

    /// In private mode only registered torrents may be announced.
    pub fn is_allowed(&self, info_hash: InfoHash, private_mode: bool) -> bool
    {
        !private_mode || self.torrents.lock().contains_key(&info_hash)
    }

    pub fn get_torrent(&self, info_hash: InfoHash) -> Option<TrackedTorrent>
    {
        self.torrents.lock().get(&info_hash).cloned()
    }

    pub fn completed(&self, info_hash: InfoHash) -> u64
    {
        self.torrents.lock().get(&info_hash).map(|torrent| torrent.completed).unwrap_or(0)
    }

    pub fn count(&self) -> usize
    {
        self.torrents.lock().len()
    }

    pub fn internal_count(&self) -> usize
    {
        self.torrents.lock().values().filter(|torrent| torrent.is_internal).count()
    }

    pub fn info_hashes(&self) -> Vec<InfoHash>
    {
        self.torrents.lock().keys().copied().collect()
    }

    /// Completed, uploaded and downloaded summed over every torrent.
    pub fn totals(&self) -> (u64, u64, u64)
    {
        let lock = self.torrents.lock();
        lock.values().fold((0, 0, 0), |(completed, uploaded, downloaded), torrent| {
            (
                completed + torrent.completed,
                uploaded.saturating_add(torrent.uploaded),
                downloaded.saturating_add(torrent.downloaded),
            )
        })
    }
}
