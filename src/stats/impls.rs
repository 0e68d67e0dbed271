/// StatsAtomics construction and counter selection.
pub mod stats_atomics;

/// Statistics accessors on TorrentTracker.
pub mod torrent_tracker;
