use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Torrent not registered with this tracker")]
    TorrentNotRegistered,
    #[error("Tracker is disabled")]
    TrackerDisabled,
    #[error("Tracker is not running")]
    NotRunning,
}
