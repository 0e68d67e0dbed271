use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::Mutex;
use crate::server::structs::running_server::RunningServer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

#[derive(Debug)]
pub struct TrackerServer {
    pub tracker: Arc<TorrentTracker>,
    pub(crate) running: AtomicBool,
    pub(crate) state: Mutex<Option<RunningServer>>,
}
