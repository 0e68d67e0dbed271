use std::sync::Arc;
use crate::server::structs::tracker_server::TrackerServer;

#[derive(Debug, Clone)]
pub struct LocalAnnouncer {
    pub server: Arc<TrackerServer>,
}
