use std::sync::Arc;
use crate::server::structs::tracker_server::TrackerServer;

pub static CURRENT_SERVER: once_cell::sync::Lazy<parking_lot::RwLock<Option<Arc<TrackerServer>>>> =
    once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(None));

impl TrackerServer {
    /// Installs the process-wide server. Only the composition root should call this.
    pub fn set_current(server: Arc<TrackerServer>)
    {
        *CURRENT_SERVER.write() = Some(server);
    }

    pub fn clear_current() -> Option<Arc<TrackerServer>>
    {
        CURRENT_SERVER.write().take()
    }

    pub fn current() -> Option<Arc<TrackerServer>>
    {
        CURRENT_SERVER.read().clone()
    }
}
