use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::udp::structs::connection_registry::ConnectionRegistry;

#[derive(Debug)]
pub struct UdpServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) tracker: Arc<TorrentTracker>,
    pub(crate) connections: Arc<ConnectionRegistry>,
    pub(crate) receive_timeout: Duration,
}
