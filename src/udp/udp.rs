use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::info;
use tokio::task::JoinHandle;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::udp::structs::udp_server::UdpServer;

pub const PROTOCOL_IDENTIFIER: i64 = 4_497_486_125_440;
pub const MAX_SCRAPE_TORRENTS: u8 = 74;
pub const MAX_PACKET_SIZE: usize = 1496;
pub const MIN_PACKET_LEN: usize = 16;
pub const MIN_ANNOUNCE_LEN: usize = 98;
pub const DEFAULT_NUMWANT: i32 = 50;
pub const MAX_NUMWANT: i32 = 200;
pub const CONNECTION_EXPIRY: Duration = Duration::from_secs(120);

/// Binds the UDP listener and spawns its receive loop on the current runtime.
///
/// Returns the bound address (useful with port 0) and the loop's handle. The
/// loop ends when `rx` changes or its sender is dropped.
pub async fn udp_service(addr: SocketAddr, data: Arc<TorrentTracker>, rx: tokio::sync::watch::Receiver<bool>) -> std::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let udp_server = UdpServer::new(data, addr).await?;
    let local_addr = udp_server.local_addr()?;
    info!("[UDP] Starting a server listener on {local_addr}");
    let handle = tokio::spawn(async move {
        udp_server.start(rx).await;
    });
    Ok((local_addr, handle))
}
