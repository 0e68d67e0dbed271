use std::net::SocketAddr;
use actix_web::dev::ServerHandle;
use tokio::runtime::Runtime;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct RunningServer {
    pub(crate) runtime: Runtime,
    pub(crate) http_handle: ServerHandle,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) http_addr: SocketAddr,
    pub(crate) udp_addr: Option<SocketAddr>,
    pub(crate) tasks: Vec<JoinHandle<()>>,
}
