use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::config::structs::configuration::Configuration;
use crate::http::http::http_service;
use crate::server::structs::running_server::RunningServer;
use crate::server::structs::tracker_server::TrackerServer;
use crate::server::structs::tracker_stats::TrackerStats;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;
use crate::udp::udp::udp_service;

pub const STOP_TIMEOUT: Duration = Duration::from_secs(5);

impl TrackerServer {
    pub fn new(config: Arc<Configuration>) -> TrackerServer
    {
        TrackerServer {
            tracker: Arc::new(TorrentTracker::new(config)),
            running: AtomicBool::new(false),
            state: Mutex::new(None),
        }
    }

    pub fn tracker(&self) -> Arc<TorrentTracker>
    {
        self.tracker.clone()
    }

    pub fn is_enabled(&self) -> bool
    {
        self.tracker.config.tracker_config.enabled
    }

    pub fn is_running(&self) -> bool
    {
        self.running.load(Ordering::SeqCst)
    }

    pub fn http_local_addr(&self) -> Option<SocketAddr>
    {
        self.state.lock().as_ref().map(|running| running.http_addr)
    }

    pub fn udp_local_addr(&self) -> Option<SocketAddr>
    {
        self.state.lock().as_ref().and_then(|running| running.udp_addr)
    }

    /// Binds the listeners and starts the background tasks.
    ///
    /// Returns true when the server is running afterwards, including when it
    /// already was. A disabled tracker, an unparsable bind address or a failed
    /// bind returns false and leaves nothing running. Safe to call from inside
    /// another tokio runtime.
    #[tracing::instrument(level = "debug")]
    pub fn start(&self) -> bool
    {
        match outside_runtime(|| self.start_blocking()) {
            Some(started) => started,
            None => {
                error!("[BOOT] Tracker start panicked");
                self.running.store(false, Ordering::SeqCst);
                false
            }
        }
    }

    fn start_blocking(&self) -> bool
    {
        let mut state = self.state.lock();
        if state.is_some() {
            return true;
        }

        let config = self.tracker.config.clone();
        if !config.tracker_config.enabled {
            info!("[BOOT] Tracker is disabled, not starting");
            return false;
        }

        let bind_ip = match config.tracker_config.bind_address.parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(_) => {
                error!("[BOOT] Invalid bind address: {}", config.tracker_config.bind_address);
                return false;
            }
        };

        let runtime = match Builder::new_multi_thread().thread_name("tracker").enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                error!("[BOOT] Unable to build the tracker runtime: {error}");
                return false;
            }
        };

        let http_addr = SocketAddr::new(bind_ip, config.http_server.port);
        let http_tracker = self.tracker.clone();
        let (http_handle, http_server, http_addrs) = match runtime.block_on(async move { http_service(http_addr, http_tracker) }) {
            Ok(result) => result,
            Err(error) => {
                error!("[HTTP] Unable to bind {http_addr}: {error}");
                runtime.shutdown_background();
                return false;
            }
        };
        let http_addr = http_addrs.first().copied().unwrap_or(http_addr);

        let (shutdown, rx) = watch::channel(false);
        let mut tasks: Vec<JoinHandle<()>> = Vec::new();
        tasks.push(runtime.spawn(async move {
            let _ = http_server.await;
        }));
        tasks.push(runtime.spawn(expiry_loop(self.tracker.clone(), rx.clone())));

        let mut udp_addr = None;
        if config.udp_server.enabled {
            let addr = SocketAddr::new(bind_ip, config.udp_server.port);
            match runtime.block_on(udp_service(addr, self.tracker.clone(), rx.clone())) {
                Ok((local_addr, handle)) => {
                    udp_addr = Some(local_addr);
                    tasks.push(handle);
                }
                Err(error) => {
                    error!("[UDP] Unable to bind {addr}: {error}");
                    shutdown_runtime(runtime, http_handle, shutdown, tasks);
                    return false;
                }
            }
        }

        info!("[BOOT] Tracker started (HTTP {http_addr}, UDP {})", udp_addr.map(|addr| addr.to_string()).unwrap_or_else(|| String::from("disabled")));
        *state = Some(RunningServer {
            runtime,
            http_handle,
            shutdown,
            http_addr,
            udp_addr,
            tasks,
        });
        self.running.store(true, Ordering::SeqCst);
        true
    }

    /// Stops every listener and task, waiting a bounded time for each.
    ///
    /// Calling it on a stopped server is a no-op. Safe to call from inside
    /// another tokio runtime.
    #[tracing::instrument(level = "debug")]
    pub fn stop(&self)
    {
        let running = match self.state.lock().take() {
            None => return,
            Some(running) => running,
        };
        self.running.store(false, Ordering::SeqCst);
        info!("[BOOT] Stopping tracker...");

        let RunningServer { runtime, http_handle, shutdown, tasks, .. } = running;
        shutdown_runtime(runtime, http_handle, shutdown, tasks);
        info!("[BOOT] Tracker stopped");
    }

    /// Applies one announce through the shared announce path.
    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(level = "debug")]
    pub fn announce_peer(&self, info_hash: InfoHash, peer_id: PeerId, ip: IpAddr, port: u16, uploaded: u64, downloaded: u64, left: u64, event: AnnounceEvent, is_internal: bool) -> Result<(), TrackerError>
    {
        if !self.is_enabled() {
            return Err(TrackerError::TrackerDisabled);
        }
        self.tracker.announce_peer(&AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            uploaded,
            downloaded,
            left,
            compact: true,
            event,
            remote_addr: ip,
            numwant: 0,
        }, is_internal)
    }

    pub fn register_torrent(&self, info_hash: InfoHash, name: Option<String>, total_size: Option<u64>, is_internal: bool) -> TrackedTorrent
    {
        self.tracker.torrent_registry.register_torrent(info_hash, name, total_size, is_internal)
    }

    /// Drops the registry entry and every live peer of the torrent.
    pub fn unregister_torrent(&self, info_hash: InfoHash) -> bool
    {
        let removed = self.tracker.torrent_registry.unregister_torrent(info_hash);
        let peers = self.tracker.peer_database.remove_torrent(info_hash);
        debug!("[PEERS] Unregistered {info_hash}, dropped {peers} peers");
        removed
    }

    /// Store totals plus one synthetic seeder per internally tracked torrent.
    pub fn get_stats(&self) -> TrackerStats
    {
        let tracker = &self.tracker;
        let internal = tracker.torrent_registry.internal_count() as u64;
        let (seeders, leechers) = tracker.peer_database.totals();
        let (completed, uploaded, downloaded) = tracker.torrent_registry.totals();
        TrackerStats {
            torrents: tracker.known_info_hashes().len() as u64,
            internal_torrents: internal,
            peers: tracker.peer_database.peer_count() as u64 + internal,
            seeders: seeders + internal,
            leechers,
            completed,
            uploaded,
            downloaded,
            counters: tracker.get_stats(),
        }
    }
}

async fn expiry_loop(tracker: Arc<TorrentTracker>, mut rx: watch::Receiver<bool>)
{
    let period = Duration::from_secs((tracker.config.tracker_config.announce_interval / 2).max(1));
    info!("[BOOT] Starting thread for peers cleanup with {} seconds delay...", period.as_secs());
    let mut interval = tokio::time::interval(period);
    interval.tick().await;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let expired = tracker.expire_peers();
                let released = tracker.security.rate_limiter.cleanup(Instant::now());
                if expired > 0 || released > 0 {
                    debug!("[PEERS] Expired {expired} peers, released {released} rate limit entries");
                }
            }
            _ = rx.changed() => {
                info!("[BOOT] Shutting down thread for peers cleanup...");
                return;
            }
        }
    }
}

impl Drop for TrackerServer {
    fn drop(&mut self)
    {
        self.stop();
    }
}

/// Runs `f` on the current thread, or on a scoped thread when a tokio
/// runtime is entered here. Blocking on or shutting down the tracker runtime
/// panics inside another runtime's context. `None` means `f` panicked.
fn outside_runtime<T: Send>(f: impl FnOnce() -> T + Send) -> Option<T>
{
    if Handle::try_current().is_err() {
        return Some(f());
    }
    debug!("[BOOT] Called from inside a tokio runtime, using a separate thread");
    std::thread::scope(|scope| {
        match std::thread::Builder::new().name(String::from("tracker-lifecycle")).spawn_scoped(scope, f) {
            Ok(handle) => handle.join().ok(),
            Err(error) => {
                error!("[BOOT] Unable to spawn lifecycle thread: {error}");
                None
            }
        }
    })
}

fn shutdown_runtime(runtime: Runtime, http_handle: actix_web::dev::ServerHandle, shutdown: watch::Sender<bool>, tasks: Vec<JoinHandle<()>>)
{
    if outside_runtime(move || shutdown_runtime_blocking(runtime, http_handle, shutdown, tasks)).is_none() {
        error!("[BOOT] Tracker shutdown panicked");
    }
}

fn shutdown_runtime_blocking(runtime: Runtime, http_handle: actix_web::dev::ServerHandle, shutdown: watch::Sender<bool>, tasks: Vec<JoinHandle<()>>)
{
    let _ = shutdown.send(true);
    runtime.block_on(async move {
        if tokio::time::timeout(STOP_TIMEOUT, http_handle.stop(true)).await.is_err() {
            warn!("[HTTP] Listener did not stop within {} seconds", STOP_TIMEOUT.as_secs());
        }
        for task in tasks {
            if tokio::time::timeout(STOP_TIMEOUT, task).await.is_err() {
                warn!("[BOOT] Task did not finish within {} seconds", STOP_TIMEOUT.as_secs());
            }
        }
    });
    runtime.shutdown_timeout(STOP_TIMEOUT);
}
