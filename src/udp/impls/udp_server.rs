use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, info};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::time::MissedTickBehavior;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::peer_list::PeerList;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::udp::enums::request::Request;
use crate::udp::enums::request_parse_error::RequestParseError;
use crate::udp::enums::response::Response;
use crate::udp::enums::server_error::ServerError;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_registry::ConnectionRegistry;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::number_of_downloads::NumberOfDownloads;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::port::Port;
use crate::udp::structs::response_peer::ResponsePeer;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::udp::{CONNECTION_EXPIRY, DEFAULT_NUMWANT, MAX_NUMWANT, MAX_PACKET_SIZE, MAX_SCRAPE_TORRENTS};

fn saturating_i32(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl UdpServer {
    #[tracing::instrument(level = "debug")]
    pub async fn new(tracker: Arc<TorrentTracker>, bind_address: SocketAddr) -> tokio::io::Result<UdpServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        socket.bind(&bind_address.into())?;
        socket.set_nonblocking(true)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let receive_timeout = Duration::from_millis(tracker.config.udp_server.receive_timeout_ms.max(1));
        Ok(UdpServer {
            socket: Arc::new(tokio_socket),
            tracker,
            connections: Arc::new(ConnectionRegistry::new(CONNECTION_EXPIRY)),
            receive_timeout,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.socket.local_addr()
    }

    /// Receive loop: one datagram at a time, sweeping expired connection ids
    /// on every receive-timeout tick, until `rx` fires.
    #[tracing::instrument(level = "debug")]
    pub async fn start(&self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let mut data = [0; MAX_PACKET_SIZE];
        let mut sweep = tokio::time::interval(self.receive_timeout);
        sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[UDP] Stopping server listener...");
                    break;
                }
                _ = sweep.tick() => {
                    self.connections.sweep(Instant::now());
                }
                result = self.socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            let payload = &data[..valid_bytes];
                            debug!("[UDP] Received {} bytes from {remote_addr}", payload.len());
                            if let Some(response) = UdpServer::handle_packet(remote_addr, payload, self.tracker.clone(), self.connections.clone()).await {
                                UdpServer::send_response(self.socket.clone(), remote_addr, response).await;
                            }
                        }
                        Err(error) => {
                            debug!("[UDP] recv_from error: {error}");
                        }
                    }
                }
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn send_response(socket: Arc<UdpSocket>, remote_addr: SocketAddr, response: Response)
    {
        match response.write_to_vec() {
            Ok(buffer) => {
                if let Err(error) = socket.send_to(&buffer, remote_addr).await {
                    debug!("[UDP] Could not send response to {remote_addr}: {error}");
                }
            }
            Err(error) => {
                debug!("[UDP] Could not write response to bytes: {error}");
            }
        }
    }

    /// Turns one datagram into at most one reply.
    ///
    /// Undecodable datagrams get no reply. Everything else is checked against
    /// the security policy before it is dispatched, and any failure becomes
    /// an error packet carrying the reason.
    #[tracing::instrument(skip(payload), level = "debug")]
    pub async fn handle_packet(remote_addr: SocketAddr, payload: &[u8], tracker: Arc<TorrentTracker>, connections: Arc<ConnectionRegistry>) -> Option<Response>
    {
        let parsed = Request::from_bytes(payload, MAX_SCRAPE_TORRENTS);
        let transaction_id = match &parsed {
            Ok(request) => request.transaction_id(),
            Err(RequestParseError::Sendable { transaction_id, .. }) => *transaction_id,
            Err(RequestParseError::Unsendable { err }) => {
                debug!("[UDP] Dropped datagram from {remote_addr}: {err}");
                tracker.update_stats(StatsEvent::UdpBadRequests, 1);
                return None;
            }
        };

        if let Err(rejection) = tracker.security.check_request(remote_addr.ip()) {
            tracker.update_stats(StatsEvent::SecurityRejections, 1);
            return Some(UdpServer::handle_udp_error(ServerError::from(rejection), transaction_id).await);
        }

        let result = match parsed {
            Ok(request) => UdpServer::handle_request(request, remote_addr, tracker.clone(), connections).await,
            Err(_) => Err(ServerError::InvalidAction),
        };

        match result {
            Ok(response) => Some(response),
            Err(error) => {
                debug!("[UDP ERROR] {remote_addr}: {error}");
                tracker.update_stats(StatsEvent::UdpErrors, 1);
                Some(UdpServer::handle_udp_error(error, transaction_id).await)
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn handle_request(request: Request, remote_addr: SocketAddr, tracker: Arc<TorrentTracker>, connections: Arc<ConnectionRegistry>) -> Result<Response, ServerError>
    {
        match request {
            Request::Connect(connect_request) => {
                UdpServer::handle_udp_connect(remote_addr, &connect_request, tracker, connections).await
            }
            Request::Announce(announce_request) => {
                UdpServer::handle_udp_announce(remote_addr, &announce_request, tracker, connections).await
            }
            Request::Scrape(scrape_request) => {
                UdpServer::handle_udp_scrape(remote_addr, &scrape_request, tracker, connections).await
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn handle_udp_connect(remote_addr: SocketAddr, request: &ConnectRequest, tracker: Arc<TorrentTracker>, connections: Arc<ConnectionRegistry>) -> Result<Response, ServerError>
    {
        let connection_id = connections.issue(remote_addr);
        tracker.update_stats(StatsEvent::UdpConnectionsHandled, 1);
        Ok(Response::from(ConnectResponse {
            transaction_id: request.transaction_id,
            connection_id,
        }))
    }

    #[tracing::instrument(level = "debug")]
    pub async fn handle_udp_announce(remote_addr: SocketAddr, request: &AnnounceRequest, tracker: Arc<TorrentTracker>, connections: Arc<ConnectionRegistry>) -> Result<Response, ServerError>
    {
        if !connections.validate(remote_addr, request.connection_id) {
            return Err(ServerError::InvalidConnectionId);
        }

        let numwant = if request.peers_wanted.0 < 0 {
            DEFAULT_NUMWANT
        } else {
            request.peers_wanted.0.min(MAX_NUMWANT)
        };

        let announce = AnnounceQueryRequest {
            info_hash: request.info_hash,
            peer_id: request.peer_id,
            port: request.port.0,
            uploaded: request.bytes_uploaded.0.max(0) as u64,
            downloaded: request.bytes_downloaded.0.max(0) as u64,
            left: request.bytes_left.0.max(0) as u64,
            compact: true,
            event: request.event,
            remote_addr: request.ip_address.map(IpAddr::V4).unwrap_or(remote_addr.ip()),
            numwant: tracker.clamp_numwant(numwant as u64),
        };

        let (stats, peer_list) = tracker.handle_announce(&announce)?;
        let peers = match peer_list {
            PeerList::Compact(bytes) => bytes.chunks_exact(6).map(|chunk| ResponsePeer {
                ip_address: [chunk[0], chunk[1], chunk[2], chunk[3]].into(),
                port: Port(u16::from_be_bytes([chunk[4], chunk[5]])),
            }).collect(),
            PeerList::Dict(_) => Vec::new(),
        };

        tracker.update_stats(StatsEvent::UdpAnnouncesHandled, 1);
        Ok(Response::from(AnnounceResponse {
            transaction_id: request.transaction_id,
            announce_interval: AnnounceInterval(saturating_i32(tracker.config.tracker_config.announce_interval)),
            leechers: NumberOfPeers(saturating_i32(stats.incomplete)),
            seeders: NumberOfPeers(saturating_i32(stats.complete)),
            peers,
        }))
    }

    #[tracing::instrument(level = "debug")]
    pub async fn handle_udp_scrape(remote_addr: SocketAddr, request: &ScrapeRequest, tracker: Arc<TorrentTracker>, connections: Arc<ConnectionRegistry>) -> Result<Response, ServerError>
    {
        if !connections.validate(remote_addr, request.connection_id) {
            return Err(ServerError::InvalidConnectionId);
        }

        let torrent_stats = tracker.handle_scrape(&request.info_hashes)
            .into_iter()
            .map(|(_, stats)| TorrentScrapeStatistics {
                seeders: NumberOfPeers(saturating_i32(stats.complete)),
                completed: NumberOfDownloads(saturating_i32(stats.downloaded)),
                leechers: NumberOfPeers(saturating_i32(stats.incomplete)),
            })
            .collect();

        tracker.update_stats(StatsEvent::UdpScrapesHandled, 1);
        Ok(Response::from(ScrapeResponse {
            transaction_id: request.transaction_id,
            torrent_stats,
        }))
    }

    #[tracing::instrument(level = "debug")]
    pub async fn handle_udp_error(e: ServerError, transaction_id: TransactionId) -> Response
    {
        Response::from(ErrorResponse {
            transaction_id,
            message: e.to_string().into(),
        })
    }
}
