#[cfg(test)]
mod server_tests {
    use std::net::{IpAddr, Ipv4Addr, TcpListener, UdpSocket};
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::server::structs::local_announcer::LocalAnnouncer;
    use crate::server::structs::tracker_server::TrackerServer;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::enums::tracker_error::TrackerError;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;

    const HASH: InfoHash = InfoHash([0xaa; 20]);
    const LOCAL_PEER: PeerId = PeerId([0x11; 20]);

    fn test_config() -> Configuration {
        let mut config = Configuration::init();
        config.tracker_config.bind_address = String::from("127.0.0.1");
        config.http_server.port = 0;
        config.http_server.threads = 1;
        config.udp_server.port = 0;
        config.udp_server.receive_timeout_ms = 100;
        config
    }

    fn server_with(config: Configuration) -> Arc<TrackerServer> {
        Arc::new(TrackerServer::new(Arc::new(config)))
    }

    #[test]
    fn test_start_and_stop() {
        let server = server_with(test_config());
        assert!(!server.is_running());

        assert!(server.start());
        assert!(server.is_running());
        let http_addr = server.http_local_addr().unwrap();
        assert_ne!(http_addr.port(), 0);
        assert!(server.udp_local_addr().is_some());

        // Starting twice keeps the running instance.
        assert!(server.start());
        assert_eq!(server.http_local_addr(), Some(http_addr));

        server.stop();
        assert!(!server.is_running());
        assert!(server.http_local_addr().is_none());
        server.stop();
    }

    #[test]
    fn test_start_without_udp() {
        let mut config = test_config();
        config.udp_server.enabled = false;
        let server = server_with(config);
        assert!(server.start());
        assert!(server.udp_local_addr().is_none());
        server.stop();
    }

    #[test]
    fn test_start_disabled_returns_false() {
        let mut config = test_config();
        config.tracker_config.enabled = false;
        let server = server_with(config);
        assert!(!server.start());
        assert!(!server.is_running());
    }

    #[test]
    fn test_start_fails_when_http_port_taken() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let mut config = test_config();
        config.http_server.port = listener.local_addr().unwrap().port();
        let server = server_with(config);

        assert!(!server.start());
        assert!(!server.is_running());
        assert!(server.http_local_addr().is_none());
    }

    #[test]
    fn test_start_fails_when_udp_port_taken() {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut config = test_config();
        config.udp_server.port = socket.local_addr().unwrap().port();
        let server = server_with(config);

        assert!(!server.start());
        assert!(!server.is_running());
        assert!(server.http_local_addr().is_none());
    }

    #[test]
    fn test_announce_peer_when_disabled() {
        let mut config = test_config();
        config.tracker_config.enabled = false;
        let server = server_with(config);
        let result = server.announce_peer(HASH, LOCAL_PEER, IpAddr::V4(Ipv4Addr::LOCALHOST), 6881, 0, 0, 0, AnnounceEvent::Started, false);
        assert_eq!(result, Err(TrackerError::TrackerDisabled));
    }

    #[test]
    fn test_announce_peer_private_mode() {
        let mut config = test_config();
        config.tracker_config.private_mode = true;
        let server = server_with(config);
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

        let result = server.announce_peer(HASH, LOCAL_PEER, ip, 6881, 0, 0, 100, AnnounceEvent::Started, false);
        assert_eq!(result, Err(TrackerError::TorrentNotRegistered));

        server.register_torrent(HASH, Some(String::from("debian.iso")), Some(1024), false);
        assert!(server.announce_peer(HASH, LOCAL_PEER, ip, 6881, 0, 0, 100, AnnounceEvent::Started, false).is_ok());
        assert_eq!(server.get_stats().leechers, 1);
    }

    #[test]
    fn test_unregister_drops_peers() {
        let server = server_with(test_config());
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        server.announce_peer(HASH, LOCAL_PEER, ip, 6881, 0, 0, 0, AnnounceEvent::Started, false).unwrap();
        assert_eq!(server.get_stats().peers, 1);

        assert!(server.unregister_torrent(HASH));
        let stats = server.get_stats();
        assert_eq!(stats.peers, 0);
        assert_eq!(stats.torrents, 0);
        assert!(!server.unregister_torrent(HASH));
    }

    #[test]
    fn test_get_stats_adds_internal_seeders() {
        let server = server_with(test_config());
        server.register_torrent(HASH, None, None, true);
        server.register_torrent(InfoHash([0xbb; 20]), None, None, false);
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));
        server.announce_peer(InfoHash([0xbb; 20]), PeerId([0x22; 20]), ip, 6881, 0, 0, 500, AnnounceEvent::Started, false).unwrap();

        let stats = server.get_stats();
        assert_eq!(stats.torrents, 2);
        assert_eq!(stats.internal_torrents, 1);
        assert_eq!(stats.seeders, 1);
        assert_eq!(stats.leechers, 1);
        assert_eq!(stats.peers, 2);
    }

    #[test]
    fn test_local_announcer_requires_running() {
        let server = server_with(test_config());
        let announcer = LocalAnnouncer::new(server.clone());
        assert!(!announcer.announce_started(HASH, LOCAL_PEER, 6881, 0, 0, 0));
        assert_eq!(server.get_stats().peers, 0);
    }

    #[test]
    fn test_local_announcer_lifecycle() {
        let mut config = test_config();
        config.udp_server.enabled = false;
        let server = server_with(config);
        assert!(server.start());
        let announcer = LocalAnnouncer::new(server.clone());

        assert!(announcer.announce_started(HASH, LOCAL_PEER, 6881, 0, 0, 0));
        let peer = server.tracker.peer_database.get_peer(HASH, LOCAL_PEER).unwrap();
        assert!(peer.is_internal);
        assert_eq!(peer.ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(server.tracker.torrent_registry.get_torrent(HASH).unwrap().is_internal);

        assert!(announcer.announce_periodic(HASH, LOCAL_PEER, 6881, 4096, 0, 0));
        assert_eq!(server.tracker.torrent_registry.get_torrent(HASH).unwrap().uploaded, 4096);

        assert!(announcer.announce_stopped(HASH, LOCAL_PEER, 6881, 4096, 0, 0));
        assert!(server.tracker.peer_database.get_peer(HASH, LOCAL_PEER).is_none());
        assert_eq!(server.get_stats().counters.local_announces_handled, 3);

        server.stop();
        assert!(!announcer.announce_periodic(HASH, LOCAL_PEER, 6881, 4096, 0, 0));
    }

    #[test]
    fn test_local_announcer_rejects_bad_local_ip() {
        let mut config = test_config();
        config.udp_server.enabled = false;
        config.tracker_config.local_peer_ip = String::from("not-an-ip");
        let server = server_with(config);
        assert!(server.start());
        let announcer = LocalAnnouncer::new(server.clone());
        assert!(!announcer.announce_started(HASH, LOCAL_PEER, 6881, 0, 0, 0));
        server.stop();
    }

    #[test]
    fn test_current_server_accessor() {
        let server = server_with(test_config());
        TrackerServer::set_current(server.clone());
        let current = TrackerServer::current().unwrap();
        assert!(Arc::ptr_eq(&current, &server));
        assert!(LocalAnnouncer::from_current().is_some());

        TrackerServer::clear_current();
        assert!(TrackerServer::current().is_none());
        assert!(LocalAnnouncer::from_current().is_none());
    }

    #[tokio::test]
    async fn test_start_and_stop_inside_runtime() {
        let server = server_with(test_config());
        assert!(server.start());
        assert!(server.is_running());
        assert!(server.http_local_addr().is_some());
        assert!(server.udp_local_addr().is_some());

        server.stop();
        assert!(!server.is_running());
        assert!(server.http_local_addr().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_start_failure_inside_runtime_returns_false() {
        let mut config = test_config();
        config.tracker_config.enabled = false;
        assert!(!server_with(config).start());

        let taken = TcpListener::bind((IpAddr::V4(Ipv4Addr::LOCALHOST), 0)).unwrap();
        let mut config = test_config();
        config.http_server.port = taken.local_addr().unwrap().port();
        let server = server_with(config);
        assert!(!server.start());
        assert!(!server.is_running());
    }

    #[tokio::test]
    async fn test_drop_running_server_inside_runtime() {
        let server = server_with(test_config());
        assert!(server.start());
        drop(server);
    }
}
