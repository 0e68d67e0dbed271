mod common;

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, UdpSocket};
use std::time::Duration;
use embedded_tracker::server::structs::local_announcer::LocalAnnouncer;
use embedded_tracker::tracker::structs::info_hash::InfoHash;
use embedded_tracker::tracker::structs::peer_id::PeerId;
use embedded_tracker::udp::enums::request::Request;
use embedded_tracker::udp::enums::response::Response;
use embedded_tracker::udp::structs::connect_request::ConnectRequest;
use embedded_tracker::udp::structs::scrape_request::ScrapeRequest;
use embedded_tracker::udp::structs::transaction_id::TransactionId;
use embedded_tracker::udp::udp::MAX_PACKET_SIZE;

const HASH: InfoHash = InfoHash([0xaa; 20]);

/// Sends one GET and returns the status code and body.
fn http_get(addr: SocketAddr, path: &str) -> (u16, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    write!(stream, "GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n").unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();

    let split = response.windows(4).position(|window| window == b"\r\n\r\n").unwrap();
    let head = String::from_utf8_lossy(&response[..split]).into_owned();
    let status = head.split_whitespace().nth(1).unwrap().parse().unwrap();
    (status, response[split + 4..].to_vec())
}

fn udp_exchange(socket: &UdpSocket, server: SocketAddr, request: Request) -> Response {
    let mut packet = Vec::new();
    request.write(&mut packet).unwrap();
    socket.send_to(&packet, server).unwrap();
    let mut buffer = [0u8; MAX_PACKET_SIZE];
    let (len, _) = socket.recv_from(&mut buffer).unwrap();
    Response::from_bytes(&buffer[..len]).unwrap()
}

#[test]
fn test_server_serves_http_and_udp() {
    let server = common::create_test_server(common::create_test_configuration());
    assert!(server.start());
    let http_addr = server.http_local_addr().unwrap();
    let udp_addr = server.udp_local_addr().unwrap();

    let seeder = PeerId([0x01; 20]);
    let (status, body) = http_get(http_addr, &common::announce_uri(&HASH, &seeder, 6881, 0, "&event=started"));
    assert_eq!(status, 200);
    assert_eq!(common::bencode_int(&body, b"complete"), Some(1));

    let (status, body) = http_get(http_addr, &common::scrape_uri(&[HASH]));
    assert_eq!(status, 200);
    assert_eq!(common::scrape_counts(&body, &HASH), Some((1, 0, 0)));

    let client = UdpSocket::bind("127.0.0.1:0").unwrap();
    client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    let connection_id = match udp_exchange(&client, udp_addr, Request::from(ConnectRequest { transaction_id: TransactionId(9) })) {
        Response::Connect(response) => response.connection_id,
        other => panic!("expected connect response, got {other:?}"),
    };
    let scrape = Request::from(ScrapeRequest {
        connection_id,
        transaction_id: TransactionId(10),
        info_hashes: vec![HASH],
    });
    match udp_exchange(&client, udp_addr, scrape) {
        Response::Scrape(response) => assert_eq!(response.torrent_stats[0].seeders.0, 1),
        other => panic!("expected scrape response, got {other:?}"),
    }

    let (status, _) = http_get(http_addr, "/stats");
    assert_eq!(status, 404);

    server.stop();
    assert!(!server.is_running());
    assert!(server.http_local_addr().is_none());
}

#[test]
fn test_server_local_announce_visible_over_http() {
    let mut config = common::create_test_configuration();
    config.udp_server.enabled = false;
    config.tracker_config.private_mode = true;
    let server = common::create_test_server(config);
    assert!(server.start());
    let http_addr = server.http_local_addr().unwrap();

    server.register_torrent(HASH, Some("local.iso".to_string()), Some(1 << 20), true);
    let announcer = LocalAnnouncer::new(server.clone());
    assert!(announcer.announce_started(HASH, PeerId(*b"-ET0300-local-seeder"), 51413, 0, 0, 0));

    let leecher = common::random_peer_id();
    let (_, body) = http_get(http_addr, &common::announce_uri(&HASH, &leecher, 6881, 1000, ""));
    assert_eq!(common::failure_reason(&body), None);
    assert_eq!(common::bencode_bytes(&body, b"peers"), Some(vec![127, 0, 0, 1, 0xc8, 0xd5]));

    // Unregistered torrents stay rejected in private mode.
    let (_, body) = http_get(http_addr, &common::announce_uri(&InfoHash([0xbb; 20]), &leecher, 6881, 1000, ""));
    assert_eq!(common::failure_reason(&body).as_deref(), Some("Torrent not registered with this tracker"));

    let stats = server.get_stats();
    assert_eq!(stats.internal_torrents, 1);
    assert_eq!(stats.leechers, 1);
    assert_eq!(stats.counters.local_announces_handled, 1);

    server.stop();
    assert!(!announcer.announce_stopped(HASH, PeerId(*b"-ET0300-local-seeder"), 51413, 0, 0, 0));
}

#[test]
fn test_server_restart_after_stop() {
    let mut config = common::create_test_configuration();
    config.udp_server.enabled = false;
    let server = common::create_test_server(config);

    assert!(server.start());
    server.stop();
    assert!(server.start());
    let (status, _) = http_get(server.http_local_addr().unwrap(), "/scrape");
    assert_eq!(status, 200);
    server.stop();
}
