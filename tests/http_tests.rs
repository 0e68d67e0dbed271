mod common;

use actix_web::{test, App};
use actix_web::http::StatusCode;
use std::net::SocketAddr;
use embedded_tracker::http::http::{http_service_cors, http_service_routes, SCRAPE_NOT_SUPPORTED};
use embedded_tracker::tracker::structs::info_hash::InfoHash;
use embedded_tracker::tracker::structs::peer_id::PeerId;

const HASH: InfoHash = InfoHash([0xaa; 20]);

fn peer_addr(last: u8) -> SocketAddr {
    SocketAddr::new(common::v4(10, 0, 0, last), 40000)
}

#[actix_web::test]
async fn test_http_announce_endpoint() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(tracker.clone())),
    )
    .await;

    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&info_hash, &peer_id, 6881, 1000, "&event=started"))
        .peer_addr(peer_addr(1))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;

    assert_eq!(common::bencode_int(&body, b"interval"), Some(1800));
    assert_eq!(common::bencode_int(&body, b"min interval"), Some(900));
    assert_eq!(common::bencode_int(&body, b"complete"), Some(0));
    assert_eq!(common::bencode_int(&body, b"incomplete"), Some(1));
    // The announcing peer never sees itself.
    assert_eq!(common::bencode_bytes(&body, b"peers"), Some(vec![]));
    assert_eq!(tracker.get_stats().http_announces_handled, 1);
}

#[actix_web::test]
async fn test_http_swarm_scenario() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    tracker.torrent_registry.register_torrent(HASH, Some("scenario".to_string()), None, false);
    let seeder = PeerId([0x01; 20]);
    let leecher = PeerId([0x02; 20]);

    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&HASH, &seeder, 6881, 0, "&event=started"))
        .peer_addr(peer_addr(1))
        .to_request();
    test::call_and_read_body(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&HASH, &leecher, 6882, 500, "&event=started"))
        .peer_addr(peer_addr(2))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    // The leecher is handed the seeder in compact form.
    assert_eq!(common::bencode_bytes(&body, b"peers"), Some(vec![10, 0, 0, 1, 0x1a, 0xe1]));

    let req = test::TestRequest::get()
        .uri(&common::scrape_uri(&[HASH]))
        .peer_addr(peer_addr(3))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::scrape_counts(&body, &HASH), Some((1, 0, 1)));

    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&HASH, &seeder, 6881, 0, "&event=stopped"))
        .peer_addr(peer_addr(1))
        .to_request();
    test::call_and_read_body(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&common::scrape_uri(&[HASH]))
        .peer_addr(peer_addr(3))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::scrape_counts(&body, &HASH), Some((0, 0, 1)));
}

#[actix_web::test]
async fn test_http_announce_non_compact() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    let seeder = PeerId(*b"-qB4650-abcdefghijkl");
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&HASH, &seeder, 6881, 0, ""))
        .peer_addr(peer_addr(1))
        .to_request();
    test::call_and_read_body(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&HASH, &common::random_peer_id(), 6882, 10, "&compact=0"))
        .peer_addr(peer_addr(2))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    use bip_bencode::{BDecodeOpt, BDictAccess, BListAccess, BRefAccess, BencodeRef};
    let decoded = BencodeRef::decode(&body, BDecodeOpt::default()).unwrap();
    let peers = decoded.dict().unwrap().lookup(b"peers").unwrap().list().unwrap();
    assert_eq!(peers.len(), 1);
    let peer = peers.get(0).unwrap().dict().unwrap();
    assert_eq!(peer.lookup(b"peer id").unwrap().bytes().unwrap(), &seeder.0[..]);
    assert_eq!(peer.lookup(b"ip").unwrap().bytes().unwrap(), b"10.0.0.1");
    assert_eq!(peer.lookup(b"port").unwrap().int().unwrap(), 6881);
}

#[actix_web::test]
async fn test_http_announce_missing_parameters() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/announce?info_hash={}&port=6881", common::url_encode_bytes(&HASH.0)))
        .peer_addr(peer_addr(1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(common::failure_reason(&body).as_deref(), Some("Missing or invalid parameters"));

    let req = test::TestRequest::get()
        .uri(&format!("/announce?info_hash=short&peer_id={}&port=1&uploaded=0&downloaded=0&left=0", common::url_encode_bytes(&[1u8; 20])))
        .peer_addr(peer_addr(1))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::failure_reason(&body).as_deref(), Some("Missing or invalid parameters"));
    assert_eq!(tracker.get_stats().http_failures, 2);
}

#[actix_web::test]
async fn test_http_private_mode() {
    let mut config = common::create_test_configuration();
    config.tracker_config.private_mode = true;
    let tracker = common::create_test_tracker_with(config);
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    let peer_id = common::random_peer_id();
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&HASH, &peer_id, 6881, 100, ""))
        .peer_addr(peer_addr(1))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::failure_reason(&body).as_deref(), Some("Torrent not registered with this tracker"));

    tracker.torrent_registry.register_torrent(HASH, None, None, false);
    let req = test::TestRequest::get()
        .uri(&common::announce_uri(&HASH, &peer_id, 6881, 100, ""))
        .peer_addr(peer_addr(1))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::failure_reason(&body), None);
    assert_eq!(common::bencode_int(&body, b"incomplete"), Some(1));
}

#[actix_web::test]
async fn test_http_security_rejections() {
    let mut config = common::create_test_configuration();
    config.security.ip_blacklist = vec!["10.0.0.66".to_string()];
    config.security.requests_per_minute = 1;
    let tracker = common::create_test_tracker_with(config);
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&common::scrape_uri(&[HASH]))
        .peer_addr(peer_addr(66))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::failure_reason(&body).as_deref(), Some("IP address not allowed"));

    let req = test::TestRequest::get()
        .uri(&common::scrape_uri(&[HASH]))
        .peer_addr(peer_addr(7))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::failure_reason(&body), None);

    let req = test::TestRequest::get()
        .uri(&common::scrape_uri(&[HASH]))
        .peer_addr(peer_addr(7))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::failure_reason(&body).as_deref(), Some("Rate limit exceeded"));
    assert_eq!(tracker.get_stats().security_rejections, 2);
}

#[actix_web::test]
async fn test_http_scrape_disabled() {
    let mut config = common::create_test_configuration();
    config.tracker_config.scrape_enabled = false;
    let tracker = common::create_test_tracker_with(config);
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&common::scrape_uri(&[HASH]))
        .peer_addr(peer_addr(1))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::failure_reason(&body).as_deref(), Some(SCRAPE_NOT_SUPPORTED));
}

#[actix_web::test]
async fn test_http_scrape_all_known() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    let other = InfoHash([0xbb; 20]);
    tracker.torrent_registry.register_torrent(HASH, None, None, false);
    tracker.torrent_registry.register_torrent(other, None, None, false);

    let req = test::TestRequest::get()
        .uri("/scrape")
        .peer_addr(peer_addr(1))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(common::scrape_counts(&body, &HASH), Some((0, 0, 0)));
    assert_eq!(common::scrape_counts(&body, &other), Some((0, 0, 0)));
}

#[actix_web::test]
async fn test_http_cors_headers() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(tracker.clone())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&common::scrape_uri(&[HASH]))
        .insert_header(("Origin", "http://example.com"))
        .peer_addr(peer_addr(1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}

#[actix_web::test]
async fn test_http_invalid_endpoint() {
    let tracker = common::create_test_tracker();
    let app = test::init_service(
        App::new().configure(http_service_routes(tracker.clone())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/nonexistent")
        .peer_addr(peer_addr(1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(common::failure_reason(&body).as_deref(), Some("unknown request"));
    assert_eq!(tracker.get_stats().http_not_found, 1);
}
