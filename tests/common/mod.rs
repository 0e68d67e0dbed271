#![allow(dead_code)]
use rand::RngExt;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use bip_bencode::{BDecodeOpt, BencodeRef};
use tempfile::TempDir;
use embedded_tracker::config::structs::configuration::Configuration;
use embedded_tracker::server::structs::tracker_server::TrackerServer;
use embedded_tracker::tracker::structs::info_hash::InfoHash;
use embedded_tracker::tracker::structs::peer_id::PeerId;
use embedded_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

/// Loopback-only configuration with ephemeral ports and rate limiting off.
pub fn create_test_configuration() -> Configuration {
    let mut config: Configuration = Configuration::init();
    config.tracker_config.bind_address = "127.0.0.1".to_string();
    config.http_server.port = 0;
    config.http_server.threads = 1;
    config.udp_server.port = 0;
    config.udp_server.receive_timeout_ms = 100;
    config.security.requests_per_minute = 0;
    config
}

pub fn create_test_config() -> TestConfig {
    Arc::new(create_test_configuration())
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::new(create_test_config()))
}

pub fn create_test_tracker_with(config: Configuration) -> TestTracker {
    Arc::new(TorrentTracker::new(Arc::new(config)))
}

pub fn create_test_server(config: Configuration) -> Arc<TrackerServer> {
    Arc::new(TrackerServer::new(Arc::new(config)))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

pub fn v4(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(a, b, c, d))
}

/// Percent-encodes every byte, as clients do for binary query values.
pub fn url_encode_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("%{byte:02X}")).collect()
}

pub fn announce_uri(info_hash: &InfoHash, peer_id: &PeerId, port: u16, left: u64, extra: &str) -> String {
    format!(
        "/announce?info_hash={}&peer_id={}&port={port}&uploaded=0&downloaded=0&left={left}{extra}",
        url_encode_bytes(&info_hash.0),
        url_encode_bytes(&peer_id.0)
    )
}

pub fn scrape_uri(info_hashes: &[InfoHash]) -> String {
    let query: Vec<String> = info_hashes.iter()
        .map(|info_hash| format!("info_hash={}", url_encode_bytes(&info_hash.0)))
        .collect();
    format!("/scrape?{}", query.join("&"))
}

/// Decodes a bencoded dictionary and returns the integer stored under `key`.
pub fn bencode_int(body: &[u8], key: &[u8]) -> Option<i64> {
    use bip_bencode::{BDictAccess, BRefAccess};
    let decoded = BencodeRef::decode(body, BDecodeOpt::default()).ok()?;
    decoded.dict()?.lookup(key)?.int()
}

/// Decodes a bencoded dictionary and returns the bytes stored under `key`.
pub fn bencode_bytes(body: &[u8], key: &[u8]) -> Option<Vec<u8>> {
    use bip_bencode::{BDictAccess, BRefAccess};
    let decoded = BencodeRef::decode(body, BDecodeOpt::default()).ok()?;
    decoded.dict()?.lookup(key)?.bytes().map(|bytes| bytes.to_vec())
}

pub fn failure_reason(body: &[u8]) -> Option<String> {
    bencode_bytes(body, b"failure reason").map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// `(complete, downloaded, incomplete)` for one hash of a scrape response.
pub fn scrape_counts(body: &[u8], info_hash: &InfoHash) -> Option<(i64, i64, i64)> {
    use bip_bencode::{BDictAccess, BRefAccess};
    let decoded = BencodeRef::decode(body, BDecodeOpt::default()).ok()?;
    let files = decoded.dict()?.lookup(b"files")?;
    let entry = files.dict()?.lookup(&info_hash.0)?;
    let entry = entry.dict()?;
    Some((
        entry.lookup(b"complete")?.int()?,
        entry.lookup(b"downloaded")?.int()?,
        entry.lookup(b"incomplete")?.int()?,
    ))
}
