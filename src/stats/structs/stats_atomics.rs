use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub http_announces_handled: AtomicI64,
    pub http_scrapes_handled: AtomicI64,
    pub http_failures: AtomicI64,
    pub http_not_found: AtomicI64,
    pub udp_connections_handled: AtomicI64,
    pub udp_announces_handled: AtomicI64,
    pub udp_scrapes_handled: AtomicI64,
    pub udp_errors: AtomicI64,
    pub udp_bad_requests: AtomicI64,
    pub local_announces_handled: AtomicI64,
    pub security_rejections: AtomicI64,
    pub peers_expired: AtomicI64,
}
