use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub http_announces_handled: i64,
    pub http_scrapes_handled: i64,
    pub http_failures: i64,
    pub http_not_found: i64,
    pub udp_connections_handled: i64,
    pub udp_announces_handled: i64,
    pub udp_scrapes_handled: i64,
    pub udp_errors: i64,
    pub udp_bad_requests: i64,
    pub local_announces_handled: i64,
    pub security_rejections: i64,
    pub peers_expired: i64,
}
