use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrackerConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub announce_interval: u64,
    pub peer_timeout_multiplier: u64,
    pub max_peers_per_announce: u64,
    pub private_mode: bool,
    pub scrape_enabled: bool,
    pub log_announces: bool,
    pub local_peer_ip: String,
}
