use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct UdpTrackersConfig {
    pub enabled: bool,
    pub port: u16,
    pub receive_timeout_ms: u64,
}
