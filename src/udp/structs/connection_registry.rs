use std::net::SocketAddr;
use std::time::{Duration, Instant};
use parking_lot::Mutex;
use crate::tracker::types::ahash_map::AHashMap;
use crate::udp::structs::connection_id::ConnectionId;

/// Connection ids issued by `connect`, one per source address.
#[derive(Debug)]
pub struct ConnectionRegistry {
    pub(crate) connections: Mutex<AHashMap<SocketAddr, (ConnectionId, Instant)>>,
    pub(crate) expiry: Duration,
}
