use std::net::SocketAddr;
use std::time::{Duration, Instant};
use log::debug;
use parking_lot::Mutex;
use rand::RngExt;
use crate::tracker::types::ahash_map::AHashMap;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::connection_registry::ConnectionRegistry;

impl ConnectionRegistry {
    pub fn new(expiry: Duration) -> ConnectionRegistry
    {
        ConnectionRegistry {
            connections: Mutex::new(AHashMap::default()),
            expiry,
        }
    }

    pub fn issue(&self, remote_addr: SocketAddr) -> ConnectionId
    {
        self.issue_at(remote_addr, Instant::now())
    }

    /// Hands out a fresh random id for `remote_addr`, replacing any earlier one.
    pub fn issue_at(&self, remote_addr: SocketAddr, now: Instant) -> ConnectionId
    {
        let connection_id = ConnectionId(rand::rng().random());
        self.connections.lock().insert(remote_addr, (connection_id, now));
        connection_id
    }

    pub fn validate(&self, remote_addr: SocketAddr, connection_id: ConnectionId) -> bool
    {
        self.validate_at(remote_addr, connection_id, Instant::now())
    }

    /// True when `connection_id` is the one issued to `remote_addr` and younger than the expiry.
    pub fn validate_at(&self, remote_addr: SocketAddr, connection_id: ConnectionId, now: Instant) -> bool
    {
        match self.connections.lock().get(&remote_addr) {
            Some((issued, at)) => *issued == connection_id && now.saturating_duration_since(*at) <= self.expiry,
            None => false,
        }
    }

    pub fn sweep(&self, now: Instant) -> usize
    {
        let mut lock = self.connections.lock();
        let before = lock.len();
        lock.retain(|_, (_, at)| now.saturating_duration_since(*at) <= self.expiry);
        let removed = before - lock.len();
        if removed > 0 {
            debug!("[UDP] Swept {removed} expired connection ids");
        }
        removed
    }

    pub fn len(&self) -> usize
    {
        self.connections.lock().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.connections.lock().is_empty()
    }
}
