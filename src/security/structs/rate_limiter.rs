use std::net::IpAddr;
use std::time::Duration;
use parking_lot::Mutex;
use crate::security::structs::rate_limit_entry::RateLimitEntry;
use crate::tracker::types::ahash_map::AHashMap;

#[derive(Debug)]
pub struct RateLimiter {
    pub(crate) requests_per_minute: u32,
    pub(crate) ban_duration: Duration,
    pub(crate) entries: Mutex<AHashMap<IpAddr, RateLimitEntry>>,
}
