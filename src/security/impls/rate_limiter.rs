use std::net::IpAddr;
use std::time::{Duration, Instant};
use log::warn;
use parking_lot::Mutex;
use crate::security::security::RATE_LIMIT_WINDOW;
use crate::security::structs::rate_limiter::RateLimiter;
use crate::tracker::types::ahash_map::AHashMap;

impl RateLimiter {
    pub fn new(requests_per_minute: u32, ban_duration: Duration) -> RateLimiter
    {
        RateLimiter {
            requests_per_minute,
            ban_duration,
            entries: Mutex::new(AHashMap::default()),
        }
    }

    pub fn is_allowed(&self, ip: IpAddr) -> bool
    {
        self.is_allowed_at(ip, Instant::now())
    }

    /// Records a request from `ip` at `now` and reports whether it may proceed.
    ///
    /// Reaching the per-minute limit bans the address for the ban duration.
    /// A limit of zero disables the limiter.
    #[tracing::instrument(level = "debug")]
    pub fn is_allowed_at(&self, ip: IpAddr, now: Instant) -> bool
    {
        if self.requests_per_minute == 0 {
            return true;
        }

        let mut lock = self.entries.lock();
        let entry = lock.entry(ip).or_default();

        if let Some(banned_until) = entry.banned_until {
            if now < banned_until {
                return false;
            }
            entry.banned_until = None;
            entry.requests.clear();
        }

        while let Some(oldest) = entry.requests.front() {
            if now.saturating_duration_since(*oldest) >= RATE_LIMIT_WINDOW {
                entry.requests.pop_front();
            } else {
                break;
            }
        }

        if entry.requests.len() >= self.requests_per_minute as usize {
            entry.banned_until = Some(now + self.ban_duration);
            warn!("[SECURITY] {ip} exceeded {} requests per minute, banned for {}s", self.requests_per_minute, self.ban_duration.as_secs());
            return false;
        }

        entry.requests.push_back(now);
        true
    }

    pub fn is_banned(&self, ip: IpAddr) -> bool
    {
        let now = Instant::now();
        self.entries.lock().get(&ip)
            .and_then(|entry| entry.banned_until)
            .is_some_and(|banned_until| now < banned_until)
    }

    /// Drops entries with no active ban and no request inside the window.
    pub fn cleanup(&self, now: Instant) -> usize
    {
        let mut lock = self.entries.lock();
        let before = lock.len();
        lock.retain(|_, entry| {
            let banned = entry.banned_until.is_some_and(|banned_until| now < banned_until);
            let recent = entry.requests.back()
                .is_some_and(|last| now.saturating_duration_since(*last) < RATE_LIMIT_WINDOW);
            banned || recent
        });
        before - lock.len()
    }

    pub fn tracked_ips(&self) -> usize
    {
        self.entries.lock().len()
    }
}
