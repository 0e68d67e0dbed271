use std::net::IpAddr;
use std::time::{Duration, Instant};
use log::debug;
use crate::config::structs::security_config::SecurityConfig;
use crate::security::enums::security_rejection::SecurityRejection;
use crate::security::structs::ip_filter::IpFilter;
use crate::security::structs::rate_limiter::RateLimiter;
use crate::security::structs::tracker_security::TrackerSecurity;

impl TrackerSecurity {
    pub fn new(config: &SecurityConfig) -> TrackerSecurity
    {
        TrackerSecurity {
            ip_filter: IpFilter::new(config.ip_whitelist.clone(), config.ip_blacklist.clone()),
            rate_limiter: RateLimiter::new(config.requests_per_minute, Duration::from_secs(config.ban_duration)),
        }
    }

    pub fn check_request(&self, ip: IpAddr) -> Result<(), SecurityRejection>
    {
        self.check_request_at(ip, Instant::now())
    }

    /// Filter first, limiter second; filtered addresses never count against the limit.
    pub fn check_request_at(&self, ip: IpAddr, now: Instant) -> Result<(), SecurityRejection>
    {
        if !self.ip_filter.is_allowed(&ip) {
            debug!("[SECURITY] Rejected {ip}: not allowed");
            return Err(SecurityRejection::IpNotAllowed);
        }
        if !self.rate_limiter.is_allowed_at(ip, now) {
            debug!("[SECURITY] Rejected {ip}: rate limited");
            return Err(SecurityRejection::RateLimited);
        }
        Ok(())
    }
}
