use crate::security::structs::ip_filter::IpFilter;
use crate::security::structs::rate_limiter::RateLimiter;

#[derive(Debug)]
pub struct TrackerSecurity {
    pub ip_filter: IpFilter,
    pub rate_limiter: RateLimiter,
}
