/// IpFilter construction and matching.
pub mod ip_filter;

/// RateLimiter window and ban handling.
pub mod rate_limiter;

/// TrackerSecurity admission check.
pub mod tracker_security;
