/// Allow/deny list filter.
pub mod ip_filter;

/// Per-IP sliding window limiter.
pub mod rate_limiter;

/// Window and ban state for one IP.
pub mod rate_limit_entry;

/// Filter and limiter combined.
pub mod tracker_security;
