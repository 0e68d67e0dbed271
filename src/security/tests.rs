#![allow(clippy::module_inception)]

#[cfg(test)]
mod security_tests {
    use std::net::IpAddr;
    use std::time::{Duration, Instant};
    use crate::config::structs::security_config::SecurityConfig;
    use crate::security::enums::security_rejection::SecurityRejection;
    use crate::security::security::ip_matches_pattern;
    use crate::security::structs::ip_filter::IpFilter;
    use crate::security::structs::rate_limiter::RateLimiter;
    use crate::security::structs::tracker_security::TrackerSecurity;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_pattern_exact() {
        assert!(ip_matches_pattern("192.168.1.10", "192.168.1.10"));
        assert!(!ip_matches_pattern("192.168.1.100", "192.168.1.10"));
    }

    #[test]
    fn test_pattern_wildcard() {
        assert!(ip_matches_pattern("192.168.1.10", "192.168.*"));
        assert!(!ip_matches_pattern("192.169.1.10", "192.168.*"));
    }

    #[test]
    fn test_pattern_network_prefix() {
        assert!(ip_matches_pattern("10.1.2.3", "10.0.0.0/8"));
        assert!(ip_matches_pattern("172.16.5.4", "172.16.0.0/16"));
        assert!(!ip_matches_pattern("100.1.2.3", "10.0.0.0/8"));
        assert!(!ip_matches_pattern("172.17.5.4", "172.16.0.0/16"));
    }

    #[test]
    fn test_filter_without_lists_allows_all() {
        let filter = IpFilter::default();
        assert!(filter.is_allowed(&ip("8.8.8.8")));
        assert!(filter.is_allowed(&ip("::1")));
    }

    #[test]
    fn test_filter_allow_list() {
        let filter = IpFilter::new(vec![String::from("192.168.*")], vec![]);
        assert!(filter.is_allowed(&ip("192.168.0.5")));
        assert!(!filter.is_allowed(&ip("10.0.0.5")));
    }

    #[test]
    fn test_filter_deny_beats_allow() {
        let filter = IpFilter::new(
            vec![String::from("192.168.1.10")],
            vec![String::from("192.168.1.10")],
        );
        assert!(!filter.is_allowed(&ip("192.168.1.10")));
    }

    #[test]
    fn test_rate_limiter_bans_after_limit() {
        let limiter = RateLimiter::new(3, Duration::from_secs(300));
        let client = ip("1.2.3.4");
        let start = Instant::now();

        assert!(limiter.is_allowed_at(client, start));
        assert!(limiter.is_allowed_at(client, start + Duration::from_secs(1)));
        assert!(limiter.is_allowed_at(client, start + Duration::from_secs(2)));
        assert!(!limiter.is_allowed_at(client, start + Duration::from_secs(3)));
        assert!(limiter.is_banned(client));

        // Still banned even once the window has rolled over.
        assert!(!limiter.is_allowed_at(client, start + Duration::from_secs(120)));
        assert!(limiter.is_allowed_at(client, start + Duration::from_secs(304)));
    }

    #[test]
    fn test_rate_limiter_is_per_ip() {
        let limiter = RateLimiter::new(1, Duration::from_secs(300));
        let now = Instant::now();
        assert!(limiter.is_allowed_at(ip("1.1.1.1"), now));
        assert!(!limiter.is_allowed_at(ip("1.1.1.1"), now));
        assert!(limiter.is_allowed_at(ip("2.2.2.2"), now));
    }

    #[test]
    fn test_rate_limiter_window_slides() {
        let limiter = RateLimiter::new(2, Duration::from_secs(300));
        let client = ip("1.2.3.4");
        let start = Instant::now();
        assert!(limiter.is_allowed_at(client, start));
        assert!(limiter.is_allowed_at(client, start + Duration::from_secs(30)));
        assert!(limiter.is_allowed_at(client, start + Duration::from_secs(61)));
    }

    #[test]
    fn test_rate_limiter_disabled() {
        let limiter = RateLimiter::new(0, Duration::from_secs(300));
        let now = Instant::now();
        for _ in 0..1000 {
            assert!(limiter.is_allowed_at(ip("1.2.3.4"), now));
        }
        assert_eq!(limiter.tracked_ips(), 0);
    }

    #[test]
    fn test_rate_limiter_cleanup() {
        let limiter = RateLimiter::new(5, Duration::from_secs(300));
        let start = Instant::now();
        limiter.is_allowed_at(ip("1.2.3.4"), start);
        limiter.is_allowed_at(ip("5.6.7.8"), start + Duration::from_secs(50));
        assert_eq!(limiter.cleanup(start + Duration::from_secs(90)), 1);
        assert_eq!(limiter.tracked_ips(), 1);
    }

    #[test]
    fn test_check_request_reasons() {
        let config = SecurityConfig {
            ip_whitelist: vec![],
            ip_blacklist: vec![String::from("6.6.6.*")],
            requests_per_minute: 1,
            ban_duration: 60,
        };
        let security = TrackerSecurity::new(&config);
        let now = Instant::now();

        let denied = security.check_request_at(ip("6.6.6.6"), now).unwrap_err();
        assert_eq!(denied, SecurityRejection::IpNotAllowed);
        assert_eq!(denied.to_string(), "IP address not allowed");

        assert!(security.check_request_at(ip("7.7.7.7"), now).is_ok());
        let limited = security.check_request_at(ip("7.7.7.7"), now).unwrap_err();
        assert_eq!(limited.to_string(), "Rate limit exceeded");
    }
}
