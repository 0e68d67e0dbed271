use std::time::Duration;

pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

/// Matches an address string against one filter pattern.
///
/// Supported patterns: an exact address, a `a.b.*` prefix, and a network in
/// `a.b.0.0/16` form. Networks are matched on the textual prefix left after
/// stripping trailing `.0` octets; the prefix length itself is ignored.
pub fn ip_matches_pattern(ip: &str, pattern: &str) -> bool {
    if ip == pattern {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix('*') {
        return ip.starts_with(prefix);
    }
    if let Some((network, _)) = pattern.split_once('/') {
        let mut network = network;
        while let Some(stripped) = network.strip_suffix(".0") {
            network = stripped;
        }
        if network.is_empty() {
            return false;
        }
        return ip.starts_with(&format!("{network}.")) || ip == network;
    }
    false
}
