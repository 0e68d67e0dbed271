use std::net::IpAddr;
use crate::security::security::ip_matches_pattern;
use crate::security::structs::ip_filter::IpFilter;

impl IpFilter {
    pub fn new(allow: Vec<String>, deny: Vec<String>) -> IpFilter
    {
        IpFilter { allow, deny }
    }

    /// Denied addresses are refused even when allow-listed. With an empty
    /// allow list every address that is not denied passes.
    pub fn is_allowed(&self, ip: &IpAddr) -> bool
    {
        let ip = ip.to_string();
        if self.deny.iter().any(|pattern| ip_matches_pattern(&ip, pattern)) {
            return false;
        }
        if self.allow.is_empty() {
            return true;
        }
        self.allow.iter().any(|pattern| ip_matches_pattern(&ip, pattern))
    }
}
