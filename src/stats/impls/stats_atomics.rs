use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            http_announces_handled: AtomicI64::new(0),
            http_scrapes_handled: AtomicI64::new(0),
            http_failures: AtomicI64::new(0),
            http_not_found: AtomicI64::new(0),
            udp_connections_handled: AtomicI64::new(0),
            udp_announces_handled: AtomicI64::new(0),
            udp_scrapes_handled: AtomicI64::new(0),
            udp_errors: AtomicI64::new(0),
            udp_bad_requests: AtomicI64::new(0),
            local_announces_handled: AtomicI64::new(0),
            security_rejections: AtomicI64::new(0),
            peers_expired: AtomicI64::new(0),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::HttpAnnouncesHandled => &self.http_announces_handled,
            StatsEvent::HttpScrapesHandled => &self.http_scrapes_handled,
            StatsEvent::HttpFailures => &self.http_failures,
            StatsEvent::HttpNotFound => &self.http_not_found,
            StatsEvent::UdpConnectionsHandled => &self.udp_connections_handled,
            StatsEvent::UdpAnnouncesHandled => &self.udp_announces_handled,
            StatsEvent::UdpScrapesHandled => &self.udp_scrapes_handled,
            StatsEvent::UdpErrors => &self.udp_errors,
            StatsEvent::UdpBadRequests => &self.udp_bad_requests,
            StatsEvent::LocalAnnouncesHandled => &self.local_announces_handled,
            StatsEvent::SecurityRejections => &self.security_rejections,
            StatsEvent::PeersExpired => &self.peers_expired,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            http_announces_handled: self.http_announces_handled.load(Ordering::SeqCst),
            http_scrapes_handled: self.http_scrapes_handled.load(Ordering::SeqCst),
            http_failures: self.http_failures.load(Ordering::SeqCst),
            http_not_found: self.http_not_found.load(Ordering::SeqCst),
            udp_connections_handled: self.udp_connections_handled.load(Ordering::SeqCst),
            udp_announces_handled: self.udp_announces_handled.load(Ordering::SeqCst),
            udp_scrapes_handled: self.udp_scrapes_handled.load(Ordering::SeqCst),
            udp_errors: self.udp_errors.load(Ordering::SeqCst),
            udp_bad_requests: self.udp_bad_requests.load(Ordering::SeqCst),
            local_announces_handled: self.local_announces_handled.load(Ordering::SeqCst),
            security_rejections: self.security_rejections.load(Ordering::SeqCst),
            peers_expired: self.peers_expired.load(Ordering::SeqCst),
        }
    }
}
