#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;

    #[test]
    fn test_update_increments_and_decrements() {
        let stats = StatsAtomics::new();
        stats.update(StatsEvent::HttpAnnouncesHandled, 3);
        stats.update(StatsEvent::HttpAnnouncesHandled, -1);
        stats.update(StatsEvent::UdpErrors, 1);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.http_announces_handled, 2);
        assert_eq!(snapshot.udp_errors, 1);
        assert_eq!(snapshot.udp_announces_handled, 0);
        assert!(snapshot.started > 0);
    }

    #[test]
    fn test_set_overrides_counter() {
        let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
        tracker.update_stats(StatsEvent::PeersExpired, 10);
        let stats = tracker.set_stats(StatsEvent::PeersExpired, 4);
        assert_eq!(stats.peers_expired, 4);
    }

    #[test]
    fn test_concurrent_updates() {
        let stats = Arc::new(StatsAtomics::new());
        let handles: Vec<_> = (0..8).map(|_| {
            let stats = stats.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    stats.update(StatsEvent::UdpConnectionsHandled, 1);
                }
            })
        }).collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.snapshot().udp_connections_handled, 8000);
    }
}
