//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Counter selector used with `TorrentTracker::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    HttpAnnouncesHandled,
    HttpScrapesHandled,
    HttpFailures,
    HttpNotFound,
    UdpConnectionsHandled,
    UdpAnnouncesHandled,
    UdpScrapesHandled,
    UdpErrors,
    UdpBadRequests,
    LocalAnnouncesHandled,
    SecurityRejections,
    PeersExpired,
}
