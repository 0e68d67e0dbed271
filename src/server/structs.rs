/// Orchestrator owning the tracker state and its listeners.
pub mod tracker_server;

/// Runtime and handles held while the server is started.
pub mod running_server;

/// Aggregated counts returned by `TrackerServer::get_stats`.
pub mod tracker_stats;

/// In-process announce path.
pub mod local_announcer;
