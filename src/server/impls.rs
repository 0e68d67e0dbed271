/// Start, stop and the programmatic API.
pub mod tracker_server;

/// Debug formatting for the running state.
pub mod running_server;

/// Started, periodic and stopped announces from inside the process.
pub mod local_announcer;
