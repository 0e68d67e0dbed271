use thiserror::Error;
use crate::security::enums::security_rejection::SecurityRejection;
use crate::tracker::enums::tracker_error::TrackerError;

/// Protocol-state errors answered with an action 3 packet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    #[error("Invalid connection ID")]
    InvalidConnectionId,
    #[error("Invalid action")]
    InvalidAction,
    #[error("{0}")]
    Rejected(#[from] SecurityRejection),
    #[error("{0}")]
    Tracker(#[from] TrackerError),
}
