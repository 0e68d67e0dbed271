use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityRejection {
    #[error("IP address not allowed")]
    IpNotAllowed,
    #[error("Rate limit exceeded")]
    RateLimited,
}
