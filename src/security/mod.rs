//! Admission policy for incoming tracker requests.
//!
//! Every HTTP request and UDP datagram passes `TrackerSecurity::check_request`
//! before it touches tracker state:
//!
//! 1. `IpFilter` - deny list first (always wins), then the allow list if set
//! 2. `RateLimiter` - rolling 60 second window per IP, with a temporary ban
//!    once the per-minute limit is reached
//!
//! State lives in memory only and is not persisted.

/// Enumerations for rejected requests.
pub mod enums;

/// IP pattern matching and window constants.
#[allow(clippy::module_inception)]
pub mod security;

/// Data structures for the filter and the limiter.
pub mod structs;

/// Implementation blocks for the filter and the limiter.
pub mod impls;

/// Unit tests for the admission policy.
pub mod tests;
