use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct RateLimitEntry {
    pub(crate) requests: VecDeque<Instant>,
    pub(crate) banned_until: Option<Instant>,
}
