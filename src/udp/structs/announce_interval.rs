/// Seconds a client should wait between announces.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct AnnounceInterval(pub i32);
