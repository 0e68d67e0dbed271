//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 of the bencoded `info` dictionary of a torrent. Displayed and
/// serialized as a 40 character lowercase hex string.
///
/// # Example
///
/// ```rust
/// use embedded_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0xaa; 20]);
/// assert_eq!(hash.to_string(), "aa".repeat(20));
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
