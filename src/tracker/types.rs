/// `HashMap` using the aHash hasher, used for the peer and torrent maps.
pub mod ahash_map;
