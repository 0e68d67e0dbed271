use crate::tracker::structs::info_hash::InfoHash;

/// Hashes to scrape; empty means every known torrent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeQueryRequest {
    pub info_hash: Vec<InfoHash>,
}
