use std::collections::{BTreeSet, HashMap};
use std::net::IpAddr;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::peer_list::PeerList;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::torrent_stats::TorrentStats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub const DEFAULT_NUMWANT: u64 = 50;
pub const MAX_NUMWANT: u64 = 200;
pub const INVALID_PARAMETERS: &str = "Missing or invalid parameters";

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub fn validate_announce(&self, remote_addr: IpAddr, query: HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceQueryRequest, CustomError>
    {
        fn first<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
            query.get(field).and_then(|values| values.first()).map(|value| value.as_slice())
        }

        fn get_required_bytes<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<&'a [u8], CustomError> {
            first(query, field).ok_or_else(|| CustomError::new(INVALID_PARAMETERS))
        }

        fn parse_integer<T: std::str::FromStr>(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<T, CustomError> {
            let bytes = get_required_bytes(query, field)?;
            std::str::from_utf8(bytes)
                .ok()
                .and_then(|value| value.parse::<T>().ok())
                .ok_or_else(|| CustomError::new(INVALID_PARAMETERS))
        }

        let info_hash = InfoHash::try_from(get_required_bytes(&query, "info_hash")?)
            .map_err(|_| CustomError::new(INVALID_PARAMETERS))?;
        let peer_id = PeerId::try_from(get_required_bytes(&query, "peer_id")?)
            .map_err(|_| CustomError::new(INVALID_PARAMETERS))?;
        let port = parse_integer::<u16>(&query, "port")?;
        let uploaded = parse_integer::<u64>(&query, "uploaded")?;
        let downloaded = parse_integer::<u64>(&query, "downloaded")?;
        let left = parse_integer::<u64>(&query, "left")?;

        let event = first(&query, "event")
            .map(AnnounceEvent::from_query)
            .unwrap_or_default();

        let compact = first(&query, "compact")
            .map(|value| value != b"0")
            .unwrap_or(true);

        let numwant = first(&query, "numwant")
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_NUMWANT);

        let remote_addr = first(&query, "ip")
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(remote_addr);

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            uploaded,
            downloaded,
            left,
            compact,
            event,
            remote_addr,
            numwant: self.clamp_numwant(numwant),
        })
    }

    #[tracing::instrument(level = "debug")]
    pub fn validate_scrape(&self, query: HashMap<String, Vec<Vec<u8>>>) -> Result<ScrapeQueryRequest, CustomError>
    {
        let info_hash = match query.get("info_hash") {
            None => Vec::new(),
            Some(values) => values.iter()
                .map(|value| InfoHash::try_from(value.as_slice()))
                .collect::<Result<Vec<InfoHash>, CustomError>>()
                .map_err(|_| CustomError::new(INVALID_PARAMETERS))?,
        };
        Ok(ScrapeQueryRequest { info_hash })
    }

    /// Caps a requested peer count at the protocol maximum and the configured maximum.
    pub fn clamp_numwant(&self, numwant: u64) -> u64
    {
        numwant.min(MAX_NUMWANT).min(self.config.tracker_config.max_peers_per_announce)
    }

    /// Applies the announce and returns the swarm counts plus peers for the caller.
    #[tracing::instrument(level = "debug")]
    pub fn handle_announce(&self, announce: &AnnounceQueryRequest) -> Result<(TorrentStats, PeerList), TrackerError>
    {
        self.announce_peer(announce, false)?;
        let stats = self.peer_database.get_stats(announce.info_hash);
        let peers = self.peer_database.get_peers(
            announce.info_hash,
            announce.numwant as usize,
            Some(announce.peer_id),
            announce.compact,
        );
        Ok((stats, peers))
    }

    /// Scrape counts per hash, with `downloaded` taken from the registry.
    #[tracing::instrument(level = "debug")]
    pub fn handle_scrape(&self, info_hashes: &[InfoHash]) -> Vec<(InfoHash, TorrentStats)>
    {
        info_hashes.iter().map(|info_hash| {
            let mut stats = self.peer_database.get_stats(*info_hash);
            stats.downloaded = self.torrent_registry.completed(*info_hash);
            (*info_hash, stats)
        }).collect()
    }

    /// Every hash with live peers or a registry entry.
    pub fn known_info_hashes(&self) -> Vec<InfoHash>
    {
        let mut hashes: BTreeSet<InfoHash> = self.peer_database.info_hashes().into_iter().collect();
        hashes.extend(self.torrent_registry.info_hashes());
        hashes.into_iter().collect()
    }
}
