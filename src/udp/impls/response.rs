use std::io;
use std::io::{Cursor, Write};
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::udp::enums::action::Action;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::number_of_downloads::NumberOfDownloads;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::port::Port;
use crate::udp::structs::response_peer::ResponsePeer;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceResponse> for Response {
    fn from(r: AnnounceResponse) -> Self {
        Self::Announce(r)
    }
}

impl From<ScrapeResponse> for Response {
    fn from(r: ScrapeResponse) -> Self {
        Self::Scrape(r)
    }
}

impl From<ErrorResponse> for Response {
    fn from(r: ErrorResponse) -> Self {
        Self::Error(r)
    }
}

impl Response {
    #[tracing::instrument(skip(bytes), level = "debug")]
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Response::Connect(r) => {
                bytes.write_i32::<NetworkEndian>(Action::Connect.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::Announce(r) => {
                bytes.write_i32::<NetworkEndian>(Action::Announce.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i32::<NetworkEndian>(r.announce_interval.0)?;
                bytes.write_i32::<NetworkEndian>(r.leechers.0)?;
                bytes.write_i32::<NetworkEndian>(r.seeders.0)?;

                if !r.peers.is_empty() {
                    let mut peer_buffer = Vec::with_capacity(r.peers.len() * 6);
                    for peer in &r.peers {
                        peer_buffer.extend_from_slice(&peer.ip_address.octets());
                        peer_buffer.write_u16::<NetworkEndian>(peer.port.0)?;
                    }
                    bytes.write_all(&peer_buffer)?;
                }
            }
            Response::Scrape(r) => {
                bytes.write_i32::<NetworkEndian>(Action::Scrape.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                if !r.torrent_stats.is_empty() {
                    let mut stats_buffer = Vec::with_capacity(r.torrent_stats.len() * 12);
                    for torrent_stat in &r.torrent_stats {
                        stats_buffer.write_i32::<NetworkEndian>(torrent_stat.seeders.0)?;
                        stats_buffer.write_i32::<NetworkEndian>(torrent_stat.completed.0)?;
                        stats_buffer.write_i32::<NetworkEndian>(torrent_stat.leechers.0)?;
                    }
                    bytes.write_all(&stats_buffer)?;
                }
            }
            Response::Error(r) => {
                bytes.write_i32::<NetworkEndian>(Action::Error.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_all(r.message.as_bytes())?;
            }
        }

        Ok(())
    }

    /// Decodes a reply as a client would. Announce peers are read as IPv4.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        let mut cursor = Cursor::new(bytes);

        let action = cursor.read_i32::<NetworkEndian>()?;
        let transaction_id = TransactionId(cursor.read_i32::<NetworkEndian>()?);

        match Action::from_i32(action) {
            Some(Action::Connect) => {
                let connection_id = cursor.read_i64::<NetworkEndian>()?;
                Ok(ConnectResponse {
                    connection_id: ConnectionId(connection_id),
                    transaction_id,
                }.into())
            }
            Some(Action::Announce) => {
                let announce_interval = cursor.read_i32::<NetworkEndian>()?;
                let leechers = cursor.read_i32::<NetworkEndian>()?;
                let seeders = cursor.read_i32::<NetworkEndian>()?;

                let position = cursor.position() as usize;
                let mut peers = Vec::new();
                for chunk in bytes[position..].chunks_exact(6) {
                    peers.push(ResponsePeer {
                        ip_address: Ipv4Addr::new(chunk[0], chunk[1], chunk[2], chunk[3]),
                        port: Port(u16::from_be_bytes([chunk[4], chunk[5]])),
                    });
                }

                Ok(AnnounceResponse {
                    transaction_id,
                    announce_interval: AnnounceInterval(announce_interval),
                    leechers: NumberOfPeers(leechers),
                    seeders: NumberOfPeers(seeders),
                    peers,
                }.into())
            }
            Some(Action::Scrape) => {
                let position = cursor.position() as usize;
                let mut torrent_stats = Vec::new();
                for chunk in bytes[position..].chunks_exact(12) {
                    let mut chunk_cursor = Cursor::new(chunk);
                    torrent_stats.push(TorrentScrapeStatistics {
                        seeders: NumberOfPeers(chunk_cursor.read_i32::<NetworkEndian>()?),
                        completed: NumberOfDownloads(chunk_cursor.read_i32::<NetworkEndian>()?),
                        leechers: NumberOfPeers(chunk_cursor.read_i32::<NetworkEndian>()?),
                    });
                }

                Ok(ScrapeResponse {
                    transaction_id,
                    torrent_stats,
                }.into())
            }
            Some(Action::Error) => {
                let position = cursor.position() as usize;
                let message = String::from_utf8_lossy(&bytes[position..]).into_owned();
                Ok(ErrorResponse {
                    transaction_id,
                    message: message.into(),
                }.into())
            }
            None => Err(io::Error::new(io::ErrorKind::InvalidData, "Invalid action")),
        }
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Response::Connect(_) => 16,
            Response::Announce(r) => 20 + (r.peers.len() * 6),
            Response::Scrape(r) => 8 + (r.torrent_stats.len() * 12),
            Response::Error(r) => 8 + r.message.len(),
        }
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}
