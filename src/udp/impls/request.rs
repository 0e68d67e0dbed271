use std::io;
use std::io::{Cursor, Read, Write};
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::enums::action::Action;
use crate::udp::enums::request::Request;
use crate::udp::enums::request_parse_error::RequestParseError;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::number_of_bytes::NumberOfBytes;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::peer_key::PeerKey;
use crate::udp::structs::port::Port;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{MIN_ANNOUNCE_LEN, MIN_PACKET_LEN, PROTOCOL_IDENTIFIER};

impl From<ConnectRequest> for Request {
    fn from(r: ConnectRequest) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceRequest> for Request {
    fn from(r: AnnounceRequest) -> Self {
        Self::Announce(r)
    }
}

impl From<ScrapeRequest> for Request {
    fn from(r: ScrapeRequest) -> Self {
        Self::Scrape(r)
    }
}

impl Request {
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Request::Connect(r) => r.transaction_id,
            Request::Announce(r) => r.transaction_id,
            Request::Scrape(r) => r.transaction_id,
        }
    }

    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Request::Connect(r) => {
                bytes.write_i64::<NetworkEndian>(PROTOCOL_IDENTIFIER)?;
                bytes.write_i32::<NetworkEndian>(Action::Connect.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
            }

            Request::Announce(r) => {
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_i32::<NetworkEndian>(Action::Announce.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                bytes.write_all(&r.info_hash.0)?;
                bytes.write_all(&r.peer_id.0)?;

                bytes.write_i64::<NetworkEndian>(r.bytes_downloaded.0)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_left.0)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_uploaded.0)?;

                bytes.write_i32::<NetworkEndian>(r.event.to_i32())?;

                bytes.write_all(&r.ip_address.map_or([0; 4], |ip| ip.octets()))?;

                bytes.write_u32::<NetworkEndian>(r.key.0)?;
                bytes.write_i32::<NetworkEndian>(r.peers_wanted.0)?;
                bytes.write_u16::<NetworkEndian>(r.port.0)?;
            }

            Request::Scrape(r) => {
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_i32::<NetworkEndian>(Action::Scrape.to_i32())?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                for info_hash in r.info_hashes {
                    bytes.write_all(&info_hash.0)?;
                }
            }
        }

        Ok(())
    }

    /// Parses one datagram.
    ///
    /// Short packets, a connect without the protocol magic and truncated
    /// announces are `Unsendable`. An unknown action is `Sendable` so the
    /// client gets an "Invalid action" error packet. Scrapes keep at most
    /// `max_scrape_torrents` hashes and may carry none.
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8], max_scrape_torrents: u8) -> Result<Self, RequestParseError> {
        if bytes.len() < MIN_PACKET_LEN {
            return Err(RequestParseError::unsendable_text("Packet too short"));
        }

        let mut cursor = Cursor::new(bytes);
        let connection_id = cursor.read_i64::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;
        let action = cursor.read_i32::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;
        let transaction_id = cursor.read_i32::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;

        match Action::from_i32(action) {
            Some(Action::Connect) => {
                if connection_id != PROTOCOL_IDENTIFIER {
                    return Err(RequestParseError::unsendable_text("Protocol identifier missing"));
                }
                Ok(ConnectRequest {
                    transaction_id: TransactionId(transaction_id),
                }.into())
            }

            Some(Action::Announce) => {
                if bytes.len() < MIN_ANNOUNCE_LEN {
                    return Err(RequestParseError::unsendable_text("Announce too short"));
                }

                let mut info_hash = [0; 20];
                let mut peer_id = [0; 20];
                let mut ip = [0; 4];

                cursor.read_exact(&mut info_hash).map_err(RequestParseError::unsendable_io)?;
                cursor.read_exact(&mut peer_id).map_err(RequestParseError::unsendable_io)?;

                let bytes_downloaded = cursor.read_i64::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;
                let bytes_left = cursor.read_i64::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;
                let bytes_uploaded = cursor.read_i64::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;
                let event = cursor.read_i32::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;

                cursor.read_exact(&mut ip).map_err(RequestParseError::unsendable_io)?;

                let key = cursor.read_u32::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;
                let peers_wanted = cursor.read_i32::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;
                let port = cursor.read_u16::<NetworkEndian>().map_err(RequestParseError::unsendable_io)?;

                let ip_address = if ip == [0; 4] {
                    None
                } else {
                    Some(Ipv4Addr::from(ip))
                };

                Ok(AnnounceRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                    info_hash: InfoHash(info_hash),
                    peer_id: PeerId(peer_id),
                    bytes_downloaded: NumberOfBytes(bytes_downloaded),
                    bytes_uploaded: NumberOfBytes(bytes_uploaded),
                    bytes_left: NumberOfBytes(bytes_left),
                    event: AnnounceEvent::from_i32(event),
                    ip_address,
                    key: PeerKey(key),
                    peers_wanted: NumberOfPeers(peers_wanted),
                    port: Port(port),
                }.into())
            }

            Some(Action::Scrape) => {
                let remaining_bytes = &bytes[MIN_PACKET_LEN..];
                let info_hashes = remaining_bytes
                    .chunks_exact(20)
                    .take(max_scrape_torrents as usize)
                    .filter_map(|chunk| <[u8; 20]>::try_from(chunk).ok())
                    .map(InfoHash)
                    .collect();

                Ok(ScrapeRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                    info_hashes,
                }.into())
            }

            Some(Action::Error) | None => Err(RequestParseError::sendable_text(
                "Invalid action",
                connection_id,
                transaction_id,
            )),
        }
    }
}
