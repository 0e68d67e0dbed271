use std::borrow::Cow;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;

/// Why a datagram could not be parsed.
///
/// `Sendable` errors carry enough of the header to address an error packet
/// back to the client; `Unsendable` ones are dropped without a reply.
#[derive(Debug)]
pub enum RequestParseError {
    Sendable {
        connection_id: ConnectionId,
        transaction_id: TransactionId,
        err: Cow<'static, str>,
    },
    Unsendable {
        err: Cow<'static, str>,
    },
}
