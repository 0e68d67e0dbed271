//! UDP tracker protocol implementation (BEP 15).
//!
//! # Protocol Overview
//!
//! The UDP tracker protocol uses a connection-oriented approach:
//! 1. Client sends a connect request carrying the protocol magic
//! 2. Server responds with a random connection ID bound to the client address
//! 3. Client uses connection ID for announce/scrape requests for up to 120 s
//!
//! # Message Types
//!
//! - **Connect** (action=0): Establish connection, get connection ID
//! - **Announce** (action=1): Register peer, get compact IPv4 peer list
//! - **Scrape** (action=2): Query torrent statistics
//! - **Error** (action=3): Error response
//!
//! Datagrams that cannot be decoded (too short, missing magic, truncated
//! announce) are dropped without a reply.

/// Enumerations for UDP protocol actions and errors.
pub mod enums;

/// Implementation blocks for UDP packet handling.
pub mod impls;

/// Data structures for UDP protocol messages.
pub mod structs;

/// Core UDP service implementation.
#[allow(clippy::module_inception)]
pub mod udp;
