use std::net::Ipv4Addr;
use crate::udp::structs::port::Port;

/// One 6-byte compact peer entry.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ResponsePeer {
    pub ip_address: Ipv4Addr,
    pub port: Port,
}
