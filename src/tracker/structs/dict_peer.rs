use std::net::IpAddr;
use crate::tracker::structs::peer_id::PeerId;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DictPeer {
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
}
