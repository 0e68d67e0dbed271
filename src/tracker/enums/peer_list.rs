use crate::tracker::structs::dict_peer::DictPeer;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum PeerList {
    /// 6 bytes per IPv4 peer: big-endian address then big-endian port.
    Compact(Vec<u8>),
    Dict(Vec<DictPeer>),
}
