use crate::tracker::enums::peer_list::PeerList;

impl PeerList {
    /// Number of peers in the list.
    pub fn len(&self) -> usize {
        match self {
            PeerList::Compact(bytes) => bytes.len() / 6,
            PeerList::Dict(peers) => peers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
