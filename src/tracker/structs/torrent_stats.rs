use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct TorrentStats {
    pub complete: u64,
    pub incomplete: u64,
    pub downloaded: u64,
}
