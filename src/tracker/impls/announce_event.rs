use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// BEP-15 event field. Unknown values are treated as a regular announce.
    #[inline]
    pub fn from_i32(i: i32) -> Self {
        match i {
            1 => Self::Completed,
            2 => Self::Started,
            3 => Self::Stopped,
            _ => Self::None,
        }
    }

    #[inline]
    pub fn to_i32(&self) -> i32 {
        *self as i32
    }

    /// BEP-3 `event` query value. Empty or unrecognised values are a regular announce.
    pub fn from_query(value: &[u8]) -> Self {
        match value.to_ascii_lowercase().as_slice() {
            b"started" => Self::Started,
            b"stopped" => Self::Stopped,
            b"completed" => Self::Completed,
            _ => Self::None,
        }
    }
}
