use std::fmt;
use std::fmt::Formatter;
use crate::common::common::{bin2hex, hex2bin20};
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl PeerId {
    /// Azureus-style client prefix such as `qB4650` from `-qB4650-`, when present.
    pub fn client_prefix(&self) -> Option<&str> {
        if self.0[0] == b'-' && self.0[7] == b'-' {
            return std::str::from_utf8(&self.0[1..7]).ok();
        }
        None
    }
}

impl std::str::FromStr for PeerId {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(binascii::ConvertError::InvalidInputLength);
        }
        let mut result = PeerId([0u8; 20]);
        binascii::hex2bin(s.as_bytes(), &mut result.0)?;
        Ok(result)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = CustomError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 20]>::try_from(data)
            .map(PeerId)
            .map_err(|_| CustomError::new("peer_id must be 20 bytes"))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct PeerIdVisitor;

        impl<'de> serde::de::Visitor<'de> for PeerIdVisitor {
            type Value = PeerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                hex2bin20(v.as_bytes())
                    .map(PeerId)
                    .ok_or_else(|| E::custom("expected a 40 character hex string"))
            }
        }
        des.deserialize_str(PeerIdVisitor)
    }
}
