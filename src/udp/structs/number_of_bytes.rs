/// Byte counter as sent on the wire; signed per BEP 15.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct NumberOfBytes(pub i64);
