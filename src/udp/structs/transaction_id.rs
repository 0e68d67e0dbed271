/// Transaction identifier chosen by the client and echoed back.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TransactionId(pub i32);
