/// Reason a request was refused admission.
pub mod security_rejection;
