/// Simple message-carrying error used by query parsing and validation.
pub mod custom_error;
