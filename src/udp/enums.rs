pub mod action;
pub mod request;
pub mod request_parse_error;
pub mod response;
pub mod server_error;
