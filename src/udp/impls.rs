pub mod action;
pub mod connection_registry;
pub mod request;
pub mod request_parse_error;
pub mod response;
pub mod udp_server;
