//! # Embedded BitTorrent Tracker
//!
//! A BitTorrent tracker meant to run inside another process, typically next
//! to a seeding engine, built with Rust, Actix-web and Tokio.
//!
//! ## Overview
//!
//! The tracker serves the HTTP announce/scrape protocol and the UDP tracker
//! protocol from one in-memory swarm state. A seeding engine in the same
//! process announces its own torrents through `LocalAnnouncer`, which goes
//! straight to the stores instead of over a socket.
//!
//! ## Features
//!
//! - **Multi-Protocol Support**: HTTP and UDP tracker protocols
//! - **In-Process Announces**: no socket round-trip for the local seeder
//! - **Private Mode**: only explicitly registered torrents are tracked
//! - **Security**: IP allow/deny lists and a per-IP sliding window rate limiter
//! - **Monitoring**: atomic counters and an aggregated stats snapshot
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 15: UDP Tracker Protocol
//! - BEP 23: Tracker Returns Compact Peer Lists
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use embedded_tracker::config::structs::configuration::Configuration;
//! use embedded_tracker::server::structs::tracker_server::TrackerServer;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let server = Arc::new(TrackerServer::new(Arc::new(config)));
//! server.start();
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, hex helpers, logging setup and the shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker protocol implementation
//! - [`security`] - IP filtering and rate limiting
//! - [`server`] - Server lifecycle and the in-process announcer
//! - [`stats`] - Atomic statistics counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Peer database, torrent registry and announce handling
//! - [`udp`] - UDP tracker protocol implementation (BEP 15)

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, hex conversion, logging
/// setup and error handling used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and writing the TOML configuration.
pub mod config;

/// HTTP tracker protocol implementation.
///
/// Handles announce and scrape requests over HTTP according to the
/// BitTorrent tracker protocol, answering in bencode.
pub mod http;

/// Admission control for incoming requests.
///
/// IP allow/deny lists with wildcard and prefix patterns, and a per-IP
/// sliding window rate limiter with temporary bans.
pub mod security;

/// Tracker server orchestration.
///
/// Starts and stops the HTTP listener, the UDP listener and the expiry loop,
/// and exposes the programmatic API and the in-process announcer.
pub mod server;

/// Statistics tracking module.
///
/// Counts announces, scrapes, failures, rejections and expired peers per
/// protocol.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the peer database, the torrent registry and the announce/scrape
/// request handling shared by every protocol.
pub mod tracker;

/// UDP tracker protocol implementation (BEP 15).
///
/// Implements the connect, announce and scrape actions with connection ids
/// bound to the client address.
pub mod udp;
