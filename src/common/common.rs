use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub const MAX_QUERY_STRING_LENGTH: usize = 8192;

/// Splits a raw query string into percent-decoded byte values per key.
///
/// Keys are lowercased; repeated keys keep every value in order, which is
/// how multi-hash scrapes arrive. Values stay raw bytes because `info_hash`
/// and `peer_id` are binary.
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, CustomError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return Ok(queries);
    };
    if raw_query.len() > MAX_QUERY_STRING_LENGTH {
        return Err(CustomError::new("query string too long"));
    }

    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None),
        };
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let entry = queries.entry(key_name).or_default();
        if let Some(value) = value_data_raw {
            let value_data = percent_encoding::percent_decode_str(value).collect::<Vec<u8>>();
            entry.push(value_data);
        }
    }

    Ok(queries)
}

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    binascii::bin2hex(data, &mut chars).map_err(|_| fmt::Error)?;
    let hex = std::str::from_utf8(&chars).map_err(|_| fmt::Error)?;
    write!(f, "{hex}")
}

#[inline]
pub(crate) fn hex_to_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0xFF,
    }
}

/// Decodes a 40 character hex string into 20 bytes.
pub(crate) fn hex2bin20(s: &[u8]) -> Option<[u8; 20]> {
    if s.len() != 40 {
        return None;
    }
    let mut result = [0u8; 20];
    for (i, chunk) in s.chunks_exact(2).enumerate() {
        let high = hex_to_nibble(chunk[0]);
        let low = hex_to_nibble(chunk[1]);
        if high == 0xFF || low == 0xFF {
            return None;
        }
        result[i] = (high << 4) | low;
    }
    Some(result)
}

/// Unix timestamp in seconds.
pub fn current_time() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn log_level_filter(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = log_level_filter(config.log_level.as_str()).unwrap_or(log::LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("actix_server", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
    {
        eprintln!("Failed to initialize logging: {err}");
        return;
    }
    info!("logging initialized.");
}
