use std::fs::File;
use std::io::Write;
use std::net::IpAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::common::log_level_filter;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::security_config::SecurityConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;

pub const IP_PATTERN_REGEX: &str = r"^[0-9A-Fa-f:.]+(\*|/[0-9]{1,3})?$";

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            enabled: true,
            bind_address: String::from("0.0.0.0"),
            announce_interval: 1800,
            peer_timeout_multiplier: 2,
            max_peers_per_announce: 200,
            private_mode: false,
            scrape_enabled: true,
            log_announces: false,
            local_peer_ip: String::from("127.0.0.1"),
        }
    }
}

impl Default for HttpTrackersConfig {
    fn default() -> Self {
        HttpTrackersConfig {
            port: 6969,
            threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(2),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
        }
    }
}

impl Default for UdpTrackersConfig {
    fn default() -> Self {
        UdpTrackersConfig {
            enabled: true,
            port: 6969,
            receive_timeout_ms: 1000,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        SecurityConfig {
            ip_whitelist: vec![],
            ip_blacklist: vec![],
            requests_per_minute: 120,
            ban_duration: 300,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig::default(),
            http_server: HttpTrackersConfig::default(),
            udp_server: UdpTrackersConfig::default(),
            security: SecurityConfig::default(),
        }
    }

    /// Seconds after which a silent peer is dropped.
    pub fn peer_timeout(&self) -> u64 {
        self.tracker_config.announce_interval.saturating_mul(self.tracker_config.peer_timeout_multiplier)
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if log_level_filter(self.log_level.as_str()).is_none() {
            return Err(Self::invalid("log_level", &self.log_level));
        }
        if self.tracker_config.bind_address.parse::<IpAddr>().is_err() {
            return Err(Self::invalid("tracker_config.bind_address", &self.tracker_config.bind_address));
        }
        if self.tracker_config.local_peer_ip.parse::<IpAddr>().is_err() {
            return Err(Self::invalid("tracker_config.local_peer_ip", &self.tracker_config.local_peer_ip));
        }
        if self.tracker_config.announce_interval == 0 {
            return Err(Self::invalid("tracker_config.announce_interval", "0"));
        }
        if self.tracker_config.peer_timeout_multiplier == 0 {
            return Err(Self::invalid("tracker_config.peer_timeout_multiplier", "0"));
        }

        let check_map = self.security.ip_whitelist.iter()
            .map(|pattern| ("[SECURITY] ip_whitelist", pattern))
            .chain(self.security.ip_blacklist.iter().map(|pattern| ("[SECURITY] ip_blacklist", pattern)));
        for (name, value) in check_map {
            Self::validate_value(name, value, IP_PATTERN_REGEX)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|_| Self::invalid(name, regex))?;
        if !regex_check.is_match(value) {
            return Err(Self::invalid(name, value));
        }
        Ok(())
    }

    fn invalid(name: &str, value: &str) -> ConfigurationError {
        ConfigurationError::ValidationError {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
