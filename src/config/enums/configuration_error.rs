use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("[VALIDATE CONFIG] Error checking {name} [:] Value: \"{value}\"")]
    ValidationError {
        name: String,
        value: String,
    },
}
