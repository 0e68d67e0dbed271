/// Configuration loading, saving, defaults and validation.
pub mod configuration;
