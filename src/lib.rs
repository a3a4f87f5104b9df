//! Build-time configuration for the fairylights temperature node.
//!
//! Values come from `cfg.toml` (see `cfg.toml.example`) and are baked into the
//! binary as constants. Credentials can be left out of the file and supplied
//! through the `WIFI_PASSWORD`, `MQTT_PASSWORD` and `OTA_PASSWORD` build
//! environment variables instead.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod error;
pub mod pins;
pub mod secret;

#[cfg(test)]
#[path = "../build/raw_config.rs"]
mod raw_config;

pub use config::{Config, MqttConfig, OtaConfig, PinConfig, WifiConfig, CONFIG};
pub use error::Error;
pub use pins::{BoardPin, ParsePinError, PinRole};
pub use secret::Secret;
