use core::fmt;

use crate::error::Error;
use crate::pins::{BoardPin, PinRole};
use crate::secret::Secret;

/// Longest SSID an 802.11 beacon can carry
pub const WIFI_SSID_MAX_LEN: usize = 32;
/// WPA2 passphrase is 8..=63 characters, a raw PSK is 64 hex digits
pub const WIFI_PASSWORD_MIN_LEN: usize = 8;
pub const WIFI_PASSWORD_MAX_LEN: usize = 64;
/// Longest fully qualified DNS name
pub const MQTT_SERVER_MAX_LEN: usize = 253;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WifiConfig {
    // Wi-Fi SSID to connect to
    pub ssid: &'static str,

    // Wi-Fi passphrase, empty for an open network
    pub password: Secret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MqttConfig {
    // MQTT broker hostname or IP address
    pub server: &'static str,

    // MQTT port (usually 1883)
    pub port: u16,

    // MQTT username, empty for an anonymous broker
    pub user: &'static str,

    // MQTT password for authentication
    pub password: Secret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtaConfig {
    // Password required by the over-the-air update handler
    pub password: Secret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    // DS18B20 temperature sensor data line
    pub one_wire_bus: BoardPin,

    // ESP module LED
    pub led_blue: BoardPin,

    // NodeMCU board LED
    pub led_red: BoardPin,

    // Fairylights output
    pub fairylights: BoardPin,
}

impl PinConfig {
    pub const fn assignments(&self) -> [(PinRole, BoardPin); 4] {
        [
            (PinRole::OneWireBus, self.one_wire_bus),
            (PinRole::LedBlue, self.led_blue),
            (PinRole::LedRed, self.led_red),
            (PinRole::Fairylights, self.fairylights),
        ]
    }

    /// Every role must drive its own physical pin.
    pub const fn validate(&self) -> Result<(), Error> {
        let pins = self.assignments();
        let mut i = 0;
        while i < pins.len() {
            let mut j = i + 1;
            while j < pins.len() {
                if pins[i].1.gpio() == pins[j].1.gpio() {
                    return Err(Error::DuplicatePin(pins[i].0, pins[j].0));
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }
}

impl WifiConfig {
    pub const fn validate(&self) -> Result<(), Error> {
        if self.ssid.is_empty() {
            return Err(Error::EmptyWifiSsid);
        }
        if self.ssid.len() > WIFI_SSID_MAX_LEN {
            return Err(Error::WifiSsidTooLong);
        }
        let password_len = self.password.len();
        if password_len != 0
            && (password_len < WIFI_PASSWORD_MIN_LEN || password_len > WIFI_PASSWORD_MAX_LEN)
        {
            return Err(Error::InvalidWifiPasswordLength);
        }
        if password_len == WIFI_PASSWORD_MAX_LEN {
            let bytes = self.password.expose().as_bytes();
            let mut i = 0;
            while i < bytes.len() {
                if !bytes[i].is_ascii_hexdigit() {
                    return Err(Error::WifiPskNotHex);
                }
                i += 1;
            }
        }
        Ok(())
    }
}

impl MqttConfig {
    pub const fn validate(&self) -> Result<(), Error> {
        if self.server.is_empty() {
            return Err(Error::EmptyMqttServer);
        }
        if self.server.len() > MQTT_SERVER_MAX_LEN {
            return Err(Error::MqttServerTooLong);
        }
        if self.port == 0 {
            return Err(Error::InvalidMqttPort);
        }
        if self.user.is_empty() && !self.password.is_empty() {
            return Err(Error::MqttPasswordWithoutUser);
        }
        Ok(())
    }
}

impl OtaConfig {
    /// Updates are only accepted with a password.
    pub const fn validate(&self) -> Result<(), Error> {
        if self.password.is_empty() {
            return Err(Error::EmptyOtaPassword);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub wifi: WifiConfig,
    pub mqtt: MqttConfig,
    pub ota: OtaConfig,
    pub pins: PinConfig,
}

impl Config {
    pub const fn validate(&self) -> Result<(), Error> {
        if let Err(e) = self.wifi.validate() {
            return Err(e);
        }
        if let Err(e) = self.mqtt.validate() {
            return Err(e);
        }
        if let Err(e) = self.ota.validate() {
            return Err(e);
        }
        self.pins.validate()
    }

    /// Logs the active configuration with every credential redacted.
    pub fn log_summary(&self) {
        log::info!("Configuration: {}", self);
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wifi ssid={:?} password={} mqtt={}@{}:{} password={} ota password={} pins",
            self.wifi.ssid,
            self.wifi.password,
            self.mqtt.user,
            self.mqtt.server,
            self.mqtt.port,
            self.mqtt.password,
            self.ota.password,
        )?;
        for (role, pin) in self.pins.assignments() {
            write!(f, " {}={}", role, pin)?;
        }
        Ok(())
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

// reject a bad cfg.toml at build time rather than on the device
const _: () = match CONFIG.validate() {
    Ok(()) => (),
    Err(e) => panic!("{}", e.as_str()),
};
