use core::fmt;

use crate::pins::PinRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    EmptyWifiSsid,
    WifiSsidTooLong,
    InvalidWifiPasswordLength,
    WifiPskNotHex,
    EmptyMqttServer,
    MqttServerTooLong,
    InvalidMqttPort,
    MqttPasswordWithoutUser,
    EmptyOtaPassword,
    DuplicatePin(PinRole, PinRole),
}

impl Error {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Error::EmptyWifiSsid => "wifi ssid is empty",
            Error::WifiSsidTooLong => "wifi ssid is longer than 32 bytes",
            Error::InvalidWifiPasswordLength => {
                "wifi password must be empty or between 8 and 64 bytes"
            }
            Error::WifiPskNotHex => "a 64 byte wifi password must be a hex encoded PSK",
            Error::EmptyMqttServer => "mqtt server is empty",
            Error::MqttServerTooLong => "mqtt server is longer than 253 bytes",
            Error::InvalidMqttPort => "mqtt port must be between 1 and 65535",
            Error::MqttPasswordWithoutUser => "mqtt password is set but mqtt user is empty",
            Error::EmptyOtaPassword => "ota password is empty",
            Error::DuplicatePin(a, b) => match (*a, *b) {
                (PinRole::OneWireBus, PinRole::LedBlue) => {
                    "pins one_wire_bus and led_blue share the same board pin"
                }
                (PinRole::OneWireBus, PinRole::LedRed) => {
                    "pins one_wire_bus and led_red share the same board pin"
                }
                (PinRole::OneWireBus, PinRole::Fairylights) => {
                    "pins one_wire_bus and fairylights share the same board pin"
                }
                (PinRole::LedBlue, PinRole::LedRed) => {
                    "pins led_blue and led_red share the same board pin"
                }
                (PinRole::LedBlue, PinRole::Fairylights) => {
                    "pins led_blue and fairylights share the same board pin"
                }
                (PinRole::LedRed, PinRole::Fairylights) => {
                    "pins led_red and fairylights share the same board pin"
                }
                _ => "two pin roles are assigned to the same board pin",
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicatePin(a, b) => write!(f, "pins {a} and {b} share the same board pin"),
            other => f.write_str(other.as_str()),
        }
    }
}
