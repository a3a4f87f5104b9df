use crate::config::CONFIG;
use crate::pins::BoardPin;
use crate::secret::Secret;

/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Wifi
pub const WIFI_SSID: &str = CONFIG.wifi.ssid;
pub const WIFI_PASSWORD: Secret = CONFIG.wifi.password;

// MQTT
pub const MQTT_SERVER: &str = CONFIG.mqtt.server;
pub const MQTT_PORT: u16 = CONFIG.mqtt.port;
pub const MQTT_USER: &str = CONFIG.mqtt.user;
pub const MQTT_PASSWORD: Secret = CONFIG.mqtt.password;

// OTA
pub const OTA_PASSWORD: Secret = CONFIG.ota.password;

// Pins
/// DS18B20 pin
pub const ONE_WIRE_BUS: BoardPin = CONFIG.pins.one_wire_bus;
/// ESP Led
pub const LED_BLUE: BoardPin = CONFIG.pins.led_blue;
/// NodeMCU Led
pub const LED_RED: BoardPin = CONFIG.pins.led_red;
/// Fairylights pin
pub const FAIRYLIGHTS: BoardPin = CONFIG.pins.fairylights;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_mirror_config() {
        assert_eq!(WIFI_SSID, CONFIG.wifi.ssid);
        assert_eq!(MQTT_SERVER, CONFIG.mqtt.server);
        assert_eq!(MQTT_PORT, CONFIG.mqtt.port);
        assert_eq!(MQTT_USER, CONFIG.mqtt.user);
        assert_eq!(WIFI_PASSWORD, CONFIG.wifi.password);
        assert_eq!(MQTT_PASSWORD, CONFIG.mqtt.password);
        assert_eq!(OTA_PASSWORD, CONFIG.ota.password);
    }

    #[test]
    fn required_values_are_present() {
        assert!(!WIFI_SSID.is_empty());
        assert!(!MQTT_SERVER.is_empty());
        assert!(MQTT_PORT >= 1);
    }

    #[test]
    fn pins_are_pairwise_distinct() {
        let pins = [ONE_WIRE_BUS, LED_BLUE, LED_RED, FAIRYLIGHTS];
        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.gpio(), b.gpio());
            }
        }
    }

    #[test]
    fn version_matches_package() {
        assert!(!VERSION.is_empty());
    }
}
