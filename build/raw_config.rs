// Parsing and code generation for cfg.toml.
//
// Included by `build.rs`, and by the library's tests through `#[path]`. Only
// `std`, `serde`, `toml` and `crate::pins` are available in both places.

use std::env::VarError;

use serde::{Deserialize, Deserializer};

use crate::pins::BoardPin;

pub const CONFIG_FILE: &str = "cfg.toml";
pub const EXAMPLE_CONFIG_FILE: &str = "cfg.toml.example";

/// Build-environment variables that may replace a password from the file.
pub const SECRET_VARS: [&str; 3] = ["WIFI_PASSWORD", "MQTT_PASSWORD", "OTA_PASSWORD"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub wifi: RawWifi,
    pub mqtt: RawMqtt,
    pub ota: RawOta,
    pub pins: RawPins,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawWifi {
    pub ssid: String,
    #[serde(default, deserialize_with = "wifi_password")]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMqtt {
    pub server: String,
    #[serde(default = "default_mqtt_port")]
    pub port: u16,
    #[serde(default)]
    pub user: String,
    #[serde(default, deserialize_with = "mqtt_password")]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOta {
    #[serde(deserialize_with = "ota_password")]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPins {
    pub one_wire_bus: String,
    pub led_blue: String,
    pub led_red: String,
    pub fairylights: String,
}

fn default_mqtt_port() -> u16 {
    1883
}

// A mistyped secret must not show up in the error, so the value is never
// handed to serde's `invalid_type` reporting.
fn secret_string<'de, D>(deserializer: D, key: &str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer) {
        Ok(toml::Value::String(s)) => Ok(s),
        _ => Err(serde::de::Error::custom(format!(
            "{} must be a quoted string",
            key
        ))),
    }
}

fn wifi_password<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    secret_string(d, "wifi.password")
}

fn mqtt_password<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    secret_string(d, "mqtt.password")
}

fn ota_password<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    secret_string(d, "ota.password")
}

pub fn config_file(cfg_exists: bool) -> &'static str {
    if cfg_exists {
        CONFIG_FILE
    } else {
        EXAMPLE_CONFIG_FILE
    }
}

/// Parses the file content. toml errors quote the offending line, which could
/// hold a credential, so only the message is kept.
pub fn parse(path: &str, toml_str: &str) -> Result<RawConfig, String> {
    toml::from_str(toml_str)
        .map_err(|e| format!("{}: invalid configuration: {}", path, e.message()))
}

/// Picks the build-environment value over the file one. Unset or empty
/// variables leave the file value in place.
pub fn override_secret(
    var: &str,
    env_value: Result<String, VarError>,
    from_file: String,
) -> Result<String, String> {
    match env_value {
        Ok(v) if !v.is_empty() => Ok(v),
        Ok(_) | Err(VarError::NotPresent) => Ok(from_file),
        Err(VarError::NotUnicode(_)) => Err(format!("{} is not valid UTF-8", var)),
    }
}

pub fn pin(path: &str, key: &str, alias: &str) -> Result<BoardPin, String> {
    alias
        .parse()
        .map_err(|e| format!("{}: pins.{} = {:?}: {}", path, key, alias, e))
}

/// Renders the `CONFIG` constant that `src/config.rs` includes.
pub fn render<F>(path: &str, raw: RawConfig, mut env: F) -> Result<String, String>
where
    F: FnMut(&str) -> Result<String, VarError>,
{
    let wifi_password = override_secret(SECRET_VARS[0], env(SECRET_VARS[0]), raw.wifi.password)?;
    let mqtt_password = override_secret(SECRET_VARS[1], env(SECRET_VARS[1]), raw.mqtt.password)?;
    let ota_password = override_secret(SECRET_VARS[2], env(SECRET_VARS[2]), raw.ota.password)?;

    let one_wire_bus = pin(path, "one_wire_bus", &raw.pins.one_wire_bus)?;
    let led_blue = pin(path, "led_blue", &raw.pins.led_blue)?;
    let led_red = pin(path, "led_red", &raw.pins.led_red)?;
    let fairylights = pin(path, "fairylights", &raw.pins.fairylights)?;

    Ok(format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi: WifiConfig {{
                ssid: {ssid:?},
                password: Secret::new({wpw:?}),
            }},
            mqtt: MqttConfig {{
                server: {server:?},
                port: {port},
                user: {user:?},
                password: Secret::new({mpw:?}),
            }},
            ota: OtaConfig {{
                password: Secret::new({opw:?}),
            }},
            pins: PinConfig {{
                one_wire_bus: BoardPin::{owb:?},
                led_blue: BoardPin::{blue:?},
                led_red: BoardPin::{red:?},
                fairylights: BoardPin::{fairy:?},
            }},
        }};
    "#,
        ssid = raw.wifi.ssid,
        wpw = wifi_password,
        server = raw.mqtt.server,
        port = raw.mqtt.port,
        user = raw.mqtt.user,
        mpw = mqtt_password,
        opw = ota_password,
        owb = one_wire_bus,
        blue = led_blue,
        red = led_red,
        fairy = fairylights,
    ))
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    const MINIMAL: &str = r#"
        [wifi]
        ssid = "garden"
        password = "wifi-hunter2"

        [mqtt]
        server = "broker.lan"
        user = "openhab"
        password = "mqtt-hunter2"

        [ota]
        password = "ota-hunter2"

        [pins]
        one_wire_bus = "D1"
        led_blue = "D4"
        led_red = "D0"
        fairylights = "D2"
    "#;

    fn no_env(_: &str) -> Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    #[test]
    fn example_file_parses_and_renders() {
        let raw = parse(EXAMPLE_CONFIG_FILE, include_str!("../cfg.toml.example")).unwrap();
        let code = render(EXAMPLE_CONFIG_FILE, raw, no_env).unwrap();

        assert!(code.contains("ssid: \"ssid\","));
        assert!(code.contains("server: \"home.lan\","));
        assert!(code.contains("port: 1883,"));
        assert!(code.contains("one_wire_bus: BoardPin::D1,"));
        assert!(code.contains("led_blue: BoardPin::D4,"));
        assert!(code.contains("led_red: BoardPin::D0,"));
        assert!(code.contains("fairylights: BoardPin::D2,"));
    }

    #[test]
    fn falls_back_to_example_file() {
        assert_eq!(config_file(true), "cfg.toml");
        assert_eq!(config_file(false), "cfg.toml.example");
    }

    #[test]
    fn mqtt_port_defaults_to_1883() {
        let raw = parse(CONFIG_FILE, MINIMAL).unwrap();
        assert_eq!(raw.mqtt.port, 1883);
    }

    #[test]
    fn numeric_password_is_not_echoed() {
        let toml_str = MINIMAL.replace("\"wifi-hunter2\"", "12345678");
        let err = parse(CONFIG_FILE, &toml_str).unwrap_err();

        assert!(err.contains("wifi.password"), "{err}");
        assert!(!err.contains("12345678"), "{err}");
    }

    #[test]
    fn every_secret_key_is_named_on_type_errors() {
        for (quoted, key) in [
            ("\"mqtt-hunter2\"", "mqtt.password"),
            ("\"ota-hunter2\"", "ota.password"),
        ] {
            let toml_str = MINIMAL.replace(quoted, "424242");
            let err = parse(CONFIG_FILE, &toml_str).unwrap_err();

            assert!(err.contains(key), "{err}");
            assert!(!err.contains("424242"), "{err}");
        }
    }

    #[test]
    fn ota_password_is_required() {
        let toml_str = MINIMAL.replace("password = \"ota-hunter2\"", "");
        let err = parse(CONFIG_FILE, &toml_str).unwrap_err();

        assert!(err.contains("password"), "{err}");
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        let toml_str = MINIMAL.replace("server = \"broker.lan\"", "server = \"broker.lan\"\nport = 70000");
        assert!(parse(CONFIG_FILE, &toml_str).is_err());
    }

    #[test]
    fn unknown_pin_alias_names_the_key() {
        let toml_str = MINIMAL.replace("fairylights = \"D2\"", "fairylights = \"D9\"");
        let raw = parse(CONFIG_FILE, &toml_str).unwrap();
        let err = render(CONFIG_FILE, raw, no_env).unwrap_err();

        assert!(err.contains("pins.fairylights"), "{err}");
    }

    #[test]
    fn env_overrides_file_secrets() {
        let raw = parse(CONFIG_FILE, MINIMAL).unwrap();
        let code = render(CONFIG_FILE, raw, |var| match var {
            "WIFI_PASSWORD" => Ok("from-env-wifi".to_string()),
            _ => Err(VarError::NotPresent),
        })
        .unwrap();

        assert!(code.contains("Secret::new(\"from-env-wifi\")"));
        assert!(!code.contains("wifi-hunter2"));
        assert!(code.contains("Secret::new(\"mqtt-hunter2\")"));
    }

    #[test]
    fn empty_env_keeps_file_secret() {
        assert_eq!(
            override_secret("WIFI_PASSWORD", Ok(String::new()), "password".to_string()),
            Ok("password".to_string())
        );
        assert_eq!(
            override_secret("WIFI_PASSWORD", Err(VarError::NotPresent), "password".to_string()),
            Ok("password".to_string())
        );
    }

    #[test]
    fn non_unicode_env_fails() {
        let err = override_secret(
            "OTA_PASSWORD",
            Err(VarError::NotUnicode(OsString::from("x"))),
            "password".to_string(),
        )
        .unwrap_err();

        assert!(err.contains("OTA_PASSWORD"));
    }
}
