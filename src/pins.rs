use core::fmt;
use core::str::FromStr;

/// Board pin alias as printed on NodeMCU / Wemos D1 style boards.
///
/// This file is also included by `build.rs`, so it must only depend on `core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPin {
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
}

impl BoardPin {
    pub const ALL: [BoardPin; 9] = [
        BoardPin::D0,
        BoardPin::D1,
        BoardPin::D2,
        BoardPin::D3,
        BoardPin::D4,
        BoardPin::D5,
        BoardPin::D6,
        BoardPin::D7,
        BoardPin::D8,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BoardPin::D0 => "D0",
            BoardPin::D1 => "D1",
            BoardPin::D2 => "D2",
            BoardPin::D3 => "D3",
            BoardPin::D4 => "D4",
            BoardPin::D5 => "D5",
            BoardPin::D6 => "D6",
            BoardPin::D7 => "D7",
            BoardPin::D8 => "D8",
        }
    }

    /// ESP8266 GPIO number behind the alias.
    pub const fn gpio(self) -> u8 {
        match self {
            BoardPin::D0 => 16,
            BoardPin::D1 => 5,
            BoardPin::D2 => 4,
            BoardPin::D3 => 0,
            BoardPin::D4 => 2,
            BoardPin::D5 => 14,
            BoardPin::D6 => 12,
            BoardPin::D7 => 13,
            BoardPin::D8 => 15,
        }
    }
}

impl fmt::Display for BoardPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePinError;

impl fmt::Display for ParsePinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a board pin alias between D0 and D8")
    }
}

impl FromStr for BoardPin {
    type Err = ParsePinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BoardPin::ALL
            .into_iter()
            .find(|pin| pin.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParsePinError)
    }
}

/// What a pin is wired to on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    /// DS18B20 data line
    OneWireBus,
    /// On-module ESP LED
    LedBlue,
    /// NodeMCU LED
    LedRed,
    Fairylights,
}

impl PinRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            PinRole::OneWireBus => "one_wire_bus",
            PinRole::LedBlue => "led_blue",
            PinRole::LedRed => "led_red",
            PinRole::Fairylights => "fairylights",
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
