use core::fmt;

const REDACTED: &str = "********";

/// A credential baked into the firmware.
///
/// Formatting never reveals the value, so a `Secret` can sit in structs that
/// get logged. Call [`Secret::expose`] at the point where the credential is
/// handed to the radio, broker client or OTA handler.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret(&'static str);

impl Secret {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn expose(&self) -> &'static str {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
