//! Error types for the encoder driver.

use core::fmt;

/// Errors that can occur when constructing an [`Encoder`](crate::Encoder).
///
/// Once constructed the driver never fails; malformed input is absorbed by
/// the state machines instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderError {
    /// Tick period is below one millisecond, so no tick count can be derived.
    ZeroTickPeriod,
}

impl fmt::Display for EncoderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::ZeroTickPeriod => write!(f, "Tick period must be at least 1 ms"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EncoderError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::ZeroTickPeriod => defmt::write!(f, "Tick period must be at least 1 ms"),
        }
    }
}
