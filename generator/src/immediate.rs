use std::fmt;

use rand::Rng;

use crate::error::ParseImmediateError;

/// Base an [`Immediate`] is rendered in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

/// A signed 32-bit immediate operand together with the base it is printed in.
///
/// Hexadecimal renderings are lowercase with a `0x` prefix and carry the sign
/// in front of the prefix, so `-31` prints as `-0x1f`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Immediate {
    pub value: i32,
    pub radix: Radix,
}

impl Immediate {
    pub fn new(value: i32, radix: Radix) -> Self {
        Self { value, radix }
    }

    /// Draws a value uniformly over the whole `i32` domain and picks the radix
    /// with a fair coin flip.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = rng.gen::<i32>();
        let radix = if rng.gen_bool(0.5) {
            Radix::Hex
        } else {
            Radix::Decimal
        };
        Self { value, radix }
    }

    /// Parses a rendering produced by [`Immediate`]'s `Display` impl.
    pub fn parse(text: &str) -> Result<Self, ParseImmediateError> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if unsigned.is_empty() {
            return Err(ParseImmediateError::Empty);
        }

        let (radix, magnitude) = match unsigned.strip_prefix("0x") {
            Some(digits) => (Radix::Hex, u64::from_str_radix(digits, 16)),
            None => (Radix::Decimal, unsigned.parse::<u64>()),
        };
        let magnitude = magnitude.map_err(|_| ParseImmediateError::Digits(text.to_string()))?;

        let signed = if negative {
            -(magnitude as i128)
        } else {
            magnitude as i128
        };
        let value =
            i32::try_from(signed).map_err(|_| ParseImmediateError::OutOfRange(text.to_string()))?;
        Ok(Self { value, radix })
    }
}

impl fmt::Display for Immediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.radix {
            Radix::Decimal => write!(f, "{}", self.value),
            Radix::Hex => {
                let sign = if self.value < 0 { "-" } else { "" };
                write!(f, "{sign}0x{:x}", self.value.unsigned_abs())
            }
        }
    }
}
