//! Token lifetime parsing.
//!
//! The credential exchange returns a compact lifetime such as `"7d"` or
//! `"1a"` (`a` for *ano*, a year). It is parsed once into [`ExpiresIn`] and
//! converted to whole days before it reaches the session store.
//!
//! Grammar: optional surrounding whitespace, one or more ASCII digits, then an
//! optional single unit character. `a` selects years; any other trailing
//! non-digit character selects days.

#[cfg(test)]
#[path = "expiry_test.rs"]
mod expiry_test;

use std::fmt;
use std::str::FromStr;

pub const DAYS_PER_YEAR: u32 = 365;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryUnit {
    Days,
    Years,
}

/// A parsed token lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpiresIn {
    pub magnitude: u32,
    pub unit: ExpiryUnit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpiryParseError {
    #[error("empty lifetime")]
    Empty,
    #[error("lifetime has no leading magnitude")]
    MissingMagnitude,
    #[error("lifetime must be positive")]
    Zero,
    #[error("lifetime is too large")]
    Overflow,
}

impl ExpiresIn {
    pub fn days(magnitude: u32) -> Self {
        Self { magnitude, unit: ExpiryUnit::Days }
    }

    pub fn years(magnitude: u32) -> Self {
        Self { magnitude, unit: ExpiryUnit::Years }
    }

    /// Lifetime in whole days. Construction through [`FromStr`] guarantees
    /// this cannot overflow; hand-built values saturate.
    pub fn as_days(self) -> u32 {
        match self.unit {
            ExpiryUnit::Days => self.magnitude,
            ExpiryUnit::Years => self.magnitude.saturating_mul(DAYS_PER_YEAR),
        }
    }
}

impl FromStr for ExpiresIn {
    type Err = ExpiryParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let last = trimmed.chars().next_back().ok_or(ExpiryParseError::Empty)?;

        let (digits, unit) = if last.is_ascii_digit() {
            (trimmed, ExpiryUnit::Days)
        } else {
            let unit = if last == 'a' { ExpiryUnit::Years } else { ExpiryUnit::Days };
            (&trimmed[..trimmed.len() - last.len_utf8()], unit)
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ExpiryParseError::MissingMagnitude);
        }
        let magnitude: u32 = digits.parse().map_err(|_| ExpiryParseError::Overflow)?;
        if magnitude == 0 {
            return Err(ExpiryParseError::Zero);
        }
        if unit == ExpiryUnit::Years && magnitude.checked_mul(DAYS_PER_YEAR).is_none() {
            return Err(ExpiryParseError::Overflow);
        }
        Ok(Self { magnitude, unit })
    }
}

impl fmt::Display for ExpiresIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            ExpiryUnit::Days => write!(f, "{}d", self.magnitude),
            ExpiryUnit::Years => write!(f, "{}a", self.magnitude),
        }
    }
}
