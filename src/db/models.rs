//! Domain models for the projects database.
//!
//! These models are storage-agnostic; the SQLite layer maps them to and from
//! rows of the `project` table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Integer primary key assigned by storage.
pub type Id = i64;

/// A project tracked by the manager.
///
/// `id` is `None` until the project has been inserted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Project {
    pub id: Option<Id>,
    pub name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    /// Intended range is 1-5; not enforced.
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl Project {
    /// Same record carrying a storage-assigned id.
    pub fn with_id(self, id: Id) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}: {}", id, self.name),
            None => write!(f, "(unsaved): {}", self.name),
        }
    }
}

/// Hour count with exactly two fractional digits, stored as hundredths.
///
/// Parsed values are limited to what a `DECIMAL(7, 2)` column holds,
/// `-99999.99..=99999.99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hours(i64);

/// Why a string could not be read as [`Hours`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHoursError {
    #[error("no digits")]
    Empty,
    #[error("unexpected character '{0}'")]
    InvalidChar(char),
    #[error("more than two fractional digits")]
    TooPrecise,
    #[error("value out of range")]
    Overflow,
}

impl Hours {
    pub const ZERO: Hours = Hours(0);
    pub const MAX: Hours = Hours(9_999_999);
    pub const MIN: Hours = Hours(-9_999_999);

    pub const fn from_hundredths(hundredths: i64) -> Self {
        Hours(hundredths)
    }

    pub const fn hundredths(self) -> i64 {
        self.0
    }

    /// Whether the value fits a `DECIMAL(7, 2)` column.
    pub fn fits_column(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self)
    }

    /// Value as stored in a `DECIMAL(7, 2)` column.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Read back a column value, rounding away binary representation noise.
    pub fn from_f64(value: f64) -> Self {
        Hours((value * 100.0).round() as i64)
    }
}

impl FromStr for Hours {
    type Err = ParseHoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseHoursError::Empty);
        }
        if let Some(c) = whole.chars().chain(frac.chars()).find(|c| !c.is_ascii_digit()) {
            return Err(ParseHoursError::InvalidChar(c));
        }
        if frac.len() > 2 {
            return Err(ParseHoursError::TooPrecise);
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseHoursError::Overflow)?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| ParseHoursError::Overflow)? * 10,
            _ => frac.parse().map_err(|_| ParseHoursError::Overflow)?,
        };

        let hundredths = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or(ParseHoursError::Overflow)?;
        let hours = Hours(if negative { -hundredths } else { hundredths });
        if !hours.fits_column() {
            return Err(ParseHoursError::Overflow);
        }
        Ok(hours)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
