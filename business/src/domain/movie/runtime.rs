//! Wire format for movie runtimes.
//!
//! A runtime is stored as whole minutes and travels as a `"<n> mins"` string,
//! e.g. `"102 mins"`. `Display` and `FromStr` are the only encoding, so the
//! entity itself only carries the integer.

use std::fmt;
use std::str::FromStr;

const UNIT: &str = "mins";

/// Movie runtime in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Runtime(i32);

impl Runtime {
    pub const fn from_minutes(minutes: i32) -> Self {
        Self(minutes)
    }

    pub const fn minutes(self) -> i32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for Runtime {
    fn from(minutes: i32) -> Self {
        Self(minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeParseError {
    #[error("movie.invalid_runtime_format")]
    InvalidFormat,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, UNIT)
    }
}

impl FromStr for Runtime {
    type Err = RuntimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minutes, unit) = s
            .split_once(' ')
            .ok_or(RuntimeParseError::InvalidFormat)?;

        if unit != UNIT {
            return Err(RuntimeParseError::InvalidFormat);
        }

        minutes
            .parse::<i32>()
            .map(Self)
            .map_err(|_| RuntimeParseError::InvalidFormat)
    }
}
