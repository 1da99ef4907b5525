use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Forecast day offset: 0 is current conditions, 1..=3 are forecast days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ForecastDay(u8);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ForecastDayError {
    #[error("forecast day must be between 0 and {max}, got {0}", max = ForecastDay::MAX)]
    OutOfRange(i64),
    #[error("forecast day must be a whole number, got `{0}`")]
    NotANumber(String),
}

impl ForecastDay {
    pub const MAX: u8 = 3;
    pub const TODAY: ForecastDay = ForecastDay(0);

    pub fn offset(&self) -> u8 {
        self.0
    }

    pub fn is_today(&self) -> bool {
        self.0 == 0
    }

    pub fn label(&self) -> String {
        match self.0 {
            0 => "Today".to_string(),
            1 => "In 1 day".to_string(),
            days => format!("In {days} days"),
        }
    }
}

impl TryFrom<u8> for ForecastDay {
    type Error = ForecastDayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(ForecastDayError::OutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }
}

impl From<ForecastDay> for u8 {
    fn from(day: ForecastDay) -> Self {
        day.0
    }
}

impl FromStr for ForecastDay {
    type Err = ForecastDayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<i64>()
            .map_err(|_| ForecastDayError::NotANumber(trimmed.to_string()))?;
        u8::try_from(parsed)
            .map_err(|_| ForecastDayError::OutOfRange(parsed))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for ForecastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
