//! Weather readings and the collaborator seams the recommendation flow
//! depends on.
//!
//! Neither a failed city check nor a failed forecast call is fatal: both map
//! to a substitutable value plus a message meant for display.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ForecastDay;

pub const FALLBACK_TEMPERATURE_C: f64 = 15.0;
pub const FALLBACK_CONDITION: &str = "partly cloudy";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    /// Lower-cased provider condition text, e.g. `"patchy rain nearby"`.
    pub condition: String,
}

impl WeatherReading {
    pub fn new(temperature_c: f64, condition: impl Into<String>) -> Self {
        Self { temperature_c, condition: condition.into().to_lowercase() }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_TEMPERATURE_C, FALLBACK_CONDITION)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WeatherError {
    /// Timeouts, refused connections and other transport failures.
    #[error("{0}")]
    Network(String),
    /// The provider answered but the answer was unusable.
    #[error("{0}")]
    Lookup(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, city: &str, day: ForecastDay) -> Result<WeatherReading, WeatherError>;
}

#[async_trait]
pub trait CityValidator: Send + Sync {
    /// `Ok(false)` means the provider answered and does not know the city.
    async fn city_exists(&self, city: &str) -> Result<bool, WeatherError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CityValidation {
    pub valid: bool,
    pub error: Option<String>,
}

impl CityValidation {
    pub fn from_result(result: Result<bool, WeatherError>) -> Self {
        match result {
            Ok(true) => Self { valid: true, error: None },
            Ok(false) => Self {
                valid: false,
                error: Some("City not found. Please select a valid city.".to_string()),
            },
            Err(WeatherError::Network(message)) => Self {
                valid: false,
                error: Some(format!("Network error: {message}. Check your connection.")),
            },
            Err(WeatherError::Lookup(message)) => {
                Self { valid: false, error: Some(format!("API error: {message}.")) }
            }
        }
    }
}

pub async fn validate_city(validator: &dyn CityValidator, city: &str) -> CityValidation {
    CityValidation::from_result(validator.city_exists(city).await)
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherOutcome {
    pub reading: WeatherReading,
    /// Set when `reading` is the fallback.
    pub warning: Option<String>,
}

impl WeatherOutcome {
    pub fn from_result(
        result: Result<WeatherReading, WeatherError>,
        fallback: &WeatherReading,
    ) -> Self {
        match result {
            Ok(reading) => Self { reading, warning: None },
            Err(WeatherError::Network(message)) => Self {
                reading: fallback.clone(),
                warning: Some(format!("Network error: {message}.")),
            },
            Err(WeatherError::Lookup(message)) => {
                Self { reading: fallback.clone(), warning: Some(format!("API error: {message}.")) }
            }
        }
    }
}

pub async fn fetch_or_fallback(
    provider: &dyn WeatherProvider,
    city: &str,
    day: ForecastDay,
    fallback: &WeatherReading,
) -> WeatherOutcome {
    WeatherOutcome::from_result(provider.fetch(city, day).await, fallback)
}
