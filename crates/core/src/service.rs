//! End-to-end recommendation flow shared by the CLI and the web UI.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::ForecastDay;
use crate::engine::{OutfitEngine, OutfitQuery, Recommendation, WeatherContext};
use crate::errors::ApplicationError;
use crate::weather::{
    fetch_or_fallback, validate_city, CityValidation, CityValidator, WeatherProvider,
    WeatherReading,
};

pub const EMPTY_CITY_MESSAGE: &str = "City name cannot be empty.";

/// Raw user input. Vocabulary fields are normalized by the engine, so any
/// text is accepted here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub occasion: String,
    pub color: String,
    pub mood: String,
    pub gender: String,
    pub city: String,
    pub day: ForecastDay,
}

/// Non-fatal substitution made while serving a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationWarning {
    InvalidCity { requested: String, error: String, substitute: String },
    WeatherFallback { message: String },
}

impl fmt::Display for RecommendationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCity { error, substitute, .. } => {
                write!(f, "Invalid city: {}. Using {substitute}.", error.trim_end_matches('.'))
            }
            Self::WeatherFallback { message } => f.write_str(message),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationOutcome {
    pub recommendation: Recommendation,
    /// City the weather was fetched for, after any substitution.
    pub city: String,
    pub warnings: Vec<RecommendationWarning>,
}

#[derive(Clone)]
pub struct RecommendationService {
    validator: Arc<dyn CityValidator>,
    provider: Arc<dyn WeatherProvider>,
    engine: OutfitEngine<'static>,
    default_city: String,
    fallback: WeatherReading,
}

impl RecommendationService {
    pub fn new(
        validator: Arc<dyn CityValidator>,
        provider: Arc<dyn WeatherProvider>,
        default_city: impl Into<String>,
        fallback: WeatherReading,
    ) -> Self {
        Self {
            validator,
            provider,
            engine: OutfitEngine::default(),
            default_city: default_city.into(),
            fallback,
        }
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    pub async fn validate_city(&self, city: &str) -> CityValidation {
        let city = city.trim();
        if city.is_empty() {
            return CityValidation { valid: false, error: Some(EMPTY_CITY_MESSAGE.to_string()) };
        }
        validate_city(self.validator.as_ref(), city).await
    }

    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationOutcome, ApplicationError> {
        let requested_city = request.city.trim();
        if requested_city.is_empty() {
            return Err(ApplicationError::Validation(EMPTY_CITY_MESSAGE.to_string()));
        }

        let mut warnings = Vec::new();
        let validation = validate_city(self.validator.as_ref(), requested_city).await;
        let city = if validation.valid {
            requested_city.to_string()
        } else {
            let error = validation.error.unwrap_or_default();
            debug!(
                event_name = "recommend.city.substituted",
                requested_city,
                default_city = %self.default_city,
                error = %error,
                "city failed validation; using default city"
            );
            warnings.push(RecommendationWarning::InvalidCity {
                requested: requested_city.to_string(),
                error,
                substitute: self.default_city.clone(),
            });
            self.default_city.clone()
        };

        let weather =
            fetch_or_fallback(self.provider.as_ref(), &city, request.day, &self.fallback).await;
        if let Some(warning) = weather.warning {
            debug!(
                event_name = "recommend.weather.fallback",
                city = %city,
                day = request.day.offset(),
                warning = %warning,
                "weather lookup failed; using fallback reading"
            );
            warnings.push(RecommendationWarning::WeatherFallback { message: warning });
        }

        let query = OutfitQuery::normalize(
            &request.occasion,
            &request.color,
            &request.mood,
            &request.gender,
        );
        let context =
            WeatherContext { city: city.clone(), day: request.day, reading: weather.reading };
        let recommendation = self.engine.recommend(&query, &context);

        info!(
            event_name = "recommend.completed",
            occasion = %recommendation.occasion,
            color = %recommendation.color,
            catalog_color = %recommendation.catalog_color,
            mood = %recommendation.mood,
            gender = %recommendation.gender,
            city = %city,
            day = request.day.offset(),
            warnings = warnings.len(),
            "outfit recommended"
        );

        Ok(RecommendationOutcome { recommendation, city, warnings })
    }
}
