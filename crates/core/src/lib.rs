pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod service;
pub mod weather;

pub use catalog::{CatalogError, OutfitCatalog, OutfitEntry, Selection};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::{Color, ColorKey, ForecastDay, ForecastDayError, Gender, Mood, Occasion};
pub use engine::{recommend, OutfitEngine, OutfitQuery, Recommendation, WeatherContext};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use service::{
    RecommendationOutcome, RecommendationRequest, RecommendationService, RecommendationWarning,
};
pub use weather::{
    CityValidation, CityValidator, WeatherError, WeatherOutcome, WeatherProvider, WeatherReading,
};
