use std::sync::Arc;

use stylist_core::config::AppConfig;
use stylist_core::errors::ApplicationError;
use stylist_core::service::RecommendationService;
use stylist_store::{FavoritesRepository, JsonFileFavoritesRepository};
use stylist_weather::WeatherApiClient;
use thiserror::Error;
use tracing::info;

use crate::web::{init_templates, WebState};

pub struct Application {
    pub config: AppConfig,
    pub web: WebState,
    pub favorites: Arc<dyn FavoritesRepository>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Wires the weather client, recommendation service, favorites store and
/// templates from an already loaded config.
pub fn bootstrap(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let client = WeatherApiClient::from_config(&config.weather)
        .map_err(|error| ApplicationError::Configuration(error.to_string()))?;
    let client = Arc::new(client);
    let service = RecommendationService::new(
        client.clone(),
        client,
        config.defaults.city.clone(),
        config.fallback.reading(),
    );
    info!(
        event_name = "system.bootstrap.weather_ready",
        base_url = %config.weather.base_url,
        default_city = %config.defaults.city,
        "weather client configured"
    );

    let favorites: Arc<dyn FavoritesRepository> =
        Arc::new(JsonFileFavoritesRepository::new(&config.favorites.path));
    info!(
        event_name = "system.bootstrap.favorites_ready",
        path = %config.favorites.path.display(),
        "favorites store configured"
    );

    let web = WebState::new(service, favorites.clone(), init_templates());
    Ok(Application { config, web, favorites })
}
