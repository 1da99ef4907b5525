//! WeatherAPI.com client backing [`WeatherProvider`] and [`CityValidator`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use stylist_core::config::WeatherConfig;
use stylist_core::domain::ForecastDay;
use stylist_core::weather::{CityValidator, WeatherError, WeatherProvider, WeatherReading};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
#[error("failed to build weather HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

#[derive(Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl std::fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl WeatherApiClient {
    pub fn new(
        base_url: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, ClientBuildError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string(), api_key })
    }

    pub fn from_config(config: &WeatherConfig) -> Result<Self, ClientBuildError> {
        Self::new(
            &config.base_url,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let mut query = vec![("key", self.api_key.expose_secret())];
        query.extend_from_slice(params);

        // reqwest errors carry the full URL, including the key.
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|error| WeatherError::Network(describe_transport(&error.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .map(|body| body.error.message)
                .unwrap_or_default();
            return Err(WeatherError::Lookup(describe_status(status, &detail)));
        }

        response.json::<T>().await.map_err(|error| {
            let error = error.without_url();
            if error.is_decode() {
                WeatherError::Lookup(format!("unexpected response from {endpoint}: {error}"))
            } else {
                WeatherError::Network(describe_transport(&error))
            }
        })
    }
}

#[async_trait]
impl CityValidator for WeatherApiClient {
    async fn city_exists(&self, city: &str) -> Result<bool, WeatherError> {
        let matches: Vec<SearchMatch> = self.get_json("search.json", &[("q", city)]).await?;
        debug!(
            event_name = "weather.city.searched",
            city,
            matches = matches.len(),
            first_match = matches.first().map(|entry| entry.name.as_str()).unwrap_or(""),
            "city search completed"
        );
        Ok(!matches.is_empty())
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn fetch(&self, city: &str, day: ForecastDay) -> Result<WeatherReading, WeatherError> {
        let days = (day.offset() + 1).to_string();
        let response: ForecastResponse = self
            .get_json("forecast.json", &[("q", city), ("days", &days), ("aqi", "no")])
            .await
            .map_err(|error| {
                debug!(
                    event_name = "weather.forecast.failed",
                    city,
                    day = day.offset(),
                    error = %error,
                    "weather lookup failed"
                );
                error
            })?;

        let reading = response.reading_for(day)?;
        debug!(
            event_name = "weather.forecast.fetched",
            city,
            day = day.offset(),
            temperature_c = reading.temperature_c,
            condition = %reading.condition,
            "weather reading fetched"
        );
        Ok(reading)
    }
}

fn describe_transport(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("request timed out ({error})")
    } else if error.is_connect() {
        format!("could not connect to weather service ({error})")
    } else {
        error.to_string()
    }
}

fn describe_status(status: StatusCode, detail: &str) -> String {
    if detail.is_empty() {
        format!("weather service returned {status}")
    } else {
        format!("weather service returned {status}: {detail}")
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchMatch {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
    forecast: Option<Forecast>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    forecastday: Vec<ForecastDayEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastDayEntry {
    day: DaySummary,
}

#[derive(Debug, Deserialize)]
struct DaySummary {
    avgtemp_c: f64,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
}

impl ForecastResponse {
    fn reading_for(self, day: ForecastDay) -> Result<WeatherReading, WeatherError> {
        if day.is_today() {
            let current = self.current.ok_or_else(|| {
                WeatherError::Lookup("response is missing current conditions".to_string())
            })?;
            return Ok(WeatherReading::new(current.temp_c, current.condition.text));
        }

        let offset = usize::from(day.offset());
        self.forecast
            .and_then(|forecast| forecast.forecastday.into_iter().nth(offset))
            .map(|entry| WeatherReading::new(entry.day.avgtemp_c, entry.day.condition.text))
            .ok_or_else(|| {
                WeatherError::Lookup(format!("forecast for {} is not available", day.label()))
            })
    }
}
