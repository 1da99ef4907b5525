use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::weather::{WeatherReading, FALLBACK_CONDITION, FALLBACK_TEMPERATURE_C};

pub const DEFAULT_CONFIG_FILE: &str = "stylist.toml";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub weather: WeatherConfig,
    pub defaults: DefaultsConfig,
    pub fallback: FallbackConfig,
    pub favorites: FavoritesConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct DefaultsConfig {
    /// Substituted whenever a requested city fails validation.
    pub city: String,
}

#[derive(Clone, Debug)]
pub struct FallbackConfig {
    pub temperature_c: f64,
    pub condition: String,
}

#[derive(Clone, Debug)]
pub struct FavoritesConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub weather_api_key: Option<String>,
    pub weather_base_url: Option<String>,
    pub default_city: Option<String>,
    pub favorites_path: Option<PathBuf>,
    pub server_port: Option<u16>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    /// Skip the `weather.api_key` requirement for callers that never talk to
    /// the weather service.
    pub api_key_optional: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig {
                api_key: String::new().into(),
                base_url: "http://api.weatherapi.com/v1".to_string(),
                timeout_secs: 5,
            },
            defaults: DefaultsConfig { city: "London".to_string() },
            fallback: FallbackConfig {
                temperature_c: FALLBACK_TEMPERATURE_C,
                condition: FALLBACK_CONDITION.to_string(),
            },
            favorites: FavoritesConfig { path: PathBuf::from("favorites.json") },
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 5000,
                graceful_shutdown_secs: 15,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl FallbackConfig {
    pub fn reading(&self) -> WeatherReading {
        WeatherReading::new(self.temperature_c, self.condition.clone())
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate_settings(!options.api_key_optional)?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(weather) = patch.weather {
            if let Some(api_key) = weather.api_key {
                self.weather.api_key = api_key.into();
            }
            if let Some(base_url) = weather.base_url {
                self.weather.base_url = base_url;
            }
            if let Some(timeout_secs) = weather.timeout_secs {
                self.weather.timeout_secs = timeout_secs;
            }
        }

        if let Some(defaults) = patch.defaults {
            if let Some(city) = defaults.city {
                self.defaults.city = city;
            }
        }

        if let Some(fallback) = patch.fallback {
            if let Some(temperature_c) = fallback.temperature_c {
                self.fallback.temperature_c = temperature_c;
            }
            if let Some(condition) = fallback.condition {
                self.fallback.condition = condition;
            }
        }

        if let Some(favorites) = patch.favorites {
            if let Some(path) = favorites.path {
                self.favorites.path = path;
            }
        }

        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let api_key = read_env("STYLIST_WEATHER_API_KEY").or_else(|| read_env("WEATHER_API_KEY"));
        if let Some(value) = api_key {
            self.weather.api_key = value.into();
        }
        if let Some(value) = read_env("STYLIST_WEATHER_BASE_URL") {
            self.weather.base_url = value;
        }
        if let Some(value) = read_env("STYLIST_WEATHER_TIMEOUT_SECS") {
            self.weather.timeout_secs = parse_u64("STYLIST_WEATHER_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = read_env("STYLIST_DEFAULT_CITY") {
            self.defaults.city = value;
        }

        if let Some(value) = read_env("STYLIST_FALLBACK_TEMPERATURE_C") {
            self.fallback.temperature_c = parse_f64("STYLIST_FALLBACK_TEMPERATURE_C", &value)?;
        }
        if let Some(value) = read_env("STYLIST_FALLBACK_CONDITION") {
            self.fallback.condition = value;
        }

        if let Some(value) = read_env("STYLIST_FAVORITES_PATH") {
            self.favorites.path = PathBuf::from(value);
        }

        if let Some(value) = read_env("STYLIST_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("STYLIST_SERVER_PORT") {
            self.server.port = parse_u16("STYLIST_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("STYLIST_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("STYLIST_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }

        let log_level =
            read_env("STYLIST_LOGGING_LEVEL").or_else(|| read_env("STYLIST_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("STYLIST_LOGGING_FORMAT").or_else(|| read_env("STYLIST_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(api_key) = overrides.weather_api_key {
            self.weather.api_key = api_key.into();
        }
        if let Some(base_url) = overrides.weather_base_url {
            self.weather.base_url = base_url;
        }
        if let Some(city) = overrides.default_city {
            self.defaults.city = city;
        }
        if let Some(path) = overrides.favorites_path {
            self.favorites.path = path;
        }
        if let Some(port) = overrides.server_port {
            self.server.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_settings(true)
    }

    fn validate_settings(&self, require_api_key: bool) -> Result<(), ConfigError> {
        validate_weather(&self.weather, require_api_key)?;
        validate_defaults(&self.defaults, &self.fallback)?;
        validate_favorites(&self.favorites)?;
        validate_server(&self.server)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from("config").join(DEFAULT_CONFIG_FILE)]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_weather(weather: &WeatherConfig, require_api_key: bool) -> Result<(), ConfigError> {
    if require_api_key && weather.api_key.expose_secret().trim().is_empty() {
        return Err(ConfigError::Validation(
            "weather.api_key is required; set STYLIST_WEATHER_API_KEY (or WEATHER_API_KEY) \
             to a key from https://www.weatherapi.com/my/"
                .to_string(),
        ));
    }

    let base_url = weather.base_url.trim();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::Validation(
            "weather.base_url must start with http:// or https://".to_string(),
        ));
    }

    if weather.timeout_secs == 0 || weather.timeout_secs > 60 {
        return Err(ConfigError::Validation(
            "weather.timeout_secs must be in range 1..=60".to_string(),
        ));
    }

    Ok(())
}

fn validate_defaults(
    defaults: &DefaultsConfig,
    fallback: &FallbackConfig,
) -> Result<(), ConfigError> {
    if defaults.city.trim().is_empty() {
        return Err(ConfigError::Validation("defaults.city must not be empty".to_string()));
    }

    if !fallback.temperature_c.is_finite() {
        return Err(ConfigError::Validation(
            "fallback.temperature_c must be a finite number".to_string(),
        ));
    }

    if fallback.condition.trim().is_empty() {
        return Err(ConfigError::Validation("fallback.condition must not be empty".to_string()));
    }

    Ok(())
}

fn validate_favorites(favorites: &FavoritesConfig) -> Result<(), ConfigError> {
    if favorites.path.as_os_str().is_empty() {
        return Err(ConfigError::Validation("favorites.path must not be empty".to_string()));
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    if server.graceful_shutdown_secs == 0 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse::<f64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    weather: Option<WeatherPatch>,
    defaults: Option<DefaultsPatch>,
    fallback: Option<FallbackPatch>,
    favorites: Option<FavoritesPatch>,
    server: Option<ServerPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherPatch {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultsPatch {
    city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FallbackPatch {
    temperature_c: Option<f64>,
    condition: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FavoritesPatch {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
