use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;
use stylist_core::config::{AppConfig, LoadOptions, DEFAULT_CONFIG_FILE};
use toml::Value;

use crate::commands::{CommandResult, EXIT_CONFIG};

const COMMAND: &str = "config";

struct Field<'a> {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: &'a str,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let api_key = redact_secret(config.weather.api_key.expose_secret());
    let timeout_secs = config.weather.timeout_secs.to_string();
    let temperature_c = config.fallback.temperature_c.to_string();
    let favorites_path = config.favorites.path.display().to_string();
    let port = config.server.port.to_string();
    let graceful_shutdown_secs = config.server.graceful_shutdown_secs.to_string();
    let log_format = format!("{:?}", config.logging.format);

    let fields = [
        Field {
            key_path: "weather.api_key",
            env_keys: &["STYLIST_WEATHER_API_KEY", "WEATHER_API_KEY"],
            value: &api_key,
        },
        Field {
            key_path: "weather.base_url",
            env_keys: &["STYLIST_WEATHER_BASE_URL"],
            value: &config.weather.base_url,
        },
        Field {
            key_path: "weather.timeout_secs",
            env_keys: &["STYLIST_WEATHER_TIMEOUT_SECS"],
            value: &timeout_secs,
        },
        Field {
            key_path: "defaults.city",
            env_keys: &["STYLIST_DEFAULT_CITY"],
            value: &config.defaults.city,
        },
        Field {
            key_path: "fallback.temperature_c",
            env_keys: &["STYLIST_FALLBACK_TEMPERATURE_C"],
            value: &temperature_c,
        },
        Field {
            key_path: "fallback.condition",
            env_keys: &["STYLIST_FALLBACK_CONDITION"],
            value: &config.fallback.condition,
        },
        Field {
            key_path: "favorites.path",
            env_keys: &["STYLIST_FAVORITES_PATH"],
            value: &favorites_path,
        },
        Field {
            key_path: "server.bind_address",
            env_keys: &["STYLIST_SERVER_BIND_ADDRESS"],
            value: &config.server.bind_address,
        },
        Field { key_path: "server.port", env_keys: &["STYLIST_SERVER_PORT"], value: &port },
        Field {
            key_path: "server.graceful_shutdown_secs",
            env_keys: &["STYLIST_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            value: &graceful_shutdown_secs,
        },
        Field {
            key_path: "logging.level",
            env_keys: &["STYLIST_LOGGING_LEVEL", "STYLIST_LOG_LEVEL"],
            value: &config.logging.level,
        },
        Field {
            key_path: "logging.format",
            env_keys: &["STYLIST_LOGGING_FORMAT", "STYLIST_LOG_FORMAT"],
            value: &log_format,
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in &fields {
        let source = field_source(
            field.key_path,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key_path, field.value, source));
    }

    CommandResult::text(lines.join("\n"))
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from(DEFAULT_CONFIG_FILE);
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config").join(DEFAULT_CONFIG_FILE);
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    for env_key in env_keys {
        if env::var(env_key).is_ok_and(|value| !value.trim().is_empty()) {
            return format!("env ({env_key})");
        }
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

fn redact_secret(secret: &str) -> String {
    let trimmed = secret.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() > 8 {
        let visible: String = chars[chars.len() - 4..].iter().collect();
        return format!("<redacted>…{visible}");
    }

    "<redacted>".to_string()
}
