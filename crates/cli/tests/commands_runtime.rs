use std::env;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use serde_json::Value;
use stylist_cli::commands::favorites::{self, FavoritesArgs};
use stylist_cli::commands::recommend::{self, RecommendArgs};
use stylist_cli::commands::{config, EXIT_CONFIG, EXIT_PERSISTENCE, EXIT_VALIDATION};
use stylist_core::domain::{Color, ForecastDay, Mood, Occasion};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

const OFFLINE_WEATHER: &str = "http://127.0.0.1:1";

#[test]
fn recommend_returns_config_failure_without_api_key() {
    with_env(&[], || {
        let result = recommend::run(RecommendArgs::default());
        assert_eq!(result.exit_code, EXIT_CONFIG, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "recommend");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
        assert!(payload["message"].as_str().unwrap_or("").contains("weather.api_key"));
    });
}

#[test]
fn recommend_falls_back_to_default_city_and_weather_when_offline() {
    let dir = TempDir::new().expect("temp dir");
    let favorites_path = dir.path().join("favorites.json");
    let favorites_path = favorites_path.to_str().expect("utf-8 path");

    with_env(
        &[
            ("STYLIST_WEATHER_API_KEY", "test-key"),
            ("STYLIST_WEATHER_BASE_URL", OFFLINE_WEATHER),
            ("STYLIST_FAVORITES_PATH", favorites_path),
        ],
        || {
            let result = recommend::run(RecommendArgs {
                city: Some("Paris".to_string()),
                ..RecommendArgs::default()
            });
            assert_eq!(result.exit_code, 0, "offline lookups are not fatal");

            let lines: Vec<&str> = result.output.lines().collect();
            assert!(lines[0].starts_with("Error: Invalid city - Network error: "));
            assert!(lines[0].ends_with("Check your connection. Using London"));
            assert!(lines[1].starts_with("Warning: Network error: "));
            assert!(result.output.contains(
                "Recommended outfit for casual in default (Mood: minimal, Gender: male, \
                 Weather: 15°C, partly cloudy, City: London, Today): Gray polo, jeans, \
                 oxfords, light jacket\n\nTimeless gray simplicity."
            ));
            assert!(!result.output.contains("test-key"));
        },
    );
}

#[test]
fn recommend_json_reports_structured_outcome_and_saves() {
    let dir = TempDir::new().expect("temp dir");
    let favorites_path = dir.path().join("nested").join("favorites.json");
    let favorites_str = favorites_path.to_str().expect("utf-8 path").to_string();

    with_env(
        &[
            ("STYLIST_WEATHER_API_KEY", "test-key"),
            ("STYLIST_WEATHER_BASE_URL", OFFLINE_WEATHER),
            ("STYLIST_FAVORITES_PATH", favorites_str.as_str()),
            ("STYLIST_DEFAULT_CITY", "Oslo"),
        ],
        || {
            let result = recommend::run(RecommendArgs {
                occasion: Occasion::Work,
                color: Color::Pink.into(),
                mood: Mood::Bold,
                day: ForecastDay::try_from(2).expect("valid day"),
                save: true,
                json: true,
                ..RecommendArgs::default()
            });
            assert_eq!(result.exit_code, 0);

            let payload = parse_payload(&result.output);
            assert_eq!(payload["command"], "recommend");
            assert_eq!(payload["status"], "ok");
            assert_eq!(payload["city"], "Oslo");
            assert_eq!(payload["saved"], true);
            assert_eq!(payload["recommendation"]["occasion"], "work");
            assert_eq!(payload["recommendation"]["color"], "pink");
            assert_eq!(payload["recommendation"]["catalog_color"], "default");
            assert_eq!(payload["warnings"][0]["kind"], "invalid_city");
            assert_eq!(payload["warnings"][1]["kind"], "weather_fallback");

            let text = payload["text"].as_str().expect("text field");
            assert!(text.contains("City: Oslo, In 2 days"));

            let saved: Vec<String> = serde_json::from_str(
                &std::fs::read_to_string(&favorites_path).expect("favorites written"),
            )
            .expect("favorites are a JSON array");
            assert_eq!(saved, vec![text.to_string()]);
        },
    );
}

#[test]
fn recommend_rejects_empty_city() {
    with_env(&[("STYLIST_WEATHER_API_KEY", "test-key")], || {
        let result = recommend::run(RecommendArgs {
            city: Some("   ".to_string()),
            ..RecommendArgs::default()
        });
        assert_eq!(result.exit_code, EXIT_VALIDATION);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "validation");
        assert_eq!(payload["message"], "City name cannot be empty.");
    });
}

#[test]
fn recommend_save_reports_persistence_failure() {
    let dir = TempDir::new().expect("temp dir");
    let favorites_path = dir.path().to_str().expect("utf-8 path").to_string();

    with_env(
        &[
            ("STYLIST_WEATHER_API_KEY", "test-key"),
            ("STYLIST_WEATHER_BASE_URL", OFFLINE_WEATHER),
            ("STYLIST_FAVORITES_PATH", favorites_path.as_str()),
        ],
        || {
            let result = recommend::run(RecommendArgs { save: true, ..RecommendArgs::default() });
            assert_eq!(result.exit_code, EXIT_PERSISTENCE);

            let payload = parse_payload(&result.output);
            assert_eq!(payload["error_class"], "persistence");
        },
    );
}

#[test]
fn favorites_lists_saved_entries_in_order() {
    let dir = TempDir::new().expect("temp dir");
    let favorites_path = dir.path().join("favorites.json");
    std::fs::write(&favorites_path, r#"["first look", "second look"]"#).expect("seed favorites");
    let favorites_str = favorites_path.to_str().expect("utf-8 path").to_string();

    with_env(
        &[
            ("STYLIST_WEATHER_API_KEY", "test-key"),
            ("STYLIST_FAVORITES_PATH", favorites_str.as_str()),
        ],
        || {
            let result = favorites::run(FavoritesArgs::default());
            assert_eq!(result.exit_code, 0);
            assert_eq!(result.output, "Saved outfits (2):\n\n1. first look\n\n2. second look");

            let json = favorites::run(FavoritesArgs { json: true });
            let payload = parse_payload(&json.output);
            assert_eq!(payload["favorites"][1], "second look");
        },
    );
}

#[test]
fn favorites_reports_empty_store() {
    let dir = TempDir::new().expect("temp dir");
    let favorites_str = dir.path().join("none.json").to_str().expect("utf-8 path").to_string();

    with_env(
        &[
            ("STYLIST_WEATHER_API_KEY", "test-key"),
            ("STYLIST_FAVORITES_PATH", favorites_str.as_str()),
        ],
        || {
            let result = favorites::run(FavoritesArgs::default());
            assert_eq!(result.exit_code, 0);
            assert_eq!(result.output, "No favorite outfits saved yet.");
        },
    );
}

#[test]
fn config_attributes_sources_and_redacts_api_key() {
    with_env(
        &[("WEATHER_API_KEY", "abcdef0123456789"), ("STYLIST_DEFAULT_CITY", "Lisbon")],
        || {
            let result = config::run();
            assert_eq!(result.exit_code, 0);
            let output = result.output;

            assert!(output
                .starts_with("effective config (source precedence: env > file > default):"));
            assert!(output.contains(
                "- weather.api_key = <redacted>…6789 (source: env (WEATHER_API_KEY))"
            ));
            assert!(
                output.contains("- defaults.city = Lisbon (source: env (STYLIST_DEFAULT_CITY))")
            );
            assert!(output.contains("- server.port = 5000 (source: default)"));
            assert!(!output.contains("abcdef0123456789"));
        },
    );
}

#[test]
fn config_exits_non_zero_when_validation_fails() {
    with_env(&[], || {
        let result = config::run();
        assert_eq!(result.exit_code, EXIT_CONFIG);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "config");
        assert_eq!(payload["error_class"], "config_validation");
        assert!(payload["message"].as_str().unwrap_or("").contains("weather.api_key"));
    });
}

#[test]
fn favorites_does_not_need_a_weather_api_key() {
    let dir = TempDir::new().expect("temp dir");
    let favorites_path = dir.path().join("favorites.json");
    std::fs::write(&favorites_path, r#"["offline look"]"#).expect("seed favorites");
    let favorites_str = favorites_path.to_str().expect("utf-8 path").to_string();

    with_env(&[("STYLIST_FAVORITES_PATH", favorites_str.as_str())], || {
        let result = favorites::run(FavoritesArgs::default());
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output, "Saved outfits (1):\n\n1. offline look");
    });
}

#[test]
fn recommend_warnings_are_not_repeated_in_info_logs() {
    let dir = TempDir::new().expect("temp dir");
    let favorites_str = dir.path().join("favorites.json").to_str().expect("utf-8").to_string();

    with_env(
        &[
            ("STYLIST_WEATHER_API_KEY", "test-key"),
            ("STYLIST_WEATHER_BASE_URL", OFFLINE_WEATHER),
            ("STYLIST_FAVORITES_PATH", favorites_str.as_str()),
        ],
        || {
            let logs = CapturedLogs::default();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(Level::INFO)
                .with_writer(logs.clone())
                .finish();

            let result = tracing::subscriber::with_default(subscriber, || {
                recommend::run(RecommendArgs {
                    city: Some("Paris".to_string()),
                    ..RecommendArgs::default()
                })
            });
            assert_eq!(result.exit_code, 0);
            assert!(result.output.starts_with("Error: Invalid city - "));

            let logged = logs.contents();
            assert!(logged.contains("recommend.completed"), "info events are captured");
            assert!(!logged.contains("recommend.city.substituted"));
            assert!(!logged.contains("recommend.weather.fallback"));
            assert!(!logged.contains("weather.forecast.failed"));
        },
    );
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "STYLIST_WEATHER_API_KEY",
        "WEATHER_API_KEY",
        "STYLIST_WEATHER_BASE_URL",
        "STYLIST_WEATHER_TIMEOUT_SECS",
        "STYLIST_DEFAULT_CITY",
        "STYLIST_FALLBACK_TEMPERATURE_C",
        "STYLIST_FALLBACK_CONDITION",
        "STYLIST_FAVORITES_PATH",
        "STYLIST_SERVER_BIND_ADDRESS",
        "STYLIST_SERVER_PORT",
        "STYLIST_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "STYLIST_LOGGING_LEVEL",
        "STYLIST_LOGGING_FORMAT",
        "STYLIST_LOG_LEVEL",
        "STYLIST_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
