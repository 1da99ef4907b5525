use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use stylist_core::domain::{ColorKey, ForecastDay, Gender, Mood, Occasion};
use stylist_core::engine::Recommendation;
use stylist_core::errors::ApplicationError;
use stylist_core::service::{
    RecommendationOutcome, RecommendationRequest, RecommendationService, RecommendationWarning,
};
use stylist_store::{FavoritesRepository, JsonFileFavoritesRepository};
use stylist_weather::WeatherApiClient;

use crate::commands::{
    load_config, runtime, CommandResult, EXIT_CONFIG, EXIT_PERSISTENCE, EXIT_VALIDATION,
};

const COMMAND: &str = "recommend";

#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    #[arg(long, default_value = "casual", help = "Occasion: casual|formal|work|party|date_night")]
    pub occasion: Occasion,
    #[arg(
        long,
        default_value = "default",
        help = "Color preference: blue|red|black|white|green|yellow|purple|orange|pink|gray|navy|beige|default"
    )]
    pub color: ColorKey,
    #[arg(long, default_value = "minimal", help = "Style mood: bold|minimal|cozy")]
    pub mood: Mood,
    #[arg(long, help = "City for the weather lookup [default: configured default city]")]
    pub city: Option<String>,
    #[arg(long, default_value = "male", help = "Gender: male|female")]
    pub gender: Gender,
    #[arg(long, default_value = "0", help = "Forecast day (0 = today, 1-3 = days ahead)")]
    pub day: ForecastDay,
    #[arg(long, help = "Append the recommendation to the favorites file")]
    pub save: bool,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

impl Default for RecommendArgs {
    fn default() -> Self {
        Self {
            occasion: Occasion::Casual,
            color: ColorKey::Default,
            mood: Mood::Minimal,
            city: None,
            gender: Gender::Male,
            day: ForecastDay::TODAY,
            save: false,
            json: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct RecommendPayload<'a> {
    command: &'static str,
    status: &'static str,
    text: String,
    city: &'a str,
    warnings: &'a [RecommendationWarning],
    recommendation: &'a Recommendation,
    saved: bool,
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let config = match load_config(COMMAND) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let client = match WeatherApiClient::from_config(&config.weather) {
        Ok(client) => Arc::new(client),
        Err(error) => {
            let (error_class, message, exit_code) =
                classify(ApplicationError::Configuration(error.to_string()));
            return CommandResult::failure(COMMAND, error_class, message, exit_code);
        }
    };
    let service = RecommendationService::new(
        client.clone(),
        client,
        config.defaults.city.clone(),
        config.fallback.reading(),
    );
    let favorites = JsonFileFavoritesRepository::new(&config.favorites.path);

    let runtime = match runtime(COMMAND) {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    let request = RecommendationRequest {
        occasion: args.occasion.to_string(),
        color: args.color.to_string(),
        mood: args.mood.to_string(),
        gender: args.gender.to_string(),
        city: args.city.clone().unwrap_or_else(|| config.defaults.city.clone()),
        day: args.day,
    };

    let result = runtime.block_on(async {
        let outcome = service.recommend(&request).await.map_err(classify)?;
        let text = outcome.recommendation.to_string();
        if args.save {
            favorites.append(text.clone()).await.map_err(|error| {
                ("persistence", format!("could not save favorite: {error}"), EXIT_PERSISTENCE)
            })?;
        }
        Ok::<_, (&'static str, String, u8)>((outcome, text))
    });

    match result {
        Ok((outcome, text)) if args.json => render_json(&outcome, text, args.save),
        Ok((outcome, text)) => CommandResult::text(render_text(&outcome, &text, args.save)),
        Err((error_class, message, exit_code)) => {
            CommandResult::failure(COMMAND, error_class, message, exit_code)
        }
    }
}

fn classify(error: ApplicationError) -> (&'static str, String, u8) {
    match error {
        ApplicationError::Validation(message) => ("validation", message, EXIT_VALIDATION),
        ApplicationError::Domain(error) => ("validation", error.to_string(), EXIT_VALIDATION),
        ApplicationError::Persistence(message) => ("persistence", message, EXIT_PERSISTENCE),
        ApplicationError::Configuration(message) => ("configuration", message, EXIT_CONFIG),
    }
}

fn render_text(outcome: &RecommendationOutcome, text: &str, saved: bool) -> String {
    let mut lines: Vec<String> = outcome.warnings.iter().map(warning_line).collect();
    lines.push(text.to_string());
    if saved {
        lines.push(String::new());
        lines.push("Saved to favorites.".to_string());
    }
    lines.join("\n")
}

fn warning_line(warning: &RecommendationWarning) -> String {
    match warning {
        RecommendationWarning::InvalidCity { error, substitute, .. } => {
            format!("Error: Invalid city - {}. Using {substitute}", error.trim_end_matches('.'))
        }
        RecommendationWarning::WeatherFallback { message } => format!("Warning: {message}"),
    }
}

fn render_json(outcome: &RecommendationOutcome, text: String, saved: bool) -> CommandResult {
    let payload = RecommendPayload {
        command: COMMAND,
        status: "ok",
        text,
        city: &outcome.city,
        warnings: &outcome.warnings,
        recommendation: &outcome.recommendation,
        saved,
    };
    match serde_json::to_string_pretty(&payload) {
        Ok(output) => CommandResult::text(output),
        Err(error) => CommandResult::failure(COMMAND, "serialization", error.to_string(), 1),
    }
}
