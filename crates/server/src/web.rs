//! Browser-facing routes: the recommendation form, favorites and the city
//! lookup used by the form's client-side validation.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use stylist_core::domain::{Color, ForecastDay, Gender, Mood, Occasion};
use stylist_core::errors::{ApplicationError, DomainError};
use stylist_core::service::{RecommendationRequest, RecommendationService};
use stylist_core::weather::CityValidation;
use stylist_store::FavoritesRepository;
use tera::{Context, Tera};
use tracing::{error, info, warn};
use uuid::Uuid;

const INVALID_DAY_MESSAGE: &str = "Forecast day must be a whole number from 0 to 3.";
const EMPTY_OUTFIT_MESSAGE: &str = "Outfit text is required.";

#[derive(Clone)]
pub struct WebState {
    service: RecommendationService,
    favorites: Arc<dyn FavoritesRepository>,
    templates: Arc<Tera>,
}

impl WebState {
    pub fn new(
        service: RecommendationService,
        favorites: Arc<dyn FavoritesRepository>,
        templates: Arc<Tera>,
    ) -> Self {
        Self { service, favorites, templates }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_mood")]
    pub mood: String,
    /// Absent means the configured default city; present but blank is an
    /// error.
    pub city: Option<String>,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_day")]
    pub day: String,
}

fn default_occasion() -> String {
    Occasion::Casual.to_string()
}

fn default_color() -> String {
    "default".to_string()
}

fn default_mood() -> String {
    Mood::Minimal.to_string()
}

fn default_gender() -> String {
    Gender::Male.to_string()
}

fn default_day() -> String {
    ForecastDay::TODAY.to_string()
}

/// Echoed back into the form so a re-render keeps the user's selections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub occasion: String,
    pub color: String,
    pub mood: String,
    pub city: String,
    pub gender: String,
    pub day: String,
}

impl FormState {
    fn defaults(city: &str) -> Self {
        Self {
            occasion: default_occasion(),
            color: default_color(),
            mood: default_mood(),
            city: city.to_string(),
            gender: default_gender(),
            day: default_day(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RecommendationView {
    summary: String,
    description: String,
    text: String,
}

#[derive(Debug, Default)]
struct PageModel {
    recommendation: Option<RecommendationView>,
    error: Option<String>,
    warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveFavoriteForm {
    #[serde(default)]
    pub outfit: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SaveFavoriteResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateCityQuery {
    #[serde(default)]
    pub city: String,
}

pub fn init_templates() -> Arc<Tera> {
    let mut tera = match Tera::new("templates/web/**/*") {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "failed to load web templates from disk, using built-in copies");
            Tera::default()
        }
    };

    if !tera.get_template_names().any(|name| name == "index.html") {
        tera.add_raw_template("index.html", include_str!("../../../templates/web/index.html"))
            .ok();
    }
    if !tera.get_template_names().any(|name| name == "favorites.html") {
        tera.add_raw_template(
            "favorites.html",
            include_str!("../../../templates/web/favorites.html"),
        )
        .ok();
    }

    Arc::new(tera)
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index).post(recommend))
        .route("/save_favorite", post(save_favorite))
        .route("/favorites", get(list_favorites))
        .route("/validate_city", get(validate_city))
        .with_state(state)
}

pub async fn index(
    State(state): State<WebState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let form = FormState::defaults(state.service.default_city());
    render_index(&state, &form, PageModel::default())
}

pub async fn recommend(
    State(state): State<WebState>,
    Form(form): Form<RecommendForm>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let correlation_id = Uuid::new_v4().to_string();
    let mut echoed = FormState {
        occasion: form.occasion,
        color: form.color,
        mood: form.mood,
        city: form
            .city
            .map(|city| city.trim().to_string())
            .unwrap_or_else(|| state.service.default_city().to_string()),
        gender: form.gender,
        day: form.day.trim().to_string(),
    };

    let day = match ForecastDay::from_str(&echoed.day) {
        Ok(day) => day,
        Err(parse_error) => {
            let interface = ApplicationError::from(DomainError::from(parse_error))
                .into_interface(correlation_id.clone());
            info!(
                event_name = "web.recommend.rejected",
                correlation_id = %correlation_id,
                error = %interface,
                "forecast day rejected"
            );
            let page =
                PageModel { error: Some(INVALID_DAY_MESSAGE.to_string()), ..PageModel::default() };
            return render_index(&state, &echoed, page);
        }
    };

    let request = RecommendationRequest {
        occasion: echoed.occasion.clone(),
        color: echoed.color.clone(),
        mood: echoed.mood.clone(),
        gender: echoed.gender.clone(),
        city: echoed.city.clone(),
        day,
    };

    let page = match state.service.recommend(&request).await {
        Ok(outcome) => {
            echoed.city = outcome.city.clone();
            let text = outcome.recommendation.to_string();
            let summary = text.split("\n\n").next().unwrap_or_default().to_string();
            info!(
                event_name = "web.recommend.rendered",
                correlation_id = %correlation_id,
                city = %outcome.city,
                warnings = outcome.warnings.len(),
                "recommendation rendered"
            );
            PageModel {
                recommendation: Some(RecommendationView {
                    summary,
                    description: outcome.recommendation.description.clone(),
                    text,
                }),
                error: None,
                warnings: outcome.warnings.iter().map(ToString::to_string).collect(),
            }
        }
        Err(ApplicationError::Validation(message)) => {
            PageModel { error: Some(message), ..PageModel::default() }
        }
        Err(other) => {
            let interface = other.into_interface(correlation_id.clone());
            error!(
                event_name = "web.recommend.failed",
                correlation_id = %correlation_id,
                error = %interface,
                "recommendation failed"
            );
            PageModel { error: Some(interface.user_message().to_string()), ..PageModel::default() }
        }
    };

    render_index(&state, &echoed, page)
}

pub async fn save_favorite(
    State(state): State<WebState>,
    Form(form): Form<SaveFavoriteForm>,
) -> (StatusCode, Json<SaveFavoriteResponse>) {
    let correlation_id = Uuid::new_v4().to_string();
    if form.outfit.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SaveFavoriteResponse {
                status: "error",
                error: Some(EMPTY_OUTFIT_MESSAGE.to_string()),
                correlation_id: Some(correlation_id),
            }),
        );
    }

    match state.favorites.append(form.outfit).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SaveFavoriteResponse { status: "success", error: None, correlation_id: None }),
        ),
        Err(repository_error) => {
            let interface = ApplicationError::Persistence(repository_error.to_string())
                .into_interface(correlation_id.clone());
            error!(
                event_name = "web.favorites.save_failed",
                correlation_id = %correlation_id,
                error = %interface,
                "favorite could not be saved"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(SaveFavoriteResponse {
                    status: "error",
                    error: Some(interface.user_message().to_string()),
                    correlation_id: Some(correlation_id),
                }),
            )
        }
    }
}

pub async fn list_favorites(
    State(state): State<WebState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let favorites = state.favorites.list().await.map_err(|repository_error| {
        let correlation_id = Uuid::new_v4().to_string();
        let interface = ApplicationError::Persistence(repository_error.to_string())
            .into_interface(correlation_id.clone());
        error!(
            event_name = "web.favorites.list_failed",
            correlation_id = %correlation_id,
            error = %interface,
            "favorites could not be loaded"
        );
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Html(format!(
                "<h1>Favorites unavailable</h1><p>{}</p><p>Reference: {}</p>",
                interface.user_message(),
                interface.correlation_id()
            )),
        )
    })?;

    let mut context = Context::new();
    context.insert("favorites", &favorites);
    render(&state.templates, "favorites.html", &context)
}

pub async fn validate_city(
    State(state): State<WebState>,
    Query(query): Query<ValidateCityQuery>,
) -> Json<CityValidation> {
    Json(state.service.validate_city(&query.city).await)
}

fn render_index(
    state: &WebState,
    form: &FormState,
    page: PageModel,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let mut context = Context::new();
    context.insert("defaults", form);
    context.insert("recommendation", &page.recommendation);
    context.insert("error", &page.error);
    context.insert("warnings", &page.warnings);
    context.insert("occasions", &Occasion::ALL.map(|occasion| occasion.as_str()));
    context.insert("colors", &Color::ALL.map(|color| color.as_str()));
    context.insert("moods", &Mood::ALL.map(|mood| mood.as_str()));
    context.insert("genders", &Gender::ALL.map(|gender| gender.as_str()));
    context.insert("days", &day_options());
    context.insert("timestamp", &Utc::now().timestamp());
    render(&state.templates, "index.html", &context)
}

#[derive(Debug, Serialize)]
struct DayOption {
    value: String,
    label: String,
}

fn day_options() -> Vec<DayOption> {
    (0..=ForecastDay::MAX)
        .filter_map(|offset| ForecastDay::try_from(offset).ok())
        .map(|day| DayOption { value: day.to_string(), label: day.label() })
        .collect()
}

fn render(
    templates: &Tera,
    name: &str,
    context: &Context,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    templates.render(name, context).map(Html).map_err(|e| {
        error!(
            event_name = "web.template.error",
            template = name,
            error = ?e,
            "template render failed"
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>Template Error</h1>".to_string()))
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        extract::{Query, State},
        http::{header, Request, StatusCode},
        Form,
    };
    use stylist_core::domain::ForecastDay;
    use stylist_core::service::RecommendationService;
    use stylist_core::weather::{CityValidator, WeatherError, WeatherProvider, WeatherReading};
    use stylist_store::{FavoritesRepository, InMemoryFavoritesRepository, RepositoryError};
    use tower::ServiceExt;

    use super::{
        init_templates, list_favorites, recommend, router, save_favorite, validate_city,
        RecommendForm, SaveFavoriteForm, ValidateCityQuery, WebState,
    };

    struct KnownCities;

    #[async_trait]
    impl CityValidator for KnownCities {
        async fn city_exists(&self, city: &str) -> Result<bool, WeatherError> {
            Ok(["London", "Paris", "Oslo"].contains(&city))
        }
    }

    struct FixedWeather(Option<WeatherReading>);

    #[async_trait]
    impl WeatherProvider for FixedWeather {
        async fn fetch(
            &self,
            _city: &str,
            _day: ForecastDay,
        ) -> Result<WeatherReading, WeatherError> {
            self.0.clone().ok_or_else(|| WeatherError::Network("timed out".into()))
        }
    }

    struct BrokenFavorites;

    #[async_trait]
    impl FavoritesRepository for BrokenFavorites {
        async fn append(&self, _entry: String) -> Result<(), RepositoryError> {
            Err(RepositoryError::Io(std::io::Error::other("disk full")))
        }

        async fn list(&self) -> Result<Vec<String>, RepositoryError> {
            Err(RepositoryError::Decode("not an array".into()))
        }
    }

    fn web_state(
        weather: Option<WeatherReading>,
        favorites: Arc<dyn FavoritesRepository>,
    ) -> WebState {
        let service = RecommendationService::new(
            Arc::new(KnownCities),
            Arc::new(FixedWeather(weather)),
            "London",
            WeatherReading::fallback(),
        );
        WebState::new(service, favorites, init_templates())
    }

    fn sunny() -> Option<WeatherReading> {
        Some(WeatherReading::new(22.0, "Sunny"))
    }

    fn form(city: Option<&str>, day: &str) -> RecommendForm {
        RecommendForm {
            occasion: "work".into(),
            color: "pink".into(),
            mood: "minimal".into(),
            city: city.map(str::to_string),
            gender: "female".into(),
            day: day.into(),
        }
    }

    #[tokio::test]
    async fn recommend_renders_outfit_for_valid_city() {
        let state = web_state(sunny(), Arc::new(InMemoryFavoritesRepository::default()));

        let html = recommend(State(state), Form(form(Some("Paris"), "0")))
            .await
            .expect("page renders")
            .0;

        assert!(html.contains(
            "Recommended outfit for work in pink (Mood: minimal, Gender: female, Weather: 22°C, \
             sunny, City: Paris, Today): Gray blouse, black skirt, flats"
        ));
        assert!(html.contains("Simple gray work look."));
        assert!(!html.contains("Invalid city"));
    }

    #[tokio::test]
    async fn recommend_substitutes_default_city_and_keeps_going() {
        let state = web_state(None, Arc::new(InMemoryFavoritesRepository::default()));

        let html = recommend(State(state), Form(form(Some("Atlantis"), "1")))
            .await
            .expect("page renders")
            .0;

        assert!(html
            .contains("Invalid city: City not found. Please select a valid city. Using London."));
        assert!(html.contains("Network error: timed out."));
        assert!(html.contains("Weather: 15°C, partly cloudy, City: London, In 1 day"));
        assert!(html.contains(r#"value="London""#));
    }

    #[tokio::test]
    async fn recommend_rejects_blank_city_and_bad_day() {
        let state = web_state(sunny(), Arc::new(InMemoryFavoritesRepository::default()));

        let blank = recommend(State(state.clone()), Form(form(Some("   "), "0")))
            .await
            .expect("page renders")
            .0;
        assert!(blank.contains("City name cannot be empty."));
        assert!(!blank.contains("Recommended outfit"));

        for day in ["7", "tomorrow", "-1"] {
            let html = recommend(State(state.clone()), Form(form(Some("Paris"), day)))
                .await
                .expect("page renders")
                .0;
            assert!(html.contains("Forecast day must be a whole number from 0 to 3."), "{day}");
            assert!(!html.contains("Recommended outfit"));
        }
    }

    #[tokio::test]
    async fn save_favorite_appends_and_rejects_empty_text() {
        let favorites = Arc::new(InMemoryFavoritesRepository::default());
        let state = web_state(sunny(), favorites.clone());

        let (status, body) = save_favorite(
            State(state.clone()),
            Form(SaveFavoriteForm { outfit: "Navy suit, white shirt".into() }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.0.status, "success");

        let (status, body) =
            save_favorite(State(state), Form(SaveFavoriteForm { outfit: "  ".into() })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error.as_deref(), Some("Outfit text is required."));

        assert_eq!(favorites.list().await.expect("list"), vec!["Navy suit, white shirt"]);
    }

    #[tokio::test]
    async fn store_failures_surface_as_service_unavailable() {
        let state = web_state(sunny(), Arc::new(BrokenFavorites));

        let (status, body) = save_favorite(
            State(state.clone()),
            Form(SaveFavoriteForm { outfit: "anything".into() }),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body.0.error.as_deref(),
            Some("The service is temporarily unavailable. Please retry shortly.")
        );
        assert!(body.0.correlation_id.is_some());

        let (status, _) = list_favorites(State(state)).await.expect_err("list fails");
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn favorites_page_lists_saved_outfits() {
        let favorites = Arc::new(InMemoryFavoritesRepository::with_entries(vec![
            "Outfit <one>".to_string(),
            "Outfit two".to_string(),
        ]));
        let state = web_state(sunny(), favorites);

        let html = list_favorites(State(state)).await.expect("page renders").0;

        assert!(html.contains("Outfit &lt;one&gt;"));
        assert!(html.contains("Outfit two"));
    }

    #[tokio::test]
    async fn validate_city_reports_lookup_result() {
        let state = web_state(sunny(), Arc::new(InMemoryFavoritesRepository::default()));

        let found = validate_city(
            State(state.clone()),
            Query(ValidateCityQuery { city: "Oslo".into() }),
        )
        .await;
        assert!(found.0.valid);
        assert_eq!(found.0.error, None);

        let missing =
            validate_city(State(state), Query(ValidateCityQuery { city: "Narnia".into() })).await;
        assert!(!missing.0.valid);
    }

    #[tokio::test]
    async fn router_serves_form_defaults_and_form_posts() {
        let app = router(web_state(sunny(), Arc::new(InMemoryFavoritesRepository::default())));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains(r#"value="London""#));
        assert!(!html.contains("Recommended outfit"));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("occasion=party&color=blue&mood=bold&city=Oslo&day=2"))
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Recommended outfit for party in blue (Mood: bold, Gender: male"));
        assert!(html.contains("City: Oslo, In 2 days"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/validate_city?city=Atlantis")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload["valid"], false);
        assert_eq!(payload["error"], "City not found. Please select a valid city.");
    }
}
