//! Outfit recommendation engine.
//!
//! A pure function of its inputs: normalize the request, select a catalog
//! leaf, then layer weather-driven additions onto the item list.

use std::fmt;

use serde::Serialize;

use crate::catalog::OutfitCatalog;
use crate::domain::{ColorKey, ForecastDay, Gender, Mood, Occasion};
use crate::weather::WeatherReading;

const RAIN_WORDS: [&str; 3] = ["rain", "shower", "drizzle"];

/// Request after case folding and closed-set fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OutfitQuery {
    pub occasion: Occasion,
    pub color: ColorKey,
    pub mood: Mood,
    pub gender: Gender,
}

impl OutfitQuery {
    pub fn new(occasion: Occasion, color: ColorKey, mood: Mood, gender: Gender) -> Self {
        Self { occasion, color, mood, gender }
    }

    /// Each field falls back independently: color to `default`, gender to
    /// `male`, mood to `minimal`, occasion to `casual`.
    pub fn normalize(occasion: &str, color: &str, mood: &str, gender: &str) -> Self {
        Self {
            color: ColorKey::normalize(Some(color)),
            gender: Gender::normalize(Some(gender)),
            mood: Mood::normalize(Some(mood)),
            occasion: Occasion::normalize(Some(occasion)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeatherContext {
    pub city: String,
    pub day: ForecastDay,
    pub reading: WeatherReading,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    pub occasion: Occasion,
    pub color: ColorKey,
    /// Catalog color actually used; differs from `color` when the occasion
    /// does not carry the requested color.
    pub catalog_color: ColorKey,
    pub mood: Mood,
    pub gender: Gender,
    pub city: String,
    pub day: ForecastDay,
    pub weather: WeatherReading,
    pub items: String,
    pub description: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Recommended outfit for {} in {} (Mood: {}, Gender: {}, Weather: {}°C, {}, City: {}, {}): {}\n\n{}",
            self.occasion,
            self.color,
            self.mood,
            self.gender,
            self.weather.temperature_c,
            self.weather.condition,
            self.city,
            self.day.label(),
            self.items,
            self.description
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OutfitEngine<'a> {
    catalog: &'a OutfitCatalog,
}

impl Default for OutfitEngine<'static> {
    fn default() -> Self {
        Self::new(OutfitCatalog::builtin())
    }
}

impl<'a> OutfitEngine<'a> {
    pub fn new(catalog: &'a OutfitCatalog) -> Self {
        Self { catalog }
    }

    pub fn recommend(&self, query: &OutfitQuery, context: &WeatherContext) -> Recommendation {
        let selection = self.catalog.select(query.occasion, query.gender, query.color, query.mood);
        let items = dress_for_weather(selection.entry.items, &context.reading);

        Recommendation {
            occasion: selection.occasion,
            color: query.color,
            catalog_color: selection.color,
            mood: query.mood,
            gender: query.gender,
            city: context.city.clone(),
            day: context.day,
            weather: context.reading.clone(),
            items,
            description: selection.entry.description.to_string(),
        }
    }
}

/// Text-in, text-out form of the engine over the builtin catalog.
#[allow(clippy::too_many_arguments)]
pub fn recommend(
    occasion: &str,
    color: &str,
    temperature_c: f64,
    condition: &str,
    mood: &str,
    city: &str,
    gender: &str,
    day: ForecastDay,
) -> String {
    let query = OutfitQuery::normalize(occasion, color, mood, gender);
    let context = WeatherContext {
        city: city.to_string(),
        day,
        reading: WeatherReading::new(temperature_c, condition),
    };
    OutfitEngine::default().recommend(&query, &context).to_string()
}

/// Bands are checked in order and the first match wins; 18..=25 adds nothing.
pub fn temperature_layer(temperature_c: f64) -> Option<&'static str> {
    if temperature_c < 5.0 {
        Some("heavy winter coat, scarf")
    } else if temperature_c < 10.0 {
        Some("warm coat")
    } else if temperature_c < 18.0 {
        Some("light jacket")
    } else if temperature_c > 30.0 {
        Some("lightweight scarf")
    } else if temperature_c > 25.0 {
        Some("breathable hat")
    } else {
        None
    }
}

/// Precipitation beats snow, and snow beats clear skies.
pub fn condition_accessory(condition: &str, temperature_c: f64) -> Option<&'static str> {
    let condition = condition.to_lowercase();
    if RAIN_WORDS.iter().any(|word| condition.contains(word)) {
        Some("an umbrella")
    } else if condition.contains("snow") {
        Some("snow boots")
    } else if condition.contains("clear") && temperature_c > 20.0 {
        Some("sunglasses")
    } else {
        None
    }
}

pub fn dress_for_weather(base_items: &str, reading: &WeatherReading) -> String {
    let mut items = base_items.to_string();
    if let Some(layer) = temperature_layer(reading.temperature_c) {
        items.push_str(", ");
        items.push_str(layer);
    }
    if let Some(accessory) = condition_accessory(&reading.condition, reading.temperature_c) {
        items.push_str(", and ");
        items.push_str(accessory);
    }
    items
}
