pub mod forecast;
pub mod outfit;

pub use forecast::{ForecastDay, ForecastDayError};
pub use outfit::{Color, ColorKey, Gender, Mood, Occasion, VocabularyError};
