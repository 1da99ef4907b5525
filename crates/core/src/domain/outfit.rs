use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported {kind} `{value}` (expected {expected})")]
pub struct VocabularyError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl VocabularyError {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self { kind, value: value.to_string(), expected: expected.join("|") }
    }
}

fn fold(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Casual,
    Formal,
    Work,
    Party,
    DateNight,
}

impl Occasion {
    pub const ALL: [Occasion; 5] =
        [Self::Casual, Self::Formal, Self::Work, Self::Party, Self::DateNight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Work => "work",
            Self::Party => "party",
            Self::DateNight => "date_night",
        }
    }

    /// Lenient parse used by the engine: anything unrecognized becomes `casual`.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or(Self::Casual)
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl FromStr for Occasion {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = fold(value);
        Self::ALL
            .into_iter()
            .find(|occasion| occasion.as_str() == folded)
            .ok_or_else(|| VocabularyError::new("occasion", value, &Self::names()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Self::Male, Self::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or(Self::Male)
    }
}

impl FromStr for Gender {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match fold(value).as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(VocabularyError::new("gender", value, &["male", "female"])),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Bold,
    Minimal,
    Cozy,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Self::Bold, Self::Minimal, Self::Cozy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Minimal => "minimal",
            Self::Cozy => "cozy",
        }
    }

    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or(Self::Minimal)
    }
}

impl FromStr for Mood {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match fold(value).as_str() {
            "bold" => Ok(Self::Bold),
            "minimal" => Ok(Self::Minimal),
            "cozy" => Ok(Self::Cozy),
            _ => Err(VocabularyError::new("mood", value, &["bold", "minimal", "cozy"])),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue,
    Red,
    Black,
    White,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Gray,
    Navy,
    Beige,
}

impl Color {
    pub const ALL: [Color; 12] = [
        Self::Blue,
        Self::Red,
        Self::Black,
        Self::White,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::Pink,
        Self::Gray,
        Self::Navy,
        Self::Beige,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Black => "black",
            Self::White => "white",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Gray => "gray",
            Self::Navy => "navy",
            Self::Beige => "beige",
        }
    }
}

impl FromStr for Color {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = fold(value);
        Self::ALL.into_iter().find(|color| color.as_str() == folded).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
            VocabularyError::new("color", value, &names)
        })
    }
}

/// Color axis of the catalog: one of the named colors or the per-subtree
/// `default` leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorKey {
    Named(Color),
    Default,
}

impl ColorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Named(color) => color.as_str(),
            Self::Default => "default",
        }
    }

    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse::<Color>().ok()).map(Self::Named).unwrap_or(Self::Default)
    }
}

impl Serialize for ColorKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<Color> for ColorKey {
    fn from(color: Color) -> Self {
        Self::Named(color)
    }
}

impl FromStr for ColorKey {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if fold(value) == "default" {
            return Ok(Self::Default);
        }
        value.parse::<Color>().map(Self::Named).map_err(|mut error| {
            error.expected.push_str("|default");
            error
        })
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(Occasion, Gender, Mood, Color, ColorKey);

#[cfg(test)]
mod tests {
    use super::{Color, ColorKey, Gender, Mood, Occasion};

    #[test]
    fn strict_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" Date_Night ".parse::<Occasion>(), Ok(Occasion::DateNight));
        assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("Cozy".parse::<Mood>(), Ok(Mood::Cozy));
        assert_eq!("NAVY".parse::<ColorKey>(), Ok(ColorKey::Named(Color::Navy)));
        assert_eq!("Default".parse::<ColorKey>(), Ok(ColorKey::Default));
    }

    #[test]
    fn strict_parse_reports_expected_values() {
        let error = "teal".parse::<ColorKey>().expect_err("teal is not in the palette");
        assert_eq!(error.kind, "color");
        assert!(error.expected.ends_with("beige|default"));
        assert!(error.to_string().contains("`teal`"));
    }

    #[test]
    fn normalize_applies_documented_fallbacks() {
        assert_eq!(Occasion::normalize(Some("brunch")), Occasion::Casual);
        assert_eq!(Occasion::normalize(None), Occasion::Casual);
        assert_eq!(Gender::normalize(Some("other")), Gender::Male);
        assert_eq!(Gender::normalize(None), Gender::Male);
        assert_eq!(Mood::normalize(Some("loud")), Mood::Minimal);
        assert_eq!(ColorKey::normalize(Some("teal")), ColorKey::Default);
        assert_eq!(ColorKey::normalize(Some("")), ColorKey::Default);
        assert_eq!(ColorKey::normalize(Some("Pink")), ColorKey::Named(Color::Pink));
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(Occasion::DateNight.to_string(), "date_night");
        assert_eq!(ColorKey::Default.to_string(), "default");
        assert_eq!(ColorKey::Named(Color::Gray).to_string(), "gray");
    }
}
