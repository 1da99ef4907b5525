//! Outfit catalog keyed by `(occasion, gender, color, mood)`.
//!
//! Lookups degrade one level at a time: an occasion with no rows resolves to
//! `casual`, and a color missing from an occasion/gender subtree resolves to
//! that subtree's `default` leaf. Both fallbacks are guaranteed to exist by
//! [`OutfitCatalog::from_rows`].

mod data;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{ColorKey, Gender, Mood, Occasion};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogRow {
    pub occasion: Occasion,
    pub gender: Gender,
    pub color: ColorKey,
    pub mood: Mood,
    pub items: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OutfitEntry {
    pub items: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CatalogKey {
    occasion: Occasion,
    gender: Gender,
    color: ColorKey,
    mood: Mood,
}

/// Result of resolving a request against the catalog, with the keys that
/// were actually used after fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub occasion: Occasion,
    pub color: ColorKey,
    pub entry: OutfitEntry,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog entry for {occasion}/{gender}/{color}/{mood}")]
    DuplicateEntry { occasion: Occasion, gender: Gender, color: ColorKey, mood: Mood },
    #[error("catalog subtree {occasion}/{gender}/{color} is missing mood `{mood}`")]
    MissingMood { occasion: Occasion, gender: Gender, color: ColorKey, mood: Mood },
    #[error("catalog subtree {occasion}/{gender} has no `default` color entries")]
    MissingDefaultColor { occasion: Occasion, gender: Gender },
    #[error("catalog must populate `casual` for gender `{0}`")]
    MissingCasual(Gender),
}

#[derive(Clone, Debug)]
pub struct OutfitCatalog {
    entries: HashMap<CatalogKey, OutfitEntry>,
    subtrees: HashSet<(Occasion, Gender, ColorKey)>,
    occasions: HashSet<Occasion>,
}

impl OutfitCatalog {
    pub fn from_rows(rows: &[CatalogRow]) -> Result<Self, CatalogError> {
        let mut entries = HashMap::with_capacity(rows.len());
        let mut subtrees = HashSet::new();
        let mut occasions = HashSet::new();

        for row in rows {
            let key = CatalogKey {
                occasion: row.occasion,
                gender: row.gender,
                color: row.color,
                mood: row.mood,
            };
            let entry = OutfitEntry { items: row.items, description: row.description };
            if entries.insert(key, entry).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    occasion: row.occasion,
                    gender: row.gender,
                    color: row.color,
                    mood: row.mood,
                });
            }
            subtrees.insert((row.occasion, row.gender, row.color));
            occasions.insert(row.occasion);
        }

        let catalog = Self { entries, subtrees, occasions };
        catalog.check_invariants()?;
        Ok(catalog)
    }

    /// The shipped catalog, built on first use and shared for the process
    /// lifetime.
    pub fn builtin() -> &'static OutfitCatalog {
        static BUILTIN: OnceLock<OutfitCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| match Self::from_rows(data::SEED_ROWS) {
            Ok(catalog) => catalog,
            Err(error) => panic!("builtin outfit catalog is inconsistent: {error}"),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve_occasion(&self, occasion: Occasion) -> Occasion {
        if self.occasions.contains(&occasion) {
            occasion
        } else {
            Occasion::Casual
        }
    }

    /// Color fallback is per subtree: `pink` exists for casual but not for
    /// work, so work/pink resolves to work's `default`.
    pub fn resolve_color(&self, occasion: Occasion, gender: Gender, color: ColorKey) -> ColorKey {
        if self.subtrees.contains(&(occasion, gender, color)) {
            color
        } else {
            ColorKey::Default
        }
    }

    pub fn select(
        &self,
        occasion: Occasion,
        gender: Gender,
        color: ColorKey,
        mood: Mood,
    ) -> Selection {
        let occasion = self.resolve_occasion(occasion);
        let color = self.resolve_color(occasion, gender, color);
        let key = CatalogKey { occasion, gender, color, mood };

        match self.entries.get(&key) {
            Some(entry) => Selection { occasion, color, entry: *entry },
            None => {
                // Unreachable for catalogs built through `from_rows`, which
                // requires every subtree to carry all three moods.
                let anchor = CatalogKey {
                    occasion: Occasion::Casual,
                    gender,
                    color: ColorKey::Default,
                    mood,
                };
                let entry = self.entries.get(&anchor).copied().unwrap_or(OutfitEntry {
                    items: "",
                    description: "",
                });
                Selection { occasion: Occasion::Casual, color: ColorKey::Default, entry }
            }
        }
    }

    fn check_invariants(&self) -> Result<(), CatalogError> {
        for gender in Gender::ALL {
            if !self.subtrees.contains(&(Occasion::Casual, gender, ColorKey::Default)) {
                return Err(CatalogError::MissingCasual(gender));
            }
        }

        for &(occasion, gender, color) in &self.subtrees {
            for mood in Mood::ALL {
                let key = CatalogKey { occasion, gender, color, mood };
                if !self.entries.contains_key(&key) {
                    return Err(CatalogError::MissingMood { occasion, gender, color, mood });
                }
            }
            if !self.subtrees.contains(&(occasion, gender, ColorKey::Default)) {
                return Err(CatalogError::MissingDefaultColor { occasion, gender });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{data, CatalogError, CatalogRow, OutfitCatalog};
    use crate::domain::{Color, ColorKey, Gender, Mood, Occasion};

    fn leaf(
        occasion: Occasion,
        gender: Gender,
        color: ColorKey,
        items: &'static str,
    ) -> Vec<CatalogRow> {
        Mood::ALL
            .into_iter()
            .map(|mood| CatalogRow { occasion, gender, color, mood, items, description: "test" })
            .collect()
    }

    fn minimal_rows() -> Vec<CatalogRow> {
        let mut rows = Vec::new();
        rows.extend(leaf(Occasion::Casual, Gender::Male, ColorKey::Default, "casual male"));
        rows.extend(leaf(Occasion::Casual, Gender::Female, ColorKey::Default, "casual female"));
        rows
    }

    #[test]
    fn builtin_catalog_has_every_seed_row() {
        let catalog = OutfitCatalog::builtin();
        assert_eq!(catalog.len(), data::SEED_ROWS.len());
        assert_eq!(catalog.len(), 126);
    }

    #[test]
    fn builtin_catalog_keeps_uneven_color_coverage() {
        let catalog = OutfitCatalog::builtin();
        for color in Color::ALL {
            assert_eq!(
                catalog.resolve_color(Occasion::Casual, Gender::Female, color.into()),
                ColorKey::Named(color),
                "casual covers every color"
            );
        }
        for occasion in [Occasion::Formal, Occasion::Work, Occasion::Party, Occasion::DateNight] {
            assert_eq!(
                catalog.resolve_color(occasion, Gender::Male, Color::Blue.into()),
                ColorKey::Named(Color::Blue)
            );
            assert_eq!(
                catalog.resolve_color(occasion, Gender::Male, Color::Red.into()),
                ColorKey::Default,
                "{occasion} only carries blue and default"
            );
        }
    }

    #[test]
    fn casual_female_red_minimal_is_populated() {
        let selection = OutfitCatalog::builtin().select(
            Occasion::Casual,
            Gender::Female,
            Color::Red.into(),
            Mood::Minimal,
        );
        assert_eq!(selection.color, ColorKey::Named(Color::Red));
        assert_eq!(selection.entry.items, "Red blouse, white jeans, flats");
    }

    #[test]
    fn occasion_without_rows_resolves_to_casual() {
        let catalog = OutfitCatalog::from_rows(&minimal_rows()).expect("valid catalog");

        assert_eq!(catalog.resolve_occasion(Occasion::Party), Occasion::Casual);
        let selection =
            catalog.select(Occasion::Party, Gender::Female, Color::Blue.into(), Mood::Bold);
        assert_eq!(selection.occasion, Occasion::Casual);
        assert_eq!(selection.color, ColorKey::Default);
        assert_eq!(selection.entry.items, "casual female");
    }

    #[test]
    fn color_fallback_is_scoped_to_the_subtree() {
        let mut rows = minimal_rows();
        rows.extend(leaf(Occasion::Casual, Gender::Male, Color::Green.into(), "green male"));
        let catalog = OutfitCatalog::from_rows(&rows).expect("valid catalog");

        let male = catalog.select(Occasion::Casual, Gender::Male, Color::Green.into(), Mood::Cozy);
        let female =
            catalog.select(Occasion::Casual, Gender::Female, Color::Green.into(), Mood::Cozy);

        assert_eq!(male.entry.items, "green male");
        assert_eq!(female.color, ColorKey::Default);
        assert_eq!(female.entry.items, "casual female");
    }

    #[test]
    fn rejects_subtree_missing_a_mood() {
        let mut rows = minimal_rows();
        rows.push(CatalogRow {
            occasion: Occasion::Work,
            gender: Gender::Male,
            color: ColorKey::Default,
            mood: Mood::Bold,
            items: "only bold",
            description: "test",
        });

        let error = OutfitCatalog::from_rows(&rows).expect_err("missing moods must be rejected");
        assert!(matches!(error, CatalogError::MissingMood { occasion: Occasion::Work, .. }));
    }

    #[test]
    fn rejects_occasion_without_default_color() {
        let mut rows = minimal_rows();
        rows.extend(leaf(Occasion::Formal, Gender::Female, Color::Blue.into(), "formal blue"));

        let error = OutfitCatalog::from_rows(&rows).expect_err("default leaf is required");
        assert_eq!(
            error,
            CatalogError::MissingDefaultColor { occasion: Occasion::Formal, gender: Gender::Female }
        );
    }

    #[test]
    fn rejects_missing_casual_and_duplicates() {
        let male_only = leaf(Occasion::Casual, Gender::Male, ColorKey::Default, "male");
        assert_eq!(
            OutfitCatalog::from_rows(&male_only).expect_err("casual female missing"),
            CatalogError::MissingCasual(Gender::Female)
        );

        let mut rows = minimal_rows();
        rows.push(rows[0]);
        assert!(matches!(
            OutfitCatalog::from_rows(&rows),
            Err(CatalogError::DuplicateEntry { .. })
        ));
    }
}
