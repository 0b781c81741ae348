//! Catalog data model.

use std::fmt;
use std::str::FromStr;

use ecosort_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Id of the generic packaging bin.
pub const YELLOW_BIN: &str = "yellow";

/// Id of the communal recycling-island bin, scored as [`YELLOW_BIN`].
pub const RECYCLING_ISLAND_BIN: &str = "recycling_island";

/// How hard an item is to sort correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Obvious items (newspaper, apple core).
    Easy,
    /// Items that need some knowledge of the rules.
    Medium,
    /// Items most people get wrong.
    Hard,
}

impl Difficulty {
    /// Returns the lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(DomainError::Validation(format!(
                "unknown difficulty: {other}"
            ))),
        }
    }
}

/// A waste receptacle as a particular city labels it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    /// Bin id, unique within its city.
    pub id: String,
    /// Color label shown next to the bin.
    pub color: String,
    /// Local display name.
    pub name: String,
    /// Glyph shown on the bin.
    pub icon: String,
    /// Item keys this city collects in the bin, in display order.
    #[serde(rename = "items")]
    pub item_keys: Vec<String>,
}

/// A city and its ordered list of bins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City id (e.g. `berlin`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// The municipal waste authority.
    pub authority: String,
    /// Bins in display order.
    pub bins: Vec<Bin>,
}

impl City {
    /// Looks up a bin by id.
    #[must_use]
    pub fn bin(&self, bin_id: &str) -> Option<&Bin> {
        self.bins.iter().find(|bin| bin.id == bin_id)
    }

    /// Returns true if `bin_id` is one of this city's bins.
    #[must_use]
    pub fn has_bin(&self, bin_id: &str) -> bool {
        self.bin(bin_id).is_some()
    }

    /// Display name of a bin. Falls back to the bin listed as the recycling
    /// island when asked for the yellow bin of a city that has none.
    #[must_use]
    pub fn bin_name(&self, bin_id: &str) -> Option<&str> {
        self.bin(bin_id)
            .or_else(|| {
                (bin_id == YELLOW_BIN)
                    .then(|| self.bin(RECYCLING_ISLAND_BIN))
                    .flatten()
            })
            .map(|bin| bin.name.as_str())
    }
}

/// A waste item in the global registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Registry key, unique across the registry.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Emoji shown for the item.
    pub emoji: String,
    /// Short description.
    pub description: String,
    /// The bin the item usually belongs to. Cities override this through
    /// their own bin lists.
    #[serde(rename = "bin")]
    pub canonical_bin: String,
    /// Optional difficulty tag.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}
