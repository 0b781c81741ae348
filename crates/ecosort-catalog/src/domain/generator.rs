//! Round generation: the per-city item pool and random draws from it.

use ecosort_core::error::DomainError;
use ecosort_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, resolve_effective_bin};
use super::model::{City, Difficulty};

/// An item template made playable in one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleItem {
    /// Registry key of the template.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Emoji shown for the item.
    pub emoji: String,
    /// Short description.
    pub description: String,
    /// Difficulty tag of the template.
    pub difficulty: Option<Difficulty>,
    /// The city bin that lists this item. Always a bin of the city.
    pub bin_id: String,
    /// The bin id a choice is compared against (`bin_id` after
    /// recycling-island resolution).
    pub correct_bin: String,
}

/// Builds the round pool for `city`: one entry per (bin, keyword) pair whose
/// keyword exists in the registry. An item listed under two bins appears
/// twice, once per bin.
#[must_use]
pub fn eligible_items(catalog: &Catalog, city: &City) -> Vec<EligibleItem> {
    city.bins
        .iter()
        .flat_map(|bin| {
            bin.item_keys.iter().filter_map(move |key| {
                catalog.item(key).map(|template| EligibleItem {
                    key: template.key.clone(),
                    name: template.name.clone(),
                    emoji: template.emoji.clone(),
                    description: template.description.clone(),
                    difficulty: template.difficulty,
                    bin_id: bin.id.clone(),
                    correct_bin: resolve_effective_bin(city, &bin.id).to_owned(),
                })
            })
        })
        .collect()
}

/// Draws one item uniformly from the pool of `city`.
///
/// With a difficulty filter, only items tagged with that difficulty are
/// candidates; if none are, the whole pool is used instead.
///
/// # Errors
///
/// Returns `DomainError::EmptyCatalog` if the city has no eligible items.
pub fn next_item(
    catalog: &Catalog,
    city: &City,
    difficulty: Option<Difficulty>,
    rng: &mut dyn DeterministicRng,
) -> Result<EligibleItem, DomainError> {
    let pool = eligible_items(catalog, city);
    if pool.is_empty() {
        return Err(DomainError::EmptyCatalog(city.id.clone()));
    }

    let filtered: Vec<&EligibleItem> = match difficulty {
        Some(level) => pool
            .iter()
            .filter(|item| item.difficulty == Some(level))
            .collect(),
        None => pool.iter().collect(),
    };
    let candidates = if filtered.is_empty() {
        tracing::debug!(
            city_id = %city.id,
            difficulty = ?difficulty,
            "no items match difficulty; drawing from full pool"
        );
        pool.iter().collect()
    } else {
        filtered
    };

    let max = u32::try_from(candidates.len() - 1).unwrap_or(u32::MAX);
    let index = rng.next_u32_range(0, max) as usize % candidates.len();
    Ok(candidates[index].clone())
}
