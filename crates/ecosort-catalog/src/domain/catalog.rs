//! The immutable catalog of cities and waste items.

use std::collections::{BTreeMap, HashSet};

use ecosort_core::error::DomainError;
use serde::Deserialize;

use super::model::{City, ItemTemplate, RECYCLING_ISLAND_BIN, YELLOW_BIN};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.yaml");

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    cities: Vec<City>,
    items: Vec<ItemTemplate>,
}

/// Cities in display order plus the item registry. Loaded once, never
/// mutated, shared by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    items: BTreeMap<String, ItemTemplate>,
}

impl Catalog {
    /// Builds a catalog from already-parsed parts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if city ids, bin ids within a city,
    /// or item keys repeat, or if a city has no bins.
    pub fn new(cities: Vec<City>, items: Vec<ItemTemplate>) -> Result<Self, DomainError> {
        let mut city_ids = HashSet::new();
        for city in &cities {
            if !city_ids.insert(city.id.as_str()) {
                return Err(DomainError::Validation(format!(
                    "duplicate city id: {}",
                    city.id
                )));
            }
            if city.bins.is_empty() {
                return Err(DomainError::Validation(format!(
                    "city {} has no bins",
                    city.id
                )));
            }
            let mut bin_ids = HashSet::new();
            for bin in &city.bins {
                if !bin_ids.insert(bin.id.as_str()) {
                    return Err(DomainError::Validation(format!(
                        "duplicate bin id {} in city {}",
                        bin.id, city.id
                    )));
                }
            }
        }

        let mut registry = BTreeMap::new();
        for item in items {
            if registry.contains_key(&item.key) {
                return Err(DomainError::Validation(format!(
                    "duplicate item key: {}",
                    item.key
                )));
            }
            registry.insert(item.key.clone(), item);
        }

        tracing::debug!(
            cities = cities.len(),
            items = registry.len(),
            "catalog loaded"
        );

        Ok(Self {
            cities,
            items: registry,
        })
    }

    /// Parses a YAML catalog document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document is malformed or
    /// fails the checks of [`Catalog::new`].
    pub fn from_yaml(source: &str) -> Result<Self, DomainError> {
        let document: CatalogDocument = serde_yaml::from_str(source)
            .map_err(|e| DomainError::Validation(format!("catalog parse failed: {e}")))?;
        Self::new(document.cities, document.items)
    }

    /// Loads the catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the embedded document is invalid.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// All cities in display order.
    #[must_use]
    pub fn list_cities(&self) -> &[City] {
        &self.cities
    }

    /// Looks up a city by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CityNotFound` if no city has this id.
    pub fn get_city(&self, city_id: &str) -> Result<&City, DomainError> {
        self.cities
            .iter()
            .find(|city| city.id == city_id)
            .ok_or_else(|| DomainError::CityNotFound(city_id.to_owned()))
    }

    /// Looks up an item template by key.
    #[must_use]
    pub fn item(&self, key: &str) -> Option<&ItemTemplate> {
        self.items.get(key)
    }

    /// Number of templates in the registry.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Maps a bin id to the id it is scored as. The recycling island counts as
/// the yellow bin in every city; every other id maps to itself.
#[must_use]
pub fn resolve_effective_bin<'a>(_city: &City, bin_id: &'a str) -> &'a str {
    if bin_id == RECYCLING_ISLAND_BIN {
        YELLOW_BIN
    } else {
        bin_id
    }
}
