//! Query handlers for the Catalog context.
//!
//! Read-only views for the city picker and the bin row.

use ecosort_core::error::DomainError;
use ecosort_core::message::Message;
use serde::Serialize;

use crate::domain::catalog::Catalog;
use crate::domain::generator::eligible_items;
use crate::domain::model::{Bin, City};

/// Read-only view of a bin.
#[derive(Debug, Serialize)]
pub struct BinView {
    /// Bin id.
    pub id: String,
    /// Color label.
    pub color: String,
    /// Local display name.
    pub name: String,
    /// Glyph.
    pub icon: String,
}

/// Read-only view of a city for selection screens.
#[derive(Debug, Serialize)]
pub struct CityView {
    /// City id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Municipal waste authority.
    pub authority: String,
    /// Bins in display order.
    pub bins: Vec<BinView>,
    /// Size of the round pool.
    pub item_count: usize,
}

fn bin_view(bin: &Bin) -> BinView {
    BinView {
        id: bin.id.clone(),
        color: bin.color.clone(),
        name: bin.name.clone(),
        icon: bin.icon.clone(),
    }
}

fn city_view(catalog: &Catalog, city: &City) -> CityView {
    CityView {
        id: city.id.clone(),
        name: city.name.clone(),
        authority: city.authority.clone(),
        bins: city.bins.iter().map(bin_view).collect(),
        item_count: eligible_items(catalog, city).len(),
    }
}

/// Lists every city in display order.
#[must_use]
pub fn list_cities(catalog: &Catalog) -> Vec<CityView> {
    catalog
        .list_cities()
        .iter()
        .map(|city| city_view(catalog, city))
        .collect()
}

/// Retrieves one city.
///
/// # Errors
///
/// Returns `DomainError::CityNotFound` if the id is unknown.
pub fn get_city_by_id(catalog: &Catalog, city_id: &str) -> Result<CityView, DomainError> {
    catalog.get_city(city_id).map(|city| city_view(catalog, city))
}

/// The "who manages waste here" blurb of a city.
#[must_use]
pub fn city_info_message(city: &City) -> Message {
    Message::new("city_info")
        .with_param("city", &city.name)
        .with_param("authority", &city.authority)
}

/// The tooltip of a bin.
#[must_use]
pub fn bin_info_message(bin: &Bin) -> Message {
    Message::new("bin_info").with_param("binName", &bin.name)
}
