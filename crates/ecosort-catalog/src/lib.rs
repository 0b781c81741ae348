//! EcoSort — Catalog bounded context.
//!
//! Responsible for the static city, bin and waste-item data, and for
//! building the per-city pool of items a round can draw from.

pub mod application;
pub mod domain;

pub use domain::catalog::{Catalog, resolve_effective_bin};
pub use domain::generator::{EligibleItem, eligible_items, next_item};
pub use domain::model::{Bin, City, Difficulty, ItemTemplate, RECYCLING_ISLAND_BIN, YELLOW_BIN};
