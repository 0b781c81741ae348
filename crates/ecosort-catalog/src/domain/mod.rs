//! Domain layer for the Catalog context.

pub mod catalog;
pub mod generator;
pub mod model;
