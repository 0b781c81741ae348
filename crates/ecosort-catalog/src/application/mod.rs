//! Application layer for the Catalog context.

pub mod query_handlers;
