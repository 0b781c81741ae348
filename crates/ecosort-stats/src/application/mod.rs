//! Application layer for the Player Statistics context.

pub mod command_handlers;
pub mod query_handlers;
