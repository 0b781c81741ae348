//! Domain layer for the Player Statistics context.

pub mod achievements;
pub mod commands;
pub mod record;
