//! EcoSort — localization.
//!
//! English and German tables for every message key the game emits, and
//! `{{param}}` interpolation of a [`Message`](ecosort_core::message::Message).

mod language;
mod tables;
mod translator;

pub use language::Language;
pub use translator::{Translator, interpolate};
