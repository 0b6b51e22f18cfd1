//! In-memory card catalog

pub mod card_cache;

pub use card_cache::{build_index, CardCache, CardIndex};
