//! API client for HearthstoneJSON

pub mod hearthstone;

pub use hearthstone::{load_catalog, CatalogFile, HearthstoneClient};

use crate::error::ApiResult;
use crate::models::CardRecord;

/// Anything that can produce the full card catalog in one call
pub trait CatalogSource {
    fn fetch_catalog(&self, params: &[(&str, &str)]) -> ApiResult<Vec<CardRecord>>;
}
