use super::CatalogSource;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::CardRecord;
use std::path::{Path, PathBuf};

/// Blocking client for the HearthstoneJSON card catalog
#[derive(Debug, Clone)]
pub struct HearthstoneClient {
    http: reqwest::blocking::Client,
    catalog_url: String,
}

impl HearthstoneClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            catalog_url: config.catalog_url(),
        })
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Fetch every card of the configured build and locale.
    ///
    /// `params` are appended to the query string as given.
    pub fn fetch_all(&self, params: &[(&str, &str)]) -> ApiResult<Vec<CardRecord>> {
        log::info!("Fetching card catalog from: {}", self.catalog_url);

        let response = self.http.get(&self.catalog_url).query(params).send()?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        // Read the body first so a malformed payload surfaces as a parse error
        let body = response.text()?;
        let cards: Vec<CardRecord> = serde_json::from_str(&body)?;

        log::info!("Fetched {} card records", cards.len());
        Ok(cards)
    }
}

impl CatalogSource for HearthstoneClient {
    fn fetch_catalog(&self, params: &[(&str, &str)]) -> ApiResult<Vec<CardRecord>> {
        self.fetch_all(params)
    }
}

/// A `cards.json` saved to disk, for offline runs
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CatalogFile {
    /// Query parameters have no meaning for a file and are ignored
    fn fetch_catalog(&self, _params: &[(&str, &str)]) -> ApiResult<Vec<CardRecord>> {
        load_catalog(&self.path)
    }
}

/// Load a catalog previously saved from `cards.json`
pub fn load_catalog<P: AsRef<Path>>(path: P) -> ApiResult<Vec<CardRecord>> {
    let path = path.as_ref();
    log::info!("Loading card catalog from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let cards: Vec<CardRecord> = serde_json::from_str(&content)?;

    log::info!("Loaded {} card records", cards.len());
    Ok(cards)
}

#[cfg(test)]
#[path = "hearthstone_tests.rs"]
mod tests;
