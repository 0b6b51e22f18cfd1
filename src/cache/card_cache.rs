use crate::api::{CatalogSource, HearthstoneClient};
use crate::error::ApiResult;
use crate::models::CardRecord;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Card name -> record, collectible cards only
pub type CardIndex = HashMap<String, CardRecord>;

/// Snapshot of the collectible card catalog, indexed by name.
///
/// The index is never mutated in place. A refresh builds a complete new
/// index and swaps it in with one assignment, so readers see either the old
/// snapshot or the new one.
#[derive(Debug)]
pub struct CardCache<S = HearthstoneClient> {
    source: S,
    cards: RwLock<Arc<CardIndex>>,
}

impl<S: CatalogSource> CardCache<S> {
    /// Empty cache; call [`CardCache::refresh`] to populate it
    pub fn new(source: S) -> Self {
        Self {
            source,
            cards: RwLock::new(Arc::new(CardIndex::new())),
        }
    }

    /// New cache with one refresh already attempted. A failed refresh is
    /// logged and leaves the cache empty.
    pub fn load(source: S) -> Self {
        let cache = Self::new(source);
        if let Err(e) = cache.refresh() {
            log::warn!("Starting with empty card cache: {}", e);
        }
        cache
    }

    /// Rebuild the index from the source. See [`CardCache::refresh_with`].
    pub fn refresh(&self) -> ApiResult<usize> {
        self.refresh_with(&[])
    }

    /// Rebuild the index, passing `params` through to the source.
    ///
    /// On failure the previous snapshot stays in place and the error is
    /// returned. Returns the number of cached cards on success.
    pub fn refresh_with(&self, params: &[(&str, &str)]) -> ApiResult<usize> {
        log::info!("Rebuilding card cache...");

        let records = match self.source.fetch_catalog(params) {
            Ok(records) => records,
            Err(e) => {
                log::error!("Card catalog request failed, keeping previous cache: {}", e);
                return Err(e);
            }
        };

        let index = Arc::new(build_index(records));
        let count = index.len();
        *self.cards.write().unwrap_or_else(PoisonError::into_inner) = index;

        log::info!("Card cache rebuilt with {} cards", count);
        Ok(count)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> CardCache<S> {
    /// The current index. Holding it keeps that snapshot alive across refreshes.
    pub fn snapshot(&self) -> Arc<CardIndex> {
        Arc::clone(&self.cards.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Exact-name lookup
    pub fn lookup(&self, name: &str) -> Option<CardRecord> {
        let card = self.snapshot().get(name).cloned();
        if card.is_none() {
            log::debug!("No cached card named '{}'", name);
        }
        card
    }

    /// Cached card names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.snapshot().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

/// Keep records that have a string `name` and a truthy `collectible`, keyed
/// by name. A later record with the same name replaces an earlier one.
pub fn build_index(records: impl IntoIterator<Item = CardRecord>) -> CardIndex {
    records
        .into_iter()
        .filter(CardRecord::is_collectible)
        .filter_map(|card| {
            let name = card.name()?.to_string();
            Some((name, card))
        })
        .collect()
}
