//! Per-entity filter criteria persistence.
//!
//! The store never fails a read: an absent key yields the defaults, and a
//! malformed blob is logged and replaced by the defaults. Legacy blobs that
//! hold bare scalars in the set fields are upgraded through
//! [`FilterState::normalize`] on every read; writes always emit the
//! normalized multi-value shape, so reading once and saving migrates a blob
//! for good.

use crate::error::Result;
use crate::model::FilterState;
use crate::store::SettingsStore;
use serde_json::Value;

/// Storage key for one entity's filter criteria.
pub fn filter_key(entity_id: &str) -> String {
    format!("filters_{}", entity_id)
}

pub struct FilterStore<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> FilterStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current criteria for an entity. Never fails; see module docs.
    pub fn current(&self, entity_id: &str) -> FilterState {
        let key = filter_key(entity_id);
        let blob = match self.store.get(&key) {
            Ok(blob) => blob,
            Err(err) => {
                log::warn!("failed to read saved filters for {}: {}", entity_id, err);
                return FilterState::default();
            }
        };

        match blob {
            None => FilterState::default(),
            Some(text) => match serde_json::from_str::<Value>(&text) {
                Ok(raw) => FilterState::normalize(&raw),
                Err(err) => {
                    log::warn!(
                        "discarding malformed saved filters for {}: {}",
                        entity_id,
                        err
                    );
                    FilterState::default()
                }
            },
        }
    }

    /// Full overwrite of the entity's criteria.
    pub fn save(&mut self, entity_id: &str, filters: &FilterState) -> Result<()> {
        let text = serde_json::to_string(filters)?;
        self.store.set(&filter_key(entity_id), &text)
    }

    /// Removes the entity's key entirely; the next read returns defaults.
    pub fn clear(&mut self, entity_id: &str) -> Result<()> {
        self.store.remove(&filter_key(entity_id))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
