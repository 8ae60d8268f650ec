//! Translation lookup and loading.
//!
//! A translation tree is a nested JSON object with string leaves, one per
//! language. [`localize`] resolves a dotted key against a tree and never
//! fails: a miss yields the caller's fallback, or the key itself. Trees are
//! fetched through the host-supplied [`TranslationFetcher`] and held in an
//! owned [`TranslationCache`] so hosts and tests control the cache lifetime.

use crate::error::Result;
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub type TranslationData = Value;

/// Card identifier used in translation paths and cache keys.
pub const CARD_NAME: &str = "inventory-card";

/// Language of last resort for the load chain.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Resolves `key` ("errors.entity_not_found") against `tree`.
///
/// A missing or non-traversable segment returns `fallback` (or the key
/// verbatim) untouched. A resolved non-string leaf falls back the same way,
/// but then still receives `{param}` substitution, matching how callers
/// pre-build fallback strings. Substitution is literal; placeholders without
/// a matching param stay as-is.
pub fn localize(
    tree: &TranslationData,
    key: &str,
    params: &[(&str, &str)],
    fallback: Option<&str>,
) -> String {
    let mut node = tree;
    for segment in key.split('.') {
        match node.get(segment) {
            Some(next) => node = next,
            None => return fallback.unwrap_or(key).to_string(),
        }
    }

    let mut text = match node.as_str() {
        Some(leaf) => leaf.to_string(),
        None => fallback.unwrap_or(key).to_string(),
    };

    for (name, value) in params {
        text = text.replace(&format!("{{{}}}", name), value);
    }

    text
}

/// Transport seam for translation documents. The fetcher receives one of
/// the [`candidate_paths`] and returns the parsed JSON document; failures
/// are non-fatal and simply advance the chain.
pub trait TranslationFetcher {
    fn fetch_json(&self, path: &str) -> Result<TranslationData>;
}

/// Path candidates for a language, in priority order: the packaged
/// community location, then the secondary hosting location, each with and
/// without the `translations/` subdirectory.
pub fn candidate_paths(language: &str) -> [String; 4] {
    [
        format!("/local/community/{}/translations/{}.json", CARD_NAME, language),
        format!("/hacsfiles/{}/translations/{}.json", CARD_NAME, language),
        format!("/local/community/{}/{}.json", CARD_NAME, language),
        format!("/hacsfiles/{}/{}.json", CARD_NAME, language),
    ]
}

/// Cache of loaded translation trees, keyed by `<card-name>-<language>`.
///
/// Each language owns a `OnceCell`: concurrent loads for one language share
/// a single fetch sequence instead of duplicating it, and a loaded tree is
/// kept until [`TranslationCache::clear`].
#[derive(Default)]
pub struct TranslationCache {
    cells: Mutex<HashMap<String, Arc<OnceCell<Arc<TranslationData>>>>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache-first load of a language's tree.
    ///
    /// On a miss, tries each candidate path in order; if all miss and the
    /// language is not `en`, falls back one hop to `en` (served from this
    /// same cache); the ultimate fallback is an empty tree. Never fails.
    pub fn load(&self, language: &str, fetcher: &dyn TranslationFetcher) -> Arc<TranslationData> {
        let cell = self.cell(language);
        cell.get_or_init(|| Arc::new(self.fetch_chain(language, fetcher)))
            .clone()
    }

    /// Drops every cached tree; subsequent loads fetch again.
    pub fn clear(&self) {
        self.lock_cells().clear();
    }

    /// True once a language's tree has finished loading.
    pub fn is_loaded(&self, language: &str) -> bool {
        self.lock_cells()
            .get(&cache_key(language))
            .map(|cell| cell.get().is_some())
            .unwrap_or(false)
    }

    fn cell(&self, language: &str) -> Arc<OnceCell<Arc<TranslationData>>> {
        self.lock_cells()
            .entry(cache_key(language))
            .or_default()
            .clone()
    }

    fn lock_cells(
        &self,
    ) -> std::sync::MutexGuard<'_, HashMap<String, Arc<OnceCell<Arc<TranslationData>>>>> {
        match self.cells.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn fetch_chain(&self, language: &str, fetcher: &dyn TranslationFetcher) -> TranslationData {
        for path in candidate_paths(language) {
            match fetcher.fetch_json(&path) {
                Ok(tree) if tree.is_object() => {
                    log::debug!("loaded translations from {}", path);
                    return tree;
                }
                Ok(_) => {
                    log::debug!("ignoring non-object translation document at {}", path);
                }
                Err(err) => {
                    log::debug!("failed to load translations from {}: {}", path, err);
                }
            }
        }

        if language != FALLBACK_LANGUAGE {
            return (*self.load(FALLBACK_LANGUAGE, fetcher)).clone();
        }

        TranslationData::Object(Default::default())
    }
}

fn cache_key(language: &str) -> String {
    format!("{}-{}", CARD_NAME, language)
}

/// Monotonic stamp for language loads.
///
/// The pipeline stamps each load when it begins; a load whose stamp has
/// been superseded by a newer one is discarded instead of applied, so a
/// slow fetch for an old language can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct LoadSequence {
    current: u64,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current
    }
}
