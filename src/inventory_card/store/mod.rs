//! # Settings Storage
//!
//! This module defines the persistence abstraction for per-entity card
//! settings. The [`SettingsStore`] trait lets the pipeline work with
//! different key-value backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **other hosts** (browser-local storage shims, databases) without
//!   changing the filter logic
//! - Keep the pipeline **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All keys live in a single `settings.json` map
//!   - Default root resolved per-user via the `directories` crate
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Key Format
//!
//! Filter criteria are stored under `filters_<entityId>`, one key per
//! inventory entity, value = JSON-serialized filter state. The store itself
//! is schema-agnostic; migration of legacy value shapes happens at read time
//! in the filter layer.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for persistent card settings.
///
/// Implementations must treat keys as opaque strings and values as opaque
/// text. Removing an absent key is not an error.
pub trait SettingsStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` entirely
    fn remove(&mut self, key: &str) -> Result<()>;
}
