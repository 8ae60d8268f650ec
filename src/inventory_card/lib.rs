//! # Inventory Card Architecture
//!
//! This crate is a **UI-agnostic inventory-card engine**. It is not a widget
//! that happens to contain some logic—it is the card's logic packaged as a
//! library that any host shell (custom element shim, TUI harness, test
//! driver) can wire a presentation layer onto.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Orchestration (pipeline.rs, timer.rs, indicators.rs)       │
//! │  - Render state machine, debounced triggers, indicator data │
//! │  - The ONLY place that talks to the host's collaborators    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engines (filtering.rs, sorting.rs, localize.rs)            │
//! │  - Pure functions over plain data                           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State (model.rs, config.rs, filters.rs, store/)            │
//! │  - Data types and persisted per-entity criteria             │
//! │  - Abstract SettingsStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collaborator Seams
//!
//! Everything the card cannot own lives behind a trait, injected when the
//! pipeline is initialized: `CardRenderer` (DOM materialization),
//! `EventWiring` (listener re-attachment), `InteractionTracker`,
//! `ItemValidator` (item sanitization), and `TranslationFetcher`
//! (translation transport). The pipeline never reaches for a collaborator
//! it was not given; before initialization it is an explicit
//! "uninitialized" state, not a scatter of null checks.
//!
//! ## Key Principle: Failures Terminate in a Rendered State
//!
//! Nothing in this crate is fatal to the host:
//! - Malformed persisted filter state falls back to defaults (logged)
//! - A missing entity or missing services renders a localized error
//! - An error mid-render is caught at the pipeline top and rendered as a
//!   generic localized message
//! - Translation fetch failures walk a fallback chain ending in an empty
//!   tree
//!
//! ## Testing Strategy
//!
//! 1. **Engines** (`filtering`, `sorting`, `localize`): thorough unit tests
//!    of the predicate, comparators, and lookup. This is where the lion's
//!    share of testing lives.
//! 2. **State** (`filters`, `store`): round-trip and migration tests against
//!    `InMemoryStore`; `FileStore` tests use temp directories.
//! 3. **Pipeline**: recording mock collaborators verify call order, error
//!    absorption, and debounce behavior with an explicit clock.
//!
//! ## Module Overview
//!
//! - [`pipeline`]: render orchestration and the collaborator traits
//! - [`filtering`]: the multi-criterion filter predicate
//! - [`sorting`]: sort strategies and natural ordering
//! - [`localize`]: translation lookup, cache, and load chain
//! - [`filters`]: persisted per-entity filter criteria
//! - [`indicators`]: filter-indicator view state
//! - [`model`]: core data types (`InventoryItem`, `FilterState`, ...)
//! - [`config`]: card configuration
//! - [`store`]: settings persistence abstraction and implementations
//! - [`timer`]: single-slot debounce/delay timers
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod filtering;
pub mod filters;
pub mod indicators;
pub mod localize;
pub mod model;
pub mod pipeline;
pub mod sorting;
pub mod store;
pub mod timer;
