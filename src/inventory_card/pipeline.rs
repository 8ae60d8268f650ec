//! Render orchestration.
//!
//! [`RenderPipeline`] is the card's state machine: it starts uninitialized,
//! receives its configuration, host state, and collaborating services, and
//! from then on turns external triggers (entity-state changes, filter edits,
//! saves) into render passes. A render pass pulls the entity's filter
//! criteria, filters and sorts the item collection, and hands a [`CardView`]
//! to the renderer, then rewires events and refreshes the filter
//! indicators.
//!
//! Failures never escape: every error path ends in a rendered state, either
//! a localized error message or, with no renderer available, a log line.

use crate::config::CardConfig;
use crate::error::Result;
use crate::filtering::filter_items;
use crate::filters::FilterStore;
use crate::indicators::{build_indicator_state, IndicatorState};
use crate::localize::{
    localize, LoadSequence, TranslationCache, TranslationData, TranslationFetcher,
};
use crate::model::{
    unique_categories, unique_locations, FilterState, HostState, InventoryItem,
};
use crate::sorting::{sort_items, DEFAULT_SORT_METHOD};
use crate::store::SettingsStore;
use crate::timer::SlotTimer;
use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Quiet interval for coalescing rapid re-render triggers.
pub const RENDER_DEBOUNCE: Duration = Duration::from_millis(100);

/// One-shot delay between a save completing and the follow-up render.
pub const SAVE_REFRESH_DELAY: Duration = Duration::from_millis(50);

/// Quiet interval for the search input before filters are persisted.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Everything the presentation layer needs for one full render.
#[derive(Debug)]
pub struct CardView<'a> {
    pub entity_id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    /// Filtered and sorted items, in display order.
    pub items: &'a [InventoryItem],
    /// Size of the unfiltered collection.
    pub total_items: usize,
    /// Option lists for the filter dropdowns.
    pub categories: &'a [String],
    pub locations: &'a [String],
    pub filters: &'a FilterState,
    pub sort_method: &'a str,
    pub minimal: bool,
    pub translations: &'a TranslationData,
}

/// DOM (or equivalent) materialization seam.
pub trait CardRenderer {
    fn render_card(&mut self, view: &CardView<'_>) -> Result<()>;

    /// Partial update: replace only the item-list region.
    fn render_items(
        &mut self,
        items: &[InventoryItem],
        sort_method: &str,
        minimal: bool,
    ) -> Result<()>;

    /// Error and loading renders are recovery paths and must not fail.
    fn render_error(&mut self, message: &str);
    fn render_loading(&mut self, message: &str);

    fn update_indicators(&mut self, indicators: &IndicatorState) -> Result<()>;
}

/// Re-attaches interaction listeners after the DOM has been replaced.
pub trait EventWiring {
    fn setup_event_listeners(&mut self) -> Result<()>;
}

/// Marks a user-driven interaction as in flight so redundant re-renders can
/// be suppressed by the host.
pub trait InteractionTracker {
    fn track_user_interaction(&mut self) -> Result<()>;
}

/// Sanitizes the entity's raw item records before filtering. Schema
/// validation belongs to the host.
pub trait ItemValidator {
    fn validate(&self, raw: &[Value]) -> Vec<InventoryItem>;
}

/// Collaborating services resolved at initialization.
pub struct Services<S: SettingsStore> {
    pub filters: FilterStore<S>,
    pub renderer: Box<dyn CardRenderer>,
    pub events: Box<dyn EventWiring>,
    pub interactions: Box<dyn InteractionTracker>,
    pub validator: Box<dyn ItemValidator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Preconditions absent; nothing was done.
    Skipped,
    Rendered,
    /// An error state was rendered (or logged when no renderer exists).
    Failed,
}

pub struct RenderPipeline<S: SettingsStore> {
    config: Option<CardConfig>,
    host: Option<HostState>,
    services: Option<Services<S>>,
    cache: Arc<TranslationCache>,
    fetcher: Box<dyn TranslationFetcher>,
    translations: Arc<TranslationData>,
    loads: LoadSequence,
    render_timer: SlotTimer,
    refresh_timer: SlotTimer,
    search_timer: SlotTimer,
    pending_search: Option<String>,
}

impl<S: SettingsStore> RenderPipeline<S> {
    pub fn new(fetcher: Box<dyn TranslationFetcher>) -> Self {
        Self::with_cache(Arc::new(TranslationCache::new()), fetcher)
    }

    /// Shares a translation cache between cards of a multi-card host.
    pub fn with_cache(cache: Arc<TranslationCache>, fetcher: Box<dyn TranslationFetcher>) -> Self {
        Self {
            config: None,
            host: None,
            services: None,
            cache,
            fetcher,
            translations: Arc::new(TranslationData::Object(Default::default())),
            loads: LoadSequence::new(),
            render_timer: SlotTimer::new(RENDER_DEBOUNCE),
            refresh_timer: SlotTimer::new(SAVE_REFRESH_DELAY),
            search_timer: SlotTimer::new(SEARCH_DEBOUNCE),
            pending_search: None,
        }
    }

    pub fn set_config(&mut self, config: CardConfig) -> Result<()> {
        config.validate()?;
        self.config = Some(config);
        Ok(())
    }

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    pub fn set_host_state(&mut self, host: HostState) {
        self.host = Some(host);
    }

    /// Moves the pipeline from uninitialized to ready.
    pub fn initialize(&mut self, services: Services<S>) {
        self.services = Some(services);
    }

    pub fn is_ready(&self) -> bool {
        self.services.is_some()
    }

    pub fn services(&self) -> Option<&Services<S>> {
        self.services.as_ref()
    }

    pub fn services_mut(&mut self) -> Option<&mut Services<S>> {
        self.services.as_mut()
    }

    pub fn translations(&self) -> &TranslationData {
        &self.translations
    }

    /// Blocking load of a language's tree through the cache, applied only
    /// if no newer load has started in the meantime.
    pub fn load_language(&mut self, language: &str) -> bool {
        let generation = self.loads.begin();
        let tree = self.cache.load(language, self.fetcher.as_ref());
        self.apply_translations(generation, tree)
    }

    /// Stamps a load started outside the pipeline (e.g. on a worker).
    pub fn begin_language_load(&mut self) -> u64 {
        self.loads.begin()
    }

    /// Applies a finished load unless its generation has been superseded.
    pub fn apply_translations(&mut self, generation: u64, tree: Arc<TranslationData>) -> bool {
        if self.loads.is_current(generation) {
            self.translations = tree;
            true
        } else {
            log::debug!("discarding superseded translation load");
            false
        }
    }

    pub fn show_loading(&mut self) {
        let message = localize(&self.translations, "common.loading", &[], Some("Loading..."));
        if let Some(services) = self.services.as_mut() {
            services.renderer.render_loading(&message);
        }
    }

    /// Full render pass. Never panics and never returns an error; see the
    /// module docs for the failure contract.
    pub fn render(&mut self) -> RenderOutcome {
        match self.try_render() {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("error rendering card: {}", err);
                let message = localize(
                    &self.translations,
                    "errors.render_error",
                    &[],
                    Some("An error occurred while rendering the card"),
                );
                self.show_error(&message);
                RenderOutcome::Failed
            }
        }
    }

    fn try_render(&mut self) -> Result<RenderOutcome> {
        let Some(config) = self.config.clone() else {
            return Ok(RenderOutcome::Skipped);
        };
        let Some(host) = self.host.as_ref() else {
            return Ok(RenderOutcome::Skipped);
        };

        let state = host.states.get(&config.entity).cloned();
        let Some(state) = state else {
            let fallback = format!(
                "Entity {} not found. Please check your configuration.",
                config.entity
            );
            let message = localize(
                &self.translations,
                "errors.entity_not_found",
                &[("entity", config.entity.as_str())],
                Some(&fallback),
            );
            self.show_error(&message);
            return Ok(RenderOutcome::Failed);
        };

        let translations = Arc::clone(&self.translations);
        let Some(services) = self.services.as_mut() else {
            let message = localize(
                &translations,
                "errors.initialization_failed",
                &[],
                Some("Failed to initialize card components"),
            );
            self.show_error(&message);
            return Ok(RenderOutcome::Failed);
        };

        let filters = services.filters.current(&config.entity);
        let sort_method = effective_sort_method(&config, &filters);

        let all_items = services.validator.validate(&state.attributes.items);
        let filtered = filter_items(&all_items, &filters, today());
        let sorted = sort_items(&filtered, &sort_method, &translations);

        let categories = unique_categories(&all_items);
        let locations = unique_locations(&all_items);
        let view = CardView {
            entity_id: &config.entity,
            name: state.display_name(),
            description: state.description(),
            items: &sorted,
            total_items: all_items.len(),
            categories: &categories,
            locations: &locations,
            filters: &filters,
            sort_method: &sort_method,
            minimal: config.minimal,
            translations: &translations,
        };

        services.renderer.render_card(&view)?;
        services.events.setup_event_listeners()?;

        let indicators = build_indicator_state(&filters, &translations);
        services.renderer.update_indicators(&indicators)?;
        services.interactions.track_user_interaction()?;

        Ok(RenderOutcome::Rendered)
    }

    /// Replaces only the item-list region. Used when item data changed but
    /// filters, sort, and card structure did not.
    pub fn update_items_only(&mut self) -> RenderOutcome {
        match self.try_update_items() {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("error updating item list: {}", err);
                RenderOutcome::Failed
            }
        }
    }

    fn try_update_items(&mut self) -> Result<RenderOutcome> {
        let Some(config) = self.config.clone() else {
            return Ok(RenderOutcome::Skipped);
        };
        let Some(host) = self.host.as_ref() else {
            return Ok(RenderOutcome::Skipped);
        };
        let Some(state) = host.states.get(&config.entity).cloned() else {
            return Ok(RenderOutcome::Skipped);
        };

        let translations = Arc::clone(&self.translations);
        let Some(services) = self.services.as_mut() else {
            return Ok(RenderOutcome::Skipped);
        };

        let filters = services.filters.current(&config.entity);
        let sort_method = effective_sort_method(&config, &filters);
        let all_items = services.validator.validate(&state.attributes.items);
        let filtered = filter_items(&all_items, &filters, today());
        let sorted = sort_items(&filtered, &sort_method, &translations);

        services
            .renderer
            .render_items(&sorted, &sort_method, config.minimal)?;
        Ok(RenderOutcome::Rendered)
    }

    /// Clears the entity's persisted criteria and re-renders immediately.
    pub fn clear_filters(&mut self) -> RenderOutcome {
        if let (Some(config), Some(services)) = (self.config.as_ref(), self.services.as_mut()) {
            if let Err(err) = services.filters.clear(&config.entity) {
                log::warn!("failed to clear filters for {}: {}", config.entity, err);
            }
        }
        self.render()
    }

    /// Debounced render request: trailing-edge, cancel-and-restart.
    pub fn request_render(&mut self, now: Instant) {
        self.render_timer.restart(now);
    }

    /// One-shot post-save refresh; repeated calls keep the earliest
    /// pending deadline instead of pushing it back.
    pub fn refresh_after_save(&mut self, now: Instant) {
        self.refresh_timer.arm_earliest(now);
    }

    /// Debounced search-input path: on fire, persists the latest text as
    /// the entity's search criterion and renders.
    pub fn search_changed(&mut self, text: &str, now: Instant) {
        self.pending_search = Some(text.to_string());
        self.search_timer.restart(now);
    }

    /// Fires any due timers. Returns the render outcome when one fired.
    pub fn tick(&mut self, now: Instant) -> Option<RenderOutcome> {
        let mut due = false;
        if self.search_timer.fire_if_due(now) {
            self.apply_pending_search();
            due = true;
        }
        if self.render_timer.fire_if_due(now) {
            due = true;
        }
        if self.refresh_timer.fire_if_due(now) {
            due = true;
        }
        due.then(|| self.render())
    }

    /// Fires all armed timers immediately. Deterministic teardown for
    /// tests and for hosts unloading the card.
    pub fn flush_timers(&mut self) -> Option<RenderOutcome> {
        let search_fired = self.search_timer.flush();
        if search_fired {
            self.apply_pending_search();
        }
        let due = search_fired | self.render_timer.flush() | self.refresh_timer.flush();
        due.then(|| self.render())
    }

    pub fn cancel_timers(&mut self) {
        self.render_timer.cancel();
        self.refresh_timer.cancel();
        self.search_timer.cancel();
        self.pending_search = None;
    }

    fn apply_pending_search(&mut self) {
        let Some(text) = self.pending_search.take() else {
            return;
        };
        let Some(config) = self.config.as_ref() else {
            return;
        };
        let entity_id = config.entity.clone();
        let Some(services) = self.services.as_mut() else {
            return;
        };

        let mut filters = services.filters.current(&entity_id);
        filters.search_text = text;
        if let Err(err) = services.filters.save(&entity_id, &filters) {
            log::warn!("failed to persist search text for {}: {}", entity_id, err);
        }
    }

    fn show_error(&mut self, message: &str) {
        match self.services.as_mut() {
            Some(services) => services.renderer.render_error(message),
            None => log::error!("card error with no renderer available: {}", message),
        }
    }
}

fn effective_sort_method(config: &CardConfig, filters: &FilterState) -> String {
    config
        .sort_method
        .as_deref()
        .filter(|method| !method.is_empty())
        .or_else(|| Some(filters.sort_method.as_str()).filter(|method| !method.is_empty()))
        .unwrap_or(DEFAULT_SORT_METHOD)
        .to_string()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;
    use crate::model::{EntityAttributes, EntityState};
    use crate::store::memory::InMemoryStore;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recording {
        calls: Vec<String>,
        rendered: Vec<Vec<String>>,
        errors: Vec<String>,
    }

    struct RecordingRenderer {
        recording: Rc<RefCell<Recording>>,
        fail_render: bool,
    }

    impl CardRenderer for RecordingRenderer {
        fn render_card(&mut self, view: &CardView<'_>) -> Result<()> {
            if self.fail_render {
                return Err(CardError::Render("renderer exploded".to_string()));
            }
            let mut recording = self.recording.borrow_mut();
            recording.calls.push("render_card".to_string());
            recording
                .rendered
                .push(view.items.iter().map(|i| i.name.clone()).collect());
            Ok(())
        }

        fn render_items(
            &mut self,
            items: &[InventoryItem],
            _sort_method: &str,
            _minimal: bool,
        ) -> Result<()> {
            let mut recording = self.recording.borrow_mut();
            recording.calls.push("render_items".to_string());
            recording
                .rendered
                .push(items.iter().map(|i| i.name.clone()).collect());
            Ok(())
        }

        fn render_error(&mut self, message: &str) {
            let mut recording = self.recording.borrow_mut();
            recording.calls.push("render_error".to_string());
            recording.errors.push(message.to_string());
        }

        fn render_loading(&mut self, _message: &str) {
            self.recording
                .borrow_mut()
                .calls
                .push("render_loading".to_string());
        }

        fn update_indicators(&mut self, _indicators: &IndicatorState) -> Result<()> {
            self.recording
                .borrow_mut()
                .calls
                .push("update_indicators".to_string());
            Ok(())
        }
    }

    struct RecordingWiring(Rc<RefCell<Recording>>);

    impl EventWiring for RecordingWiring {
        fn setup_event_listeners(&mut self) -> Result<()> {
            self.0
                .borrow_mut()
                .calls
                .push("setup_event_listeners".to_string());
            Ok(())
        }
    }

    struct RecordingTracker(Rc<RefCell<Recording>>);

    impl InteractionTracker for RecordingTracker {
        fn track_user_interaction(&mut self) -> Result<()> {
            self.0
                .borrow_mut()
                .calls
                .push("track_user_interaction".to_string());
            Ok(())
        }
    }

    struct SerdeValidator;

    impl ItemValidator for SerdeValidator {
        fn validate(&self, raw: &[Value]) -> Vec<InventoryItem> {
            raw.iter()
                .filter_map(|value| serde_json::from_value(value.clone()).ok())
                .collect()
        }
    }

    struct OfflineFetcher;

    impl TranslationFetcher for OfflineFetcher {
        fn fetch_json(&self, path: &str) -> Result<TranslationData> {
            Err(CardError::Translation(format!("offline: {}", path)))
        }
    }

    struct Harness {
        pipeline: RenderPipeline<InMemoryStore>,
        recording: Rc<RefCell<Recording>>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_failing_renderer(false)
        }

        fn with_failing_renderer(fail_render: bool) -> Self {
            let recording = Rc::new(RefCell::new(Recording::default()));
            let mut pipeline = RenderPipeline::new(Box::new(OfflineFetcher));
            pipeline.initialize(Services {
                filters: FilterStore::new(InMemoryStore::new()),
                renderer: Box::new(RecordingRenderer {
                    recording: Rc::clone(&recording),
                    fail_render,
                }),
                events: Box::new(RecordingWiring(Rc::clone(&recording))),
                interactions: Box::new(RecordingTracker(Rc::clone(&recording))),
                validator: Box::new(SerdeValidator),
            });
            Self {
                pipeline,
                recording,
            }
        }

        fn with_pantry(mut self) -> Self {
            self.pipeline
                .set_config(CardConfig::new("sensor.pantry"))
                .unwrap();
            self.pipeline.set_host_state(
                HostState::new("en").with_entity(EntityState {
                    entity_id: "sensor.pantry".to_string(),
                    attributes: EntityAttributes {
                        items: vec![
                            json!({"name": "item10", "quantity": 1}),
                            json!({"name": "item2", "quantity": 2}),
                            json!({"name": "item1", "quantity": 0}),
                            json!("not an item record"),
                        ],
                        friendly_name: Some("Pantry".to_string()),
                        description: None,
                    },
                }),
            );
            self
        }

        fn calls(&self) -> Vec<String> {
            self.recording.borrow().calls.clone()
        }

        fn last_rendered(&self) -> Vec<String> {
            self.recording.borrow().rendered.last().cloned().unwrap()
        }

        fn last_error(&self) -> String {
            self.recording.borrow().errors.last().cloned().unwrap()
        }
    }

    #[test]
    fn skips_until_config_and_host_are_present() {
        let mut harness = Harness::new();
        assert_eq!(harness.pipeline.render(), RenderOutcome::Skipped);

        harness
            .pipeline
            .set_config(CardConfig::new("sensor.pantry"))
            .unwrap();
        assert_eq!(harness.pipeline.render(), RenderOutcome::Skipped);
        assert!(harness.calls().is_empty());
    }

    #[test]
    fn full_render_drives_collaborators_in_order() {
        let mut harness = Harness::new().with_pantry();

        assert_eq!(harness.pipeline.render(), RenderOutcome::Rendered);
        assert_eq!(
            harness.calls(),
            vec![
                "render_card",
                "setup_event_listeners",
                "update_indicators",
                "track_user_interaction",
            ]
        );
        // Default sort is by name, natural order; the malformed record is
        // dropped by the validator.
        assert_eq!(harness.last_rendered(), vec!["item1", "item2", "item10"]);
    }

    #[test]
    fn config_sort_method_overrides_stored_filters() {
        let mut harness = Harness::new().with_pantry();

        let mut config = CardConfig::new("sensor.pantry");
        config.sort_method = Some("quantity".to_string());
        harness.pipeline.set_config(config).unwrap();

        harness.pipeline.render();
        assert_eq!(harness.last_rendered(), vec!["item2", "item10", "item1"]);
    }

    #[test]
    fn missing_entity_renders_localized_error() {
        let mut harness = Harness::new().with_pantry();
        harness
            .pipeline
            .set_config(CardConfig::new("sensor.nowhere"))
            .unwrap();

        assert_eq!(harness.pipeline.render(), RenderOutcome::Failed);
        assert_eq!(
            harness.last_error(),
            "Entity sensor.nowhere not found. Please check your configuration."
        );
    }

    #[test]
    fn entity_error_uses_translations_with_params() {
        let mut harness = Harness::new().with_pantry();
        harness
            .pipeline
            .set_config(CardConfig::new("sensor.nowhere"))
            .unwrap();

        let generation = harness.pipeline.begin_language_load();
        let tree = Arc::new(json!({
            "errors": {"entity_not_found": "Entität {entity} fehlt"}
        }));
        assert!(harness.pipeline.apply_translations(generation, tree));

        harness.pipeline.render();
        assert_eq!(harness.last_error(), "Entität sensor.nowhere fehlt");
    }

    #[test]
    fn uninitialized_pipeline_fails_without_panicking() {
        let mut pipeline: RenderPipeline<InMemoryStore> =
            RenderPipeline::new(Box::new(OfflineFetcher));
        pipeline.set_config(CardConfig::new("sensor.pantry")).unwrap();
        pipeline.set_host_state(HostState::new("en").with_entity(EntityState {
            entity_id: "sensor.pantry".to_string(),
            attributes: EntityAttributes::default(),
        }));

        assert!(!pipeline.is_ready());
        assert_eq!(pipeline.render(), RenderOutcome::Failed);
    }

    #[test]
    fn renderer_failure_is_absorbed_as_generic_error() {
        let mut harness = Harness::with_failing_renderer(true).with_pantry();

        assert_eq!(harness.pipeline.render(), RenderOutcome::Failed);
        assert_eq!(
            harness.last_error(),
            "An error occurred while rendering the card"
        );
    }

    #[test]
    fn debounced_triggers_coalesce_into_one_render() {
        let mut harness = Harness::new().with_pantry();
        let start = Instant::now();

        harness.pipeline.request_render(start);
        harness.pipeline.request_render(start + Duration::from_millis(30));
        harness.pipeline.request_render(start + Duration::from_millis(60));

        // Still inside the quiet interval of the last trigger.
        assert_eq!(
            harness.pipeline.tick(start + Duration::from_millis(140)),
            None
        );
        assert_eq!(
            harness.pipeline.tick(start + Duration::from_millis(160)),
            Some(RenderOutcome::Rendered)
        );

        let renders = harness
            .calls()
            .iter()
            .filter(|c| c.as_str() == "render_card")
            .count();
        assert_eq!(renders, 1);
    }

    #[test]
    fn search_debounce_persists_the_last_value() {
        let mut harness = Harness::new().with_pantry();
        let start = Instant::now();

        harness.pipeline.search_changed("m", start);
        harness
            .pipeline
            .search_changed("item1", start + Duration::from_millis(50));

        let fired = harness
            .pipeline
            .tick(start + Duration::from_millis(50) + SEARCH_DEBOUNCE);
        assert_eq!(fired, Some(RenderOutcome::Rendered));

        let saved = harness
            .pipeline
            .services()
            .unwrap()
            .filters
            .current("sensor.pantry");
        assert_eq!(saved.search_text, "item1");
        // The render already ran against the persisted search text.
        assert_eq!(harness.last_rendered(), vec!["item1", "item10"]);
    }

    #[test]
    fn refresh_after_save_keeps_the_earliest_deadline() {
        let mut harness = Harness::new().with_pantry();
        let start = Instant::now();

        harness.pipeline.refresh_after_save(start);
        harness
            .pipeline
            .refresh_after_save(start + Duration::from_millis(40));

        assert_eq!(
            harness.pipeline.tick(start + SAVE_REFRESH_DELAY),
            Some(RenderOutcome::Rendered)
        );
    }

    #[test]
    fn flush_timers_fires_pending_work_immediately() {
        let mut harness = Harness::new().with_pantry();
        let start = Instant::now();

        harness.pipeline.search_changed("item2", start);
        assert_eq!(
            harness.pipeline.flush_timers(),
            Some(RenderOutcome::Rendered)
        );
        assert_eq!(harness.last_rendered(), vec!["item2"]);
        assert_eq!(harness.pipeline.flush_timers(), None);
    }

    #[test]
    fn superseded_translation_load_is_discarded() {
        let mut harness = Harness::new().with_pantry();

        let stale = harness.pipeline.begin_language_load();
        let fresh = harness.pipeline.begin_language_load();

        let stale_tree = Arc::new(json!({"common": {"loading": "Chargement"}}));
        assert!(!harness.pipeline.apply_translations(stale, stale_tree));
        assert_eq!(*harness.pipeline.translations(), json!({}));

        let fresh_tree = Arc::new(json!({"common": {"loading": "Laden"}}));
        assert!(harness.pipeline.apply_translations(fresh, fresh_tree.clone()));
        assert_eq!(harness.pipeline.translations(), &*fresh_tree);
    }

    #[test]
    fn clear_filters_resets_state_and_renders() {
        let mut harness = Harness::new().with_pantry();

        let mut filters = FilterState::default();
        filters.search_text = "item2".to_string();
        harness
            .pipeline
            .services_mut()
            .unwrap()
            .filters
            .save("sensor.pantry", &filters)
            .unwrap();

        assert_eq!(harness.pipeline.clear_filters(), RenderOutcome::Rendered);
        assert_eq!(harness.last_rendered(), vec!["item1", "item2", "item10"]);
        assert_eq!(
            harness
                .pipeline
                .services()
                .unwrap()
                .filters
                .current("sensor.pantry"),
            FilterState::default()
        );
    }

    #[test]
    fn update_items_only_touches_the_item_region() {
        let mut harness = Harness::new().with_pantry();

        assert_eq!(harness.pipeline.update_items_only(), RenderOutcome::Rendered);
        assert_eq!(harness.calls(), vec!["render_items"]);
        assert_eq!(harness.last_rendered(), vec!["item1", "item2", "item10"]);
    }
}
