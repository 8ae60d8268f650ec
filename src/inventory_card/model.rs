use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

use crate::sorting::DEFAULT_SORT_METHOD;

/// Items without their own alert window warn this many days ahead of expiry.
pub const DEFAULT_EXPIRY_ALERT_DAYS: u32 = 7;

const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_alert_days: Option<u32>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            location: None,
            quantity: 0.0,
            unit: None,
            expiry_date: None,
            expiry_alert_days: None,
        }
    }

    /// Expiry date parsed from its ISO string form. Unparsable dates count
    /// as undated for classification purposes.
    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry_date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, EXPIRY_DATE_FORMAT).ok())
    }

    /// Alert window in days; zero and missing both fall back to the default.
    pub fn alert_days(&self) -> u32 {
        match self.expiry_alert_days {
            Some(days) if days > 0 => days,
            _ => DEFAULT_EXPIRY_ALERT_DAYS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityAttributes {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One inventory entity as exposed by the host platform. Consumed read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    #[serde(default)]
    pub attributes: EntityAttributes,
}

impl EntityState {
    pub fn display_name(&self) -> &str {
        match self.attributes.friendly_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.entity_id,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.attributes.description.as_deref()
    }
}

/// Read-only snapshot of the host's entity map and UI language.
#[derive(Debug, Clone, Default)]
pub struct HostState {
    pub states: HashMap<String, EntityState>,
    pub language: String,
}

impl HostState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            states: HashMap::new(),
            language: language.into(),
        }
    }

    pub fn with_entity(mut self, state: EntityState) -> Self {
        self.states.insert(state.entity_id.clone(), state);
        self
    }
}

/// Per-entity filter criteria, persisted as JSON under the entity's key.
///
/// The serialized shape keeps the legacy camelCase key names so blobs written
/// by earlier versions of the card round-trip. Every set field is a sequence
/// after [`FilterState::normalize`]; legacy blobs may hold bare scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub category: Vec<String>,
    pub location: Vec<String>,
    pub quantity: Vec<String>,
    pub expiry: Vec<String>,
    pub search_text: String,
    pub show_advanced: bool,
    pub sort_method: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: Vec::new(),
            location: Vec::new(),
            quantity: Vec::new(),
            expiry: Vec::new(),
            search_text: String::new(),
            show_advanced: false,
            sort_method: DEFAULT_SORT_METHOD.to_string(),
        }
    }
}

impl FilterState {
    /// Builds a well-formed `FilterState` from a raw persisted value.
    ///
    /// Migrates the legacy single-value shape: a bare string in a set field
    /// becomes a one-element sequence (empty string becomes an empty
    /// sequence), and anything that is neither a string nor a sequence
    /// becomes an empty sequence. Missing scalar fields take their defaults.
    pub fn normalize(raw: &Value) -> Self {
        let sort_method = match raw.get("sortMethod").and_then(Value::as_str) {
            Some(method) if !method.is_empty() => method.to_string(),
            _ => DEFAULT_SORT_METHOD.to_string(),
        };

        Self {
            category: string_set(raw.get("category")),
            location: string_set(raw.get("location")),
            quantity: string_set(raw.get("quantity")),
            expiry: string_set(raw.get("expiry")),
            search_text: raw
                .get("searchText")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            show_advanced: raw
                .get("showAdvanced")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            sort_method,
        }
    }

    /// True when any criterion would exclude at least some item.
    pub fn has_active(&self) -> bool {
        !self.search_text.is_empty()
            || !self.category.is_empty()
            || !self.location.is_empty()
            || !self.quantity.is_empty()
            || !self.expiry.is_empty()
    }
}

fn string_set(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(single)) => {
            if single.is_empty() {
                Vec::new()
            } else {
                vec![single.clone()]
            }
        }
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Sorted, deduplicated category values across the collection. Used for the
/// filter dropdown options.
pub fn unique_categories(items: &[InventoryItem]) -> Vec<String> {
    unique_field(items, |item| item.category.as_deref())
}

/// Sorted, deduplicated location values across the collection.
pub fn unique_locations(items: &[InventoryItem]) -> Vec<String> {
    unique_field(items, |item| item.location.as_deref())
}

fn unique_field<F>(items: &[InventoryItem], field: F) -> Vec<String>
where
    F: Fn(&InventoryItem) -> Option<&str>,
{
    let set: BTreeSet<String> = items
        .iter()
        .filter_map(|item| field(item))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    set.into_iter().collect()
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn item(name: &str) -> InventoryItem {
        InventoryItem {
            quantity: 1.0,
            ..InventoryItem::new(name)
        }
    }

    pub fn item_with_quantity(name: &str, quantity: f64) -> InventoryItem {
        InventoryItem {
            quantity,
            ..InventoryItem::new(name)
        }
    }

    pub fn expiring_item(name: &str, expiry_date: &str) -> InventoryItem {
        InventoryItem {
            quantity: 1.0,
            expiry_date: Some(expiry_date.to_string()),
            ..InventoryItem::new(name)
        }
    }

    pub fn stocked_item(name: &str, category: &str, location: &str) -> InventoryItem {
        InventoryItem {
            quantity: 1.0,
            category: Some(category.to_string()),
            location: Some(location.to_string()),
            ..InventoryItem::new(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn migrates_legacy_scalar_fields_to_sequences() {
        let raw = json!({
            "category": "Pantry",
            "location": "",
            "quantity": ["zero"],
            "expiry": "soon",
            "searchText": "milk",
            "showAdvanced": true,
            "sortMethod": "expiry"
        });

        let filters = FilterState::normalize(&raw);
        assert_eq!(filters.category, vec!["Pantry".to_string()]);
        assert!(filters.location.is_empty());
        assert_eq!(filters.quantity, vec!["zero".to_string()]);
        assert_eq!(filters.expiry, vec!["soon".to_string()]);
        assert_eq!(filters.search_text, "milk");
        assert!(filters.show_advanced);
        assert_eq!(filters.sort_method, "expiry");
    }

    #[test]
    fn normalize_defaults_missing_and_bogus_fields() {
        let raw = json!({
            "category": 42,
            "location": {"nested": true},
            "sortMethod": ""
        });

        let filters = FilterState::normalize(&raw);
        assert!(filters.category.is_empty());
        assert!(filters.location.is_empty());
        assert!(filters.quantity.is_empty());
        assert_eq!(filters.search_text, "");
        assert!(!filters.show_advanced);
        assert_eq!(filters.sort_method, DEFAULT_SORT_METHOD);
    }

    #[test]
    fn normalized_state_round_trips_through_serde() {
        let raw = json!({"category": "Pantry", "searchText": "a"});
        let filters = FilterState::normalize(&raw);

        let text = serde_json::to_string(&filters).unwrap();
        let reparsed = FilterState::normalize(&serde_json::from_str(&text).unwrap());
        assert_eq!(filters, reparsed);
    }

    #[test]
    fn has_active_checks_every_criterion() {
        assert!(!FilterState::default().has_active());

        let mut filters = FilterState::default();
        filters.search_text = "x".to_string();
        assert!(filters.has_active());

        let mut filters = FilterState::default();
        filters.expiry = vec!["expired".to_string()];
        assert!(filters.has_active());
    }

    #[test]
    fn alert_days_treats_zero_as_missing() {
        let mut item = InventoryItem::new("Milk");
        assert_eq!(item.alert_days(), DEFAULT_EXPIRY_ALERT_DAYS);

        item.expiry_alert_days = Some(0);
        assert_eq!(item.alert_days(), DEFAULT_EXPIRY_ALERT_DAYS);

        item.expiry_alert_days = Some(3);
        assert_eq!(item.alert_days(), 3);
    }

    #[test]
    fn expiry_parses_iso_dates_only() {
        let mut item = InventoryItem::new("Milk");
        item.expiry_date = Some("2025-03-14".to_string());
        assert_eq!(item.expiry(), NaiveDate::from_ymd_opt(2025, 3, 14));

        item.expiry_date = Some("not a date".to_string());
        assert_eq!(item.expiry(), None);
    }

    #[test]
    fn display_name_falls_back_to_entity_id() {
        let mut state = EntityState {
            entity_id: "sensor.pantry".to_string(),
            ..EntityState::default()
        };
        assert_eq!(state.display_name(), "sensor.pantry");

        state.attributes.friendly_name = Some("Pantry".to_string());
        assert_eq!(state.display_name(), "Pantry");
    }

    #[test]
    fn unique_option_lists_are_sorted_and_deduped() {
        let items = vec![
            fixtures::stocked_item("A", "Pantry", "Shelf 2"),
            fixtures::stocked_item("B", "Fridge", "Shelf 1"),
            fixtures::stocked_item("C", "Pantry", "Shelf 1"),
            fixtures::item("D"),
        ];

        assert_eq!(unique_categories(&items), vec!["Fridge", "Pantry"]);
        assert_eq!(unique_locations(&items), vec!["Shelf 1", "Shelf 2"]);
    }
}
