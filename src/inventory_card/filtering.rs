//! Multi-criterion item filter.
//!
//! Criteria combine with AND across categories and OR within a category's
//! value set. An unrecognized quantity or expiry value passes every item;
//! the original card behaved this way and tightening it would silently
//! change what saved filters match.

use crate::model::{FilterState, InventoryItem};
use chrono::{Days, NaiveDate};

pub const QUANTITY_ZERO: &str = "zero";
pub const QUANTITY_NONZERO: &str = "nonzero";

pub const EXPIRY_NONE: &str = "none";
pub const EXPIRY_EXPIRED: &str = "expired";
pub const EXPIRY_SOON: &str = "soon";
pub const EXPIRY_FUTURE: &str = "future";

/// Returns the items passing every active criterion, in input order.
/// The input is never mutated; inactive filters yield a plain copy.
pub fn filter_items(
    items: &[InventoryItem],
    filters: &FilterState,
    today: NaiveDate,
) -> Vec<InventoryItem> {
    if !filters.has_active() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| matches_all(item, filters, today))
        .cloned()
        .collect()
}

fn matches_all(item: &InventoryItem, filters: &FilterState, today: NaiveDate) -> bool {
    if !filters.search_text.is_empty() && !matches_text_search(item, &filters.search_text) {
        return false;
    }

    if !filters.category.is_empty() {
        let category = item.category.as_deref().unwrap_or("");
        if !filters.category.iter().any(|c| c == category) {
            return false;
        }
    }

    if !filters.location.is_empty() {
        let location = item.location.as_deref().unwrap_or("");
        if !filters.location.iter().any(|l| l == location) {
            return false;
        }
    }

    if !filters.quantity.is_empty() && !matches_quantity(item, &filters.quantity) {
        return false;
    }

    if !filters.expiry.is_empty() && !matches_expiry(item, &filters.expiry, today) {
        return false;
    }

    true
}

fn matches_text_search(item: &InventoryItem, search_text: &str) -> bool {
    let search = search_text.to_lowercase();
    let fields = [
        Some(item.name.as_str()),
        item.category.as_deref(),
        item.unit.as_deref(),
        item.location.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&search))
}

fn matches_quantity(item: &InventoryItem, selected: &[String]) -> bool {
    selected.iter().any(|value| match value.as_str() {
        QUANTITY_ZERO => item.quantity == 0.0,
        QUANTITY_NONZERO => item.quantity > 0.0,
        _ => true,
    })
}

fn matches_expiry(item: &InventoryItem, selected: &[String], today: NaiveDate) -> bool {
    let expiry = item.expiry();
    let threshold = today.checked_add_days(Days::new(u64::from(item.alert_days())));

    selected.iter().any(|value| match value.as_str() {
        EXPIRY_NONE => item.expiry_date.is_none(),
        EXPIRY_EXPIRED => item.quantity > 0.0 && matches!(expiry, Some(date) if date < today),
        EXPIRY_SOON => {
            item.quantity > 0.0
                && matches!((expiry, threshold), (Some(date), Some(limit)) if date >= today && date <= limit)
        }
        EXPIRY_FUTURE => {
            item.quantity > 0.0
                && matches!((expiry, threshold), (Some(date), Some(limit)) if date > limit)
        }
        _ => true,
    })
}
