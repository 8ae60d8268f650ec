//! Filter-indicator view state.
//!
//! The pipeline computes this after every render so the presentation layer
//! can highlight the clear button, relabel the advanced-filters toggle, and
//! show one badge per active criterion value. Only data lives here; how the
//! badges are drawn is the renderer's business.

use crate::filtering::{
    EXPIRY_EXPIRED, EXPIRY_FUTURE, EXPIRY_NONE, EXPIRY_SOON, QUANTITY_NONZERO, QUANTITY_ZERO,
};
use crate::localize::{localize, TranslationData};
use crate::model::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Search,
    Category,
    Location,
    Quantity,
    Expiry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBadge {
    pub kind: BadgeKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorState {
    /// Any criterion is active; drives the clear-button highlight.
    pub active: bool,
    pub toggle_label: String,
    pub toggle_highlight: bool,
    pub badges: Vec<FilterBadge>,
}

pub fn build_indicator_state(
    filters: &FilterState,
    translations: &TranslationData,
) -> IndicatorState {
    let active = filters.has_active();

    let base = if filters.show_advanced {
        localize(translations, "filters.hide_filters", &[], Some("Hide Filters"))
    } else {
        localize(translations, "filters.filters", &[], Some("Filters"))
    };
    let toggle_label = if active {
        format!("{} \u{25CF}", base)
    } else {
        base
    };

    IndicatorState {
        active,
        toggle_label,
        toggle_highlight: active,
        badges: build_badges(filters, translations),
    }
}

fn build_badges(filters: &FilterState, translations: &TranslationData) -> Vec<FilterBadge> {
    let mut badges = Vec::new();

    if !filters.search_text.is_empty() {
        let prefix = localize(translations, "filters.search", &[], Some("Search"));
        badges.push(FilterBadge {
            kind: BadgeKind::Search,
            label: format!("{}: {}", prefix, filters.search_text),
        });
    }

    for value in &filters.category {
        badges.push(FilterBadge {
            kind: BadgeKind::Category,
            label: value.clone(),
        });
    }

    for value in &filters.location {
        badges.push(FilterBadge {
            kind: BadgeKind::Location,
            label: value.clone(),
        });
    }

    for value in &filters.quantity {
        badges.push(FilterBadge {
            kind: BadgeKind::Quantity,
            label: quantity_label(value, translations),
        });
    }

    for value in &filters.expiry {
        badges.push(FilterBadge {
            kind: BadgeKind::Expiry,
            label: expiry_label(value, translations),
        });
    }

    badges
}

fn quantity_label(value: &str, translations: &TranslationData) -> String {
    match value {
        QUANTITY_ZERO => localize(translations, "filters.out_of_stock", &[], Some("Out of Stock")),
        QUANTITY_NONZERO => localize(translations, "filters.in_stock", &[], Some("In Stock")),
        other => other.to_string(),
    }
}

fn expiry_label(value: &str, translations: &TranslationData) -> String {
    match value {
        EXPIRY_NONE => localize(translations, "filters.no_expiry", &[], Some("No Expiry")),
        EXPIRY_EXPIRED => localize(translations, "filters.expired", &[], Some("Expired")),
        EXPIRY_SOON => localize(translations, "filters.expiring_soon", &[], Some("Expiring Soon")),
        EXPIRY_FUTURE => localize(translations, "filters.future", &[], Some("Future")),
        other => other.to_string(),
    }
}
