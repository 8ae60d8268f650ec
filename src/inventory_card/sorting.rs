//! Sort strategies for the item list.
//!
//! Every strategy is a comparator plus a tie-break chain ending in the item
//! name, so the resulting order is total and deterministic. Name, category,
//! and location comparisons are case-insensitive, trimmed, and natural:
//! digit runs compare by numeric value, so `item2` sorts before `item10`.

use crate::localize::{localize, TranslationData};
use crate::model::InventoryItem;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

pub const DEFAULT_SORT_METHOD: &str = "name";

/// Dates sort as strings; items without one sort last under this sentinel.
const NO_EXPIRY_SENTINEL: &str = "9999-12-31";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMethod {
    Name,
    Category,
    Location,
    Quantity,
    QuantityLow,
    Expiry,
    ZeroLast,
}

impl SortMethod {
    pub const ALL: [SortMethod; 7] = [
        SortMethod::Name,
        SortMethod::Category,
        SortMethod::Location,
        SortMethod::Quantity,
        SortMethod::QuantityLow,
        SortMethod::Expiry,
        SortMethod::ZeroLast,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(SortMethod::Name),
            "category" => Some(SortMethod::Category),
            "location" => Some(SortMethod::Location),
            "quantity" => Some(SortMethod::Quantity),
            "quantity_low" => Some(SortMethod::QuantityLow),
            "expiry" => Some(SortMethod::Expiry),
            "zero_last" => Some(SortMethod::ZeroLast),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortMethod::Name => "name",
            SortMethod::Category => "category",
            SortMethod::Location => "location",
            SortMethod::Quantity => "quantity",
            SortMethod::QuantityLow => "quantity_low",
            SortMethod::Expiry => "expiry",
            SortMethod::ZeroLast => "zero_last",
        }
    }
}

/// Orders a copy of `items` by the named strategy. An unrecognized method
/// returns the input order unchanged.
pub fn sort_items(
    items: &[InventoryItem],
    method: &str,
    translations: &TranslationData,
) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();

    let Some(method) = SortMethod::parse(method) else {
        return sorted;
    };

    match method {
        SortMethod::Name => {
            sorted.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        }
        SortMethod::Category => {
            let uncategorized =
                localize(translations, "common.uncategorized", &[], Some("Uncategorized"));
            sorted.sort_by(|a, b| {
                let ca = a.category.as_deref().unwrap_or(uncategorized.as_str());
                let cb = b.category.as_deref().unwrap_or(uncategorized.as_str());
                natural_cmp(ca, cb).then_with(|| natural_cmp(&a.name, &b.name))
            });
        }
        SortMethod::Location => {
            let no_location =
                localize(translations, "common.no_location", &[], Some("No Location"));
            sorted.sort_by(|a, b| {
                let la = a.location.as_deref().unwrap_or(no_location.as_str());
                let lb = b.location.as_deref().unwrap_or(no_location.as_str());
                natural_cmp(la, lb).then_with(|| natural_cmp(&a.name, &b.name))
            });
        }
        SortMethod::Quantity => {
            sorted.sort_by(|a, b| {
                b.quantity
                    .total_cmp(&a.quantity)
                    .then_with(|| natural_cmp(&a.name, &b.name))
            });
        }
        SortMethod::QuantityLow => {
            sorted.sort_by(|a, b| {
                a.quantity
                    .total_cmp(&b.quantity)
                    .then_with(|| natural_cmp(&a.name, &b.name))
            });
        }
        SortMethod::Expiry => {
            sorted.sort_by(|a, b| {
                let da = a.expiry_date.as_deref().unwrap_or(NO_EXPIRY_SENTINEL);
                let db = b.expiry_date.as_deref().unwrap_or(NO_EXPIRY_SENTINEL);
                da.cmp(db).then_with(|| natural_cmp(&a.name, &b.name))
            });
        }
        SortMethod::ZeroLast => {
            sorted.sort_by(|a, b| {
                let a_out = a.quantity <= 0.0;
                let b_out = b.quantity <= 0.0;
                a_out
                    .cmp(&b_out)
                    .then_with(|| natural_cmp(&a.name, &b.name))
            });
        }
    }

    sorted
}

/// Case-insensitive, trimmed comparison with numeric digit runs compared by
/// value rather than character by character.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut xs);
                    let run_b = take_digit_run(&mut ys);
                    let ord = compare_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.cmp(&y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    xs.next();
                    ys.next();
                }
            }
        }
    }
}

fn take_digit_run(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            run.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    // Longer run of significant digits is the larger number.
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        ord => ord,
    }
}
