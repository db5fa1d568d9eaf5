use crate::service::{PriceCombination, Service, VariationType};
use std::collections::{HashMap, HashSet};

/// The shopper's current choices, keyed by axis name
pub type Selection = HashMap<String, String>;

/// Find the stored combination whose option-name set equals the
/// selected option-name set.
///
/// Axis identity and ordering are discarded at match time: a stored
/// combination matches iff its length equals the number of distinct
/// selected names and every stored name was selected. Combinations are
/// scanned in stored order and the first match wins, so duplicate
/// option names shared across axes resolve by array position (names are
/// not namespaced by axis in the backend documents).
///
/// Malformed combinations (wrong arity, repeated entries) never match;
/// they are the administrator's to correct, not an error here.
pub fn resolve_combination<'a>(
    price_combinations: &'a [PriceCombination],
    selected: &Selection,
) -> Option<&'a PriceCombination> {
    if selected.is_empty() {
        return None;
    }

    let selected_names: HashSet<&str> = selected.values().map(String::as_str).collect();

    price_combinations.iter().find(|pc| {
        pc.combination.len() == selected_names.len()
            && pc
                .combination
                .iter()
                .all(|name| selected_names.contains(name.as_str()))
    })
}

/// Price for the current selection: the matching combination's price,
/// or the service's base price when nothing matches
pub fn resolve_price(service: &Service, selected: &Selection) -> f64 {
    resolve_combination(&service.price_combinations, selected)
        .map(|pc| pc.price)
        .unwrap_or(service.base_price)
}

/// Pre-populate a selection with every axis that has exactly one
/// option, regardless of its `required` flag.
///
/// This reproduces the storefront convenience of auto-selecting
/// single-option axes; it belongs to the binding layer and is never
/// applied inside [`resolve_combination`] itself.
pub fn preselect_single_options(variation_types: &[VariationType]) -> Selection {
    variation_types
        .iter()
        .filter(|vt| vt.options.len() == 1)
        .map(|vt| (vt.name.clone(), vt.options[0].name.clone()))
        .collect()
}
