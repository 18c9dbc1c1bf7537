//! Tag-filter projection over a pin collection.

use std::collections::HashSet;

use crate::model::Pin;

/// Select the pins matching an active tag-filter set.
///
/// An empty filter set matches everything. Otherwise a pin matches when its
/// main tag is in the set or any of its supporting tags is. Neither input
/// is mutated; the result borrows from `pins`.
pub fn filter_pins<'a>(pins: &'a [Pin], filter: &HashSet<String>) -> Vec<&'a Pin> {
    if filter.is_empty() {
        return pins.iter().collect();
    }
    pins.iter()
        .filter(|pin| {
            filter.contains(&pin.main_tag)
                || pin.supporting_tags.iter().any(|tag| filter.contains(tag))
        })
        .collect()
}
