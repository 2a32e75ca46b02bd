// Rule-based room count inference from free-text unit type labels

pub mod keywords;
pub mod types;

pub use keywords::{match_bedroom_number, match_keyword, KEYWORD_TABLE};
pub use types::{RoomCount, UNKNOWN};

/// Infer the room count for a unit type label.
///
/// Missing labels are "Unknown". Otherwise the label is lower-cased, checked
/// against [`KEYWORD_TABLE`] in order, then against the `<number> br`
/// fallback. Never fails.
pub fn determine_room_count(unit_type: Option<&str>) -> RoomCount {
    let Some(unit_type) = unit_type else {
        return RoomCount::unknown();
    };

    let normalized = unit_type.to_lowercase();

    if let Some(category) = match_keyword(&normalized) {
        return RoomCount::category(category);
    }

    // Not clamped to the keyword categories: "9 br" yields "9"
    if let Some(number) = match_bedroom_number(&normalized) {
        return RoomCount::captured(number);
    }

    RoomCount::unknown()
}

/// Classify each label in order
pub fn classify_all<S: AsRef<str>>(unit_types: &[S]) -> Vec<(String, RoomCount)> {
    unit_types
        .iter()
        .map(|u| {
            let u = u.as_ref();
            (u.to_string(), determine_room_count(Some(u)))
        })
        .collect()
}
