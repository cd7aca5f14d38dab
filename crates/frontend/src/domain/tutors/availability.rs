//! In-memory edits of the weekly availability map. Nothing reaches the
//! backend until the tutor explicitly saves the whole map.

use contracts::domain::tutor::AvailabilityMap;

pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Append a slot to a day, creating the day's list on first use.
/// Blank input is rejected and the map is left untouched.
pub fn add_slot(availability: &mut AvailabilityMap, day: &str, slot: &str) -> bool {
    let slot = slot.trim();
    if slot.is_empty() {
        return false;
    }
    availability
        .entry(day.to_string())
        .or_default()
        .push(slot.to_string());
    true
}

/// Remove the slot at `index` from a day; out-of-range indexes are ignored.
pub fn remove_slot(availability: &mut AvailabilityMap, day: &str, index: usize) {
    if let Some(slots) = availability.get_mut(day) {
        if index < slots.len() {
            slots.remove(index);
        }
    }
}

/// Capitalized label for a weekday key.
pub fn day_label(day: &str) -> String {
    let mut chars = day.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_slot_to_empty_map() {
        let mut availability = AvailabilityMap::new();
        assert!(add_slot(&mut availability, "monday", "09:00-12:00"));
        assert_eq!(availability["monday"], vec!["09:00-12:00"]);
    }

    #[test]
    fn test_add_slot_trims_and_rejects_blank() {
        let mut availability = AvailabilityMap::new();
        assert!(!add_slot(&mut availability, "monday", "   "));
        assert!(availability.is_empty());
        assert!(add_slot(&mut availability, "monday", " 14:00-17:00 "));
        assert_eq!(availability["monday"], vec!["14:00-17:00"]);
    }

    #[test]
    fn test_remove_only_slot_leaves_empty_day() {
        let mut availability = AvailabilityMap::new();
        add_slot(&mut availability, "monday", "09:00-12:00");
        remove_slot(&mut availability, "monday", 0);
        assert!(availability["monday"].is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut availability = AvailabilityMap::new();
        add_slot(&mut availability, "friday", "09:00-12:00");
        remove_slot(&mut availability, "friday", 5);
        remove_slot(&mut availability, "sunday", 0);
        assert_eq!(availability["friday"], vec!["09:00-12:00"]);
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label("monday"), "Monday");
    }
}
