//! Hour-slot enumeration for pitch availability.

/// Bookable hour labels for a field, `"HH:00"` from `open_hour` up to the
/// last whole slot before closing. A `close_hour` of 24 means the 23:00
/// slot is the final one; slots never wrap past midnight.
pub fn hour_slots(open_hour: i64, close_hour: i64) -> Vec<String> {
    let last = (close_hour - 1).min(23);
    if open_hour > last {
        return Vec::new();
    }
    (open_hour..=last).map(|h| format!("{h:02}:00")).collect()
}

/// Truncate a stored time to `"HH:MM"` for comparison against slot labels.
pub fn short_time(time: &str) -> String {
    time.chars().take(5).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hours_give_twelve_slots() {
        let slots = hour_slots(12, 24);
        assert_eq!(slots.len(), 12);
        assert_eq!(slots.first().map(String::as_str), Some("12:00"));
        assert_eq!(slots.last().map(String::as_str), Some("23:00"));
    }

    #[test]
    fn close_hour_is_clamped_to_last_slot_of_day() {
        // 26 is nonsense config but must not wrap to the next day
        assert_eq!(hour_slots(22, 26).len(), 2);
    }

    #[test]
    fn degenerate_window_is_empty() {
        assert!(hour_slots(18, 18).is_empty());
        assert!(hour_slots(20, 12).is_empty());
    }

    #[test]
    fn labels_are_zero_padded() {
        assert_eq!(hour_slots(8, 10), vec!["08:00", "09:00"]);
    }

    #[test]
    fn short_time_drops_seconds() {
        assert_eq!(short_time("18:00:00"), "18:00");
        assert_eq!(short_time("9:30"), "9:30");
    }
}
