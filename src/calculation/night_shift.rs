//! Night-shift hour counting.
//!
//! This module counts how many hours of a wall-clock span fall inside the
//! night window (22:00-06:59).

use crate::models::ClockHour;

/// Counts the hours inside the night window over a wall-clock span.
///
/// Starting at `start`, advances hour-by-hour for `hour_count` steps,
/// wrapping midnight, and counts each visited hour that lies inside the
/// night window. The span is counted from the clock-in hour over the full
/// worked span for reporting, and over just the overtime span when
/// splitting overtime pay.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::count_night_hours;
/// use payroll_engine::models::ClockHour;
///
/// // 22:00 for 8 hours visits 22, 23, 0, 1, 2, 3, 4, 5 - all night
/// let start = ClockHour::new(22).unwrap();
/// assert_eq!(count_night_hours(start, 8), 8);
///
/// // 20:00 for 4 hours visits 20, 21, 22, 23 - two night hours
/// let start = ClockHour::new(20).unwrap();
/// assert_eq!(count_night_hours(start, 4), 2);
/// ```
pub fn count_night_hours(start: ClockHour, hour_count: u32) -> u32 {
    let mut hour = start;
    let mut night_hours = 0;
    for _ in 0..hour_count {
        if hour.is_night() {
            night_hours += 1;
        }
        hour = hour.successor();
    }
    night_hours
}
