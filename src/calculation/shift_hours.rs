//! Worked-hour derivation from raw clock hours.
//!
//! This module converts a day's clock-in and clock-out hours into the
//! worked/overtime hour split used by the salary scenarios.

use crate::models::ClockHour;

/// Hours of unpaid break subtracted from every worked span.
pub const BREAK_HOURS: u32 = 1;

/// The worked-hour split for one attended day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedHours {
    /// Raw span between clock-in and the adjusted clock-out, break included.
    pub with_break: u32,
    /// Paid hours after subtracting the unpaid break hour.
    pub worked: u32,
    /// Hours beyond the configured regular maximum.
    pub overtime: u32,
}

/// Adjusts a clock-out hour for shifts that cross midnight.
///
/// Clock-outs in `[0, 12]` are treated as next-day hours and shifted up by
/// 24; later hours are returned unchanged. Applying the adjustment to an
/// already-adjusted value is a no-op.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::adjust_out_hour;
///
/// assert_eq!(adjust_out_hour(6), 30);   // 06:00 the next morning
/// assert_eq!(adjust_out_hour(18), 18);  // same-day evening
/// assert_eq!(adjust_out_hour(adjust_out_hour(6)), 30);
/// ```
pub fn adjust_out_hour(out_hour: u32) -> u32 {
    if out_hour <= 12 { out_hour + 24 } else { out_hour }
}

/// Derives the worked-hour split for one attended day.
///
/// The span between clock-in and the midnight-adjusted clock-out includes
/// one unpaid break hour, which is always subtracted. Overtime is whatever
/// remains beyond `max_regular_hours`; both subtractions clamp at zero for
/// spans shorter than expected.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::derive_worked_hours;
/// use payroll_engine::models::ClockHour;
///
/// let clock_in = ClockHour::new(9).unwrap();
/// let clock_out = ClockHour::new(20).unwrap();
/// let hours = derive_worked_hours(clock_in, clock_out, 8);
/// assert_eq!(hours.with_break, 11);
/// assert_eq!(hours.worked, 10);
/// assert_eq!(hours.overtime, 2);
/// ```
pub fn derive_worked_hours(
    clock_in: ClockHour,
    clock_out: ClockHour,
    max_regular_hours: u32,
) -> WorkedHours {
    let adjusted_out = adjust_out_hour(u32::from(clock_out.get()));
    let with_break =
        (i64::from(adjusted_out) - i64::from(clock_in.get())).unsigned_abs() as u32;
    let worked = with_break.saturating_sub(BREAK_HOURS);
    let overtime = worked.saturating_sub(max_regular_hours);

    WorkedHours {
        with_break,
        worked,
        overtime,
    }
}
