//! Bounded clock-hour value type with 24-hour wrap arithmetic.
//!
//! All circular time handling in the engine goes through [`ClockHour`] so
//! that midnight wraparound lives in one place instead of scattered
//! conditional resets.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// First hour of the night-shift window (22:00).
const NIGHT_WINDOW_START: u8 = 22;
/// Last hour inside the night-shift window (06:00-06:59).
const NIGHT_WINDOW_LAST: u8 = 6;

/// An hour on the 24-hour clock, always in `[0, 23]`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ClockHour;
///
/// let hour = ClockHour::new(23).unwrap();
/// assert_eq!(hour.successor().get(), 0);
/// assert!(hour.is_night());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClockHour(u8);

impl ClockHour {
    /// Creates a clock hour, rejecting values outside `[0, 23]`.
    pub fn new(hour: u8) -> EngineResult<Self> {
        if hour <= 23 {
            Ok(ClockHour(hour))
        } else {
            Err(EngineError::InvalidTimeValue {
                value: i64::from(hour),
            })
        }
    }

    /// Creates a clock hour from raw attendance input, where midnight may be
    /// written as hour 24.
    ///
    /// Hour 24 is normalized to 0; anything above 24 is rejected. This is
    /// the convention attendance clocks use, and it is applied only at the
    /// input boundary.
    pub fn from_clock_input(hour: u8) -> EngineResult<Self> {
        if hour == 24 { Self::new(0) } else { Self::new(hour) }
    }

    /// Returns the hour value in `[0, 23]`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the next hour on the clock, wrapping midnight.
    pub fn successor(self) -> Self {
        ClockHour((self.0 + 1) % 24)
    }

    /// Advances this hour by `hours` steps, wrapping midnight as needed.
    pub fn wrapping_add(self, hours: u32) -> Self {
        ClockHour(((u32::from(self.0) + hours) % 24) as u8)
    }

    /// Returns true when this hour lies inside the night-shift window.
    ///
    /// The window is 22:00-06:59: hours 22 and 23, and hours 0 through 6
    /// inclusive. Hour 7 is outside the window.
    pub fn is_night(self) -> bool {
        self.0 >= NIGHT_WINDOW_START || self.0 <= NIGHT_WINDOW_LAST
    }
}

impl TryFrom<u8> for ClockHour {
    type Error = EngineError;

    fn try_from(hour: u8) -> EngineResult<Self> {
        ClockHour::from_clock_input(hour)
    }
}

impl From<ClockHour> for u8 {
    fn from(hour: ClockHour) -> u8 {
        hour.get()
    }
}

impl std::fmt::Display for ClockHour {
    /// Formats the hour in military time, e.g. `0900` for 9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}00", self.0)
    }
}
