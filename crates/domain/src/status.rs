//! Station status — clock and temperature readings, and the capture schedule
//! used to announce the next photo.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{TrapcamError, ValidationError};

/// Timestamp layout used by the backend for [`StatusReading::time`].
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One reading from the station's real-time clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReading {
    /// Local time formatted as [`TIME_FORMAT`].
    pub time: String,
    /// Degrees Celsius.
    pub temperature: f64,
}

/// Hours (0–23) at which the station takes its two daily captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSchedule {
    morning_hour: u32,
    evening_hour: u32,
}

impl Default for CaptureSchedule {
    fn default() -> Self {
        Self {
            morning_hour: 7,
            evening_hour: 20,
        }
    }
}

impl CaptureSchedule {
    /// # Errors
    ///
    /// Returns [`TrapcamError::Validation`] if either hour is 24 or more.
    pub fn new(morning_hour: u32, evening_hour: u32) -> Result<Self, TrapcamError> {
        for hour in [morning_hour, evening_hour] {
            if hour >= 24 {
                return Err(ValidationError::InvalidCaptureHour(hour).into());
            }
        }
        Ok(Self {
            morning_hour,
            evening_hour,
        })
    }

    /// Next capture after a reading taken during `hour`.
    #[must_use]
    pub fn next_after(&self, hour: u32) -> NextCapture {
        if hour >= self.evening_hour {
            NextCapture {
                hour: self.morning_hour,
                tomorrow: true,
            }
        } else if hour >= self.morning_hour {
            NextCapture {
                hour: self.evening_hour,
                tomorrow: false,
            }
        } else {
            NextCapture {
                hour: self.morning_hour,
                tomorrow: false,
            }
        }
    }
}

/// Upcoming capture slot. Displays as `07:00 AM (Tomorrow)`, `08:00 PM`, …
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextCapture {
    pub hour: u32,
    pub tomorrow: bool,
}

impl fmt::Display for NextCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, meridiem) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{hour:02}:00 {meridiem}")?;
        if self.tomorrow {
            f.write_str(" (Tomorrow)")?;
        }
        Ok(())
    }
}

/// Status fields ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub date: String,
    pub time: String,
    /// Two decimal places.
    pub temperature: String,
    pub next_capture: NextCapture,
}

impl StatusReading {
    /// Split the reading into display fields and work out the next capture.
    ///
    /// # Errors
    ///
    /// Returns [`TrapcamError::Validation`] if `time` does not follow
    /// [`TIME_FORMAT`].
    pub fn to_display(&self, schedule: &CaptureSchedule) -> Result<StatusDisplay, TrapcamError> {
        let at = NaiveDateTime::parse_from_str(self.time.trim(), TIME_FORMAT)
            .map_err(|_| ValidationError::MalformedTimestamp(self.time.clone()))?;
        Ok(StatusDisplay {
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M:%S").to_string(),
            temperature: format!("{:.2}", self.temperature),
            next_capture: schedule.next_after(at.hour()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(time: &str) -> StatusReading {
        StatusReading {
            time: time.to_string(),
            temperature: 23.456,
        }
    }

    #[test]
    fn should_split_date_and_time() {
        let display = reading("2024-06-01 13:45:09")
            .to_display(&CaptureSchedule::default())
            .unwrap();
        assert_eq!(display.date, "2024-06-01");
        assert_eq!(display.time, "13:45:09");
        assert_eq!(display.temperature, "23.46");
    }

    #[test]
    fn should_announce_evening_capture_during_the_day() {
        let display = reading("2024-06-01 07:00:00")
            .to_display(&CaptureSchedule::default())
            .unwrap();
        assert_eq!(display.next_capture.to_string(), "08:00 PM");
    }

    #[test]
    fn should_announce_tomorrow_morning_after_evening_capture() {
        let display = reading("2024-06-01 20:00:01")
            .to_display(&CaptureSchedule::default())
            .unwrap();
        assert_eq!(display.next_capture.to_string(), "07:00 AM (Tomorrow)");
    }

    #[test]
    fn should_announce_morning_capture_before_dawn() {
        let display = reading("2024-06-01 03:12:00")
            .to_display(&CaptureSchedule::default())
            .unwrap();
        assert_eq!(display.next_capture.to_string(), "07:00 AM");
    }

    #[test]
    fn should_follow_custom_schedule() {
        let schedule = CaptureSchedule::new(6, 18).unwrap();
        assert_eq!(schedule.next_after(12).to_string(), "06:00 PM");
        assert_eq!(schedule.next_after(19).to_string(), "06:00 AM (Tomorrow)");
    }

    #[test]
    fn should_format_midnight_and_noon_on_twelve_hour_clock() {
        let midnight = NextCapture {
            hour: 0,
            tomorrow: false,
        };
        let noon = NextCapture {
            hour: 12,
            tomorrow: true,
        };
        assert_eq!(midnight.to_string(), "12:00 AM");
        assert_eq!(noon.to_string(), "12:00 PM (Tomorrow)");
    }

    #[test]
    fn should_reject_out_of_range_capture_hour() {
        assert!(matches!(
            CaptureSchedule::new(7, 24),
            Err(TrapcamError::Validation(ValidationError::InvalidCaptureHour(24)))
        ));
    }

    #[test]
    fn should_reject_malformed_timestamp() {
        let result = reading("yesterday").to_display(&CaptureSchedule::default());
        assert!(matches!(
            result,
            Err(TrapcamError::Validation(ValidationError::MalformedTimestamp(ref t))) if t == "yesterday"
        ));
    }

    #[test]
    fn should_decode_backend_payload() {
        let parsed: StatusReading =
            serde_json::from_str(r#"{"time": "2024-06-01 13:45:09", "temperature": 21.5}"#)
                .unwrap();
        assert_eq!(parsed.time, "2024-06-01 13:45:09");
        assert!((parsed.temperature - 21.5).abs() < f64::EPSILON);
    }
}
