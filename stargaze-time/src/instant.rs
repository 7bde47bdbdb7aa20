//! Absolute points in time with UTC semantics.
//!
//! An [`Instant`] is milliseconds since 1970-01-01T00:00:00Z held as `f64`,
//! the same representation a browser `Date` uses. Leap seconds are not
//! modelled: every day is 86 400 s, which is the POSIX convention and far
//! below the resolution of a naked-eye visibility check.
//!
//! Non-finite millisecond values are accepted and flow through every
//! downstream computation as NaN.

use crate::julian::JulianDate;
use crate::parsing::{parse_iso8601, ParsedDateTime};
use crate::{TimeError, TimeResult};
use stargaze_core::constants::{
    MILLISECONDS_PER_DAY, MILLISECONDS_PER_SECOND, NANOSECONDS_PER_MILLISECOND, UNIX_EPOCH_MJD,
};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unix milliseconds of J2000.0 (2000-01-01T12:00:00Z).
const J2000_UNIX_MILLIS: f64 = 946_728_000_000.0;

/// ±100,000,000 days around the epoch; keeps day arithmetic inside `i64`.
const MAX_FORMATTABLE_MILLIS: f64 = 8.64e15;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    unix_millis: f64,
}

impl Instant {
    pub const UNIX_EPOCH: Instant = Instant { unix_millis: 0.0 };

    pub const fn from_unix_millis(unix_millis: f64) -> Self {
        Self { unix_millis }
    }

    /// Creates an instant from Unix seconds plus a sub-second nanosecond part.
    pub fn from_unix_seconds(seconds: i64, nanos: u32) -> Self {
        Self::from_unix_millis(
            seconds as f64 * MILLISECONDS_PER_SECOND + nanos as f64 / NANOSECONDS_PER_MILLISECOND,
        )
    }

    pub fn j2000() -> Self {
        Self::from_unix_millis(J2000_UNIX_MILLIS)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(after) => Self::from_unix_millis(after.as_secs_f64() * MILLISECONDS_PER_SECOND),
            Err(before) => {
                Self::from_unix_millis(-before.duration().as_secs_f64() * MILLISECONDS_PER_SECOND)
            }
        }
    }

    /// Creates an instant from UTC calendar fields (proleptic Gregorian).
    pub fn from_calendar(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> TimeResult<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }

        let days = days_from_civil(year, month, day) as f64;
        let seconds_of_day = (hour as i64 * 3600 + minute as i64 * 60) as f64 + second;

        Ok(Self::from_unix_millis(
            days * MILLISECONDS_PER_DAY + seconds_of_day * MILLISECONDS_PER_SECOND,
        ))
    }

    pub fn unix_millis(&self) -> f64 {
        self.unix_millis
    }

    pub fn is_finite(&self) -> bool {
        self.unix_millis.is_finite()
    }

    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::from_instant(self)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self::from_unix_millis(self.unix_millis + seconds * MILLISECONDS_PER_SECOND)
    }

    fn from_parsed(parsed: &ParsedDateTime) -> TimeResult<Self> {
        let local = Self::from_calendar(
            parsed.year,
            parsed.month,
            parsed.day,
            parsed.hour,
            parsed.minute,
            parsed.second,
        )?;
        Ok(local.add_seconds(-(parsed.offset_minutes as f64) * 60.0))
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_parsed(&parse_iso8601(s)?)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.unix_millis.is_finite() || self.unix_millis.abs() > MAX_FORMATTABLE_MILLIS {
            return write!(f, "Instant({} ms)", self.unix_millis);
        }

        let total = self.unix_millis.round() as i64;
        let ms_per_day = MILLISECONDS_PER_DAY as i64;
        let days = total.div_euclid(ms_per_day);
        let ms_of_day = total.rem_euclid(ms_per_day);

        let (year, month, day) = civil_from_days(days);
        let hour = ms_of_day / 3_600_000;
        let minute = ms_of_day / 60_000 % 60;
        let second = ms_of_day / 1_000 % 60;
        let millis = ms_of_day % 1_000;

        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year, month, day, hour, minute, second, millis
        )
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a Gregorian date, via the integer MJD formula.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let my = (month - 14) / 12;
    let iypmy = year as i64 + my;

    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day as i64
        - 2432076;

    mjd - UNIX_EPOCH_MJD
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_calendar_reference_dates() {
        assert_eq!(
            Instant::from_calendar(1970, 1, 1, 0, 0, 0.0).unwrap(),
            Instant::UNIX_EPOCH
        );
        assert_eq!(
            Instant::from_calendar(2000, 1, 1, 12, 0, 0.0).unwrap(),
            Instant::j2000()
        );
        assert_eq!(
            Instant::from_calendar(2024, 3, 20, 12, 0, 0.0)
                .unwrap()
                .unix_millis(),
            1_710_936_000_000.0
        );
        assert_eq!(
            Instant::from_calendar(1969, 7, 20, 20, 17, 0.0)
                .unwrap()
                .unix_millis(),
            -14_182_980_000.0
        );
    }

    #[test]
    fn test_from_calendar_rejects_impossible_dates() {
        assert!(Instant::from_calendar(2023, 2, 29, 0, 0, 0.0).is_err());
        assert!(Instant::from_calendar(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(Instant::from_calendar(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(Instant::from_calendar(2000, 2, 29, 0, 0, 0.0).is_ok());
        assert_eq!(
            Instant::from_calendar(2024, 4, 31, 0, 0, 0.0),
            Err(TimeError::InvalidDate {
                year: 2024,
                month: 4,
                day: 31
            })
        );
    }

    #[test]
    fn test_from_unix_seconds() {
        let instant = Instant::from_unix_seconds(1_710_936_000, 500_000_000);
        assert_eq!(instant.unix_millis(), 1_710_936_000_500.0);
    }

    #[test]
    fn test_parse_utc_and_offset() {
        let utc: Instant = "2024-03-20T12:00:00Z".parse().unwrap();
        let beijing: Instant = "2024-03-20T20:00:00+08:00".parse().unwrap();
        let new_york: Instant = "2024-03-20T08:00:00-04:00".parse().unwrap();
        assert_eq!(utc, beijing);
        assert_eq!(utc, new_york);
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        let result: Result<Instant, _> = "2023-02-30T00:00:00Z".parse();
        assert!(matches!(result, Err(TimeError::InvalidDate { .. })));
    }

    #[test]
    fn test_display_round_trips() {
        let instant = Instant::from_calendar(2024, 3, 20, 12, 34, 56.789).unwrap();
        assert_eq!(instant.to_string(), "2024-03-20T12:34:56.789Z");
        let back: Instant = instant.to_string().parse().unwrap();
        assert!((back.unix_millis() - instant.unix_millis()).abs() < 1e-3);

        let before_epoch = Instant::from_unix_millis(-14_182_980_000.0);
        assert_eq!(before_epoch.to_string(), "1969-07-20T20:17:00.000Z");
    }

    #[test]
    fn test_display_non_finite() {
        let nan = Instant::from_unix_millis(f64::NAN);
        assert!(!nan.is_finite());
        assert_eq!(nan.to_string(), "Instant(NaN ms)");
    }

    #[test]
    fn test_now_is_after_2020() {
        let now = Instant::now();
        assert!(now.unix_millis() > 1_577_836_800_000.0);
    }

    #[test]
    fn test_civil_days_inverse() {
        for days in [-719_468, -1, 0, 1, 10_957, 19_802, 2_932_896] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y as i32, m as u8, d as u8), days);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_millis() {
        let instant = Instant::from_unix_millis(1_710_936_000_000.0);
        let json = serde_json::to_string(&instant).unwrap();
        assert_eq!(json, r#"{"unix_millis":1710936000000.0}"#);
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instant);
    }
}
