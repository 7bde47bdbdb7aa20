pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Modified Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_MJD: i64 = 40587;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const MILLISECONDS_PER_SECOND: f64 = 1_000.0;

pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

pub const NANOSECONDS_PER_MILLISECOND: f64 = 1_000_000.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub const DEGREES_PER_HOUR: f64 = 15.0;
