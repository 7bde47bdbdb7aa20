use crate::{TimeError, TimeResult};

/// Calendar fields of an ISO 8601 timestamp plus its UTC offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
    /// Offset from UTC in minutes (`+08:00` is 480). Zero for `Z` or no suffix.
    pub offset_minutes: i32,
}

const MAX_ISO8601_LENGTH: usize = 40;

/// Parses `YYYY-MM-DDTHH:MM:SS[.fff][Z|±HH:MM]`.
///
/// A space may replace the `T`. Month, day, hour and minute accept one or two
/// digits. Timestamps without a suffix are taken as UTC.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let separator_pos = s.find('T').or_else(|| s.find(' ')).ok_or_else(|| {
        TimeError::ParseError(format!(
            "Invalid datetime format: '{}'. Expected YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })?;

    let (date_part, time_part_with_sep) = s.split_at(separator_pos);
    let (time_part, offset_minutes) = split_offset(&time_part_with_sep[1..])?;

    let date_components: Vec<&str> = date_part.split('-').collect();
    if date_components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    let year_field = date_components[0];
    if year_field.len() != 4 || !year_field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid year: '{}'",
            year_field
        )));
    }
    let year: i32 = year_field
        .parse()
        .map_err(|_| TimeError::ParseError(format!("Invalid year: '{}'", year_field)))?;

    let month = parse_field(date_components[1], "month")?;
    let day = parse_field(date_components[2], "day")?;

    if !(1..=12).contains(&month) {
        return Err(TimeError::ParseError(format!(
            "Month out of range: {}",
            month
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(TimeError::ParseError(format!("Day out of range: {}", day)));
    }

    let time_components: Vec<&str> = time_part.split(':').collect();
    if time_components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time_part
        )));
    }

    let hour = parse_field(time_components[0], "hour")?;
    let minute = parse_field(time_components[1], "minute")?;
    let second = time_components[2]
        .parse::<f64>()
        .map_err(|_| TimeError::ParseError(format!("Invalid second: '{}'", time_components[2])))?;

    if hour > 23 {
        return Err(TimeError::ParseError(format!(
            "Hour out of range: {}",
            hour
        )));
    }
    if minute > 59 {
        return Err(TimeError::ParseError(format!(
            "Minute out of range: {}",
            minute
        )));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(TimeError::ParseError(format!(
            "Second out of range: {}",
            second
        )));
    }

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        offset_minutes,
    })
}

/// One- or two-digit unsigned field.
fn parse_field(field: &str, name: &str) -> TimeResult<u8> {
    let bytes = field.as_bytes();
    let valid = matches!(bytes.len(), 1 | 2) && bytes.iter().all(|b| b.is_ascii_digit());
    if !valid {
        return Err(TimeError::ParseError(format!(
            "Invalid {}: '{}'",
            name, field
        )));
    }
    Ok(bytes.iter().fold(0u8, |acc, b| acc * 10 + (b - b'0')))
}

fn split_offset(time: &str) -> TimeResult<(&str, i32)> {
    if let Some(rest) = time.strip_suffix('Z').or_else(|| time.strip_suffix('z')) {
        return Ok((rest, 0));
    }

    let sign_pos = match time.rfind(['+', '-']) {
        Some(pos) => pos,
        None => return Ok((time, 0)),
    };

    let (clock, offset) = time.split_at(sign_pos);
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let digits = &offset[1..];

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() == 4 => digits.split_at(2),
        None => (digits, "0"),
    };

    let hours = parse_field(hours, "offset hours")?;
    let minutes = parse_field(minutes, "offset minutes")?;
    if hours > 14 || minutes > 59 {
        return Err(TimeError::ParseError(format!(
            "UTC offset out of range: '{}'",
            offset
        )));
    }

    Ok((clock, sign * (hours as i32 * 60 + minutes as i32)))
}
