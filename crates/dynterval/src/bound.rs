use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ParseError;

// Longest timestamp profile accepted by the calendar path:
// `yyyy-MM-ddTHH:mm:ss.sss` is 23 characters; anything past that is dropped.
const TIMESTAMP_PROFILE_LEN: usize = 23;

/// Parses one interval bound into an instant. Plain floating-point literals
/// win; tokens that are not numbers at all fall back to the date formats.
pub fn parse_bound(token: &str) -> Result<f64, ParseError> {
    // The standard float parser already accepts `inf`/`infinity` in any
    // casing, which covers the spellings the grammar allows for unbounded
    // intervals. It also accepts `NaN`, which must not become a bound.
    if let Ok(value) = token.trim().parse::<f64>() {
        if value.is_nan() {
            return Err(ParseError::NanBound {
                token: token.to_string(),
            });
        }
        return Ok(value);
    }
    parse_date_bound(token)
}

/// Parses a date or datetime token into epoch milliseconds (UTC) as a float.
pub fn parse_date_bound(token: &str) -> Result<f64, ParseError> {
    let truncated: String = token.trim().chars().take(TIMESTAMP_PROFILE_LEN).collect();
    let text = truncated.as_str();

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc().timestamp_millis() as f64);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc().timestamp_millis() as f64);
        }
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc().timestamp_millis() as f64);
    }

    Err(ParseError::InvalidBound {
        token: token.to_string(),
    })
}
