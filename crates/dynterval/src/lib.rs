mod bound;
mod error;
mod interval;
mod scanner;
mod types;

pub use bound::{parse_bound, parse_date_bound};
pub use error::{ErrorKind, ParseError};
pub use interval::{Interval, IntervalWithValue, Parsed};
pub use types::{AttributeType, AttributeValue};

/// Parses a dynamic attribute string into its intervals, bounds only. Any
/// third token inside a group is dropped.
pub fn parse_intervals(input: &str) -> Result<Parsed<Interval>, ParseError> {
    Ok(scanner::scan(input, None)?.map(|entry| entry.interval))
}

/// Parses a dynamic attribute string into its intervals, coercing each
/// group's optional third token to `declared`.
pub fn parse_intervals_with_values(
    declared: AttributeType,
    input: &str,
) -> Result<Parsed<IntervalWithValue>, ParseError> {
    scanner::scan(input, Some(declared))
}
