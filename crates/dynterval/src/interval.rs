use serde::Serialize;

use crate::types::AttributeValue;

/// One interval with independently open (exclusive) or closed (inclusive)
/// bounds. No ordering between `low` and `high` is enforced; callers that
/// care must check it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
    pub low_open: bool,
    pub high_open: bool,
}

impl Interval {
    pub fn new(low: f64, high: f64, low_open: bool, high_open: bool) -> Self {
        Interval {
            low,
            high,
            low_open,
            high_open,
        }
    }
}

/// An interval plus the payload its body carried as a third token, coerced to
/// the declared attribute type. `value` is `None` when the body had no third
/// token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalWithValue {
    pub interval: Interval,
    pub value: Option<AttributeValue>,
}

/// Result of one parse call. `Empty` is produced only by the literal input
/// `<empty>` and is distinct from both an error and a zero-length list (zero
/// recognized groups is always reported as an error instead).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Parsed<T> {
    Empty,
    Intervals(Vec<T>),
}

impl<T> Parsed<T> {
    pub fn is_empty_sentinel(&self) -> bool {
        matches!(self, Parsed::Empty)
    }

    pub fn into_intervals(self) -> Option<Vec<T>> {
        match self {
            Parsed::Empty => None,
            Parsed::Intervals(items) => Some(items),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Empty => Parsed::Empty,
            Parsed::Intervals(items) => Parsed::Intervals(items.into_iter().map(f).collect()),
        }
    }
}
