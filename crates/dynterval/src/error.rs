use crate::types::AttributeType;

/// Broad category of a parse failure, for callers that only need to know
/// whether the input shape, a bound, or a value was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Structural,
    Bound,
    Coercion,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("no intervals could be parsed")]
    NoIntervals,
    #[error("interval at offset {offset} needs both a low and a high bound")]
    MissingBound { offset: usize },
    #[error("interval at offset {offset} has more than three values")]
    ExtraToken { offset: usize },
    #[error("{token:?} is NaN, which is not a valid interval bound")]
    NanBound { token: String },
    #[error("invalid interval bound {token:?}: not a number or a known date format")]
    InvalidBound { token: String },
    #[error("cannot read {token:?} as {target:?}: {reason}")]
    Coercion {
        token: String,
        target: AttributeType,
        reason: String,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NoIntervals
            | ParseError::MissingBound { .. }
            | ParseError::ExtraToken { .. } => ErrorKind::Structural,
            ParseError::NanBound { .. } | ParseError::InvalidBound { .. } => ErrorKind::Bound,
            ParseError::Coercion { .. } => ErrorKind::Coercion,
        }
    }
}
