use std::sync::OnceLock;

use num_bigint::BigInt;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ParseError;

/// Target type declared by the caller for an interval's payload value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeType {
    Byte,
    Short,
    Integer,
    Long,
    BigInteger,
    Float,
    Double,
    BigDecimal,
    Boolean,
    Character,
    String,
}

/// Closed numeric-family categories driving the pre-coercion rewrite of the
/// raw token. Adding an `AttributeType` member forces a choice here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Integer,
    Float,
    Other,
}

impl AttributeType {
    pub(crate) fn family(self) -> Family {
        match self {
            AttributeType::Byte
            | AttributeType::Short
            | AttributeType::Integer
            | AttributeType::Long
            | AttributeType::BigInteger => Family::Integer,
            AttributeType::Float | AttributeType::Double | AttributeType::BigDecimal => {
                Family::Float
            }
            AttributeType::Boolean | AttributeType::Character | AttributeType::String => {
                Family::Other
            }
        }
    }

    /// Coerces one raw token to this type, after the family-specific rewrite:
    /// integer types drop any decimal digits (so a value authored as `3.7`
    /// still loads into an integer column), float types get the canonical
    /// `Infinity` spelling.
    pub fn parse_value(self, raw: &str) -> Result<AttributeValue, ParseError> {
        let token = match self.family() {
            Family::Integer => strip_decimal_digits(raw),
            Family::Float => normalize_infinity(raw),
            Family::Other => raw.to_string(),
        };

        let value = match self {
            AttributeType::Byte => AttributeValue::Byte(
                token
                    .parse()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::Short => AttributeValue::Short(
                token
                    .parse()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::Integer => AttributeValue::Integer(
                token
                    .parse()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::Long => AttributeValue::Long(
                token
                    .parse()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::BigInteger => AttributeValue::BigInteger(
                token
                    .parse()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::Float => AttributeValue::Float(
                token
                    .parse()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::Double => AttributeValue::Double(
                token
                    .parse()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::BigDecimal => AttributeValue::BigDecimal(
                token
                    .parse::<Decimal>()
                    .map_err(|err| coercion_failure(&token, self, err))?,
            ),
            AttributeType::Boolean => {
                if token.eq_ignore_ascii_case("true") {
                    AttributeValue::Boolean(true)
                } else if token.eq_ignore_ascii_case("false") {
                    AttributeValue::Boolean(false)
                } else {
                    return Err(coercion_failure(&token, self, "expected true or false"));
                }
            }
            AttributeType::Character => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => AttributeValue::Character(ch),
                    _ => {
                        return Err(coercion_failure(
                            &token,
                            self,
                            "expected exactly one character",
                        ))
                    }
                }
            }
            AttributeType::String => AttributeValue::String(token),
        };

        Ok(value)
    }
}

/// A coerced payload value, one variant per declarable type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AttributeValue {
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    BigInteger(BigInt),
    Float(f32),
    Double(f64),
    BigDecimal(Decimal),
    Boolean(bool),
    Character(char),
    String(String),
}

fn coercion_failure(token: &str, target: AttributeType, reason: impl ToString) -> ParseError {
    ParseError::Coercion {
        token: token.to_string(),
        target,
        reason: reason.to_string(),
    }
}

// Same rewrite the original import path applied before handing a value to an
// integer column: drop the decimal point and every digit after it.
fn strip_decimal_digits(raw: &str) -> String {
    static DECIMAL_DIGITS: OnceLock<Regex> = OnceLock::new();
    let pattern = DECIMAL_DIGITS.get_or_init(|| Regex::new(r"\.[0-9]*").expect("valid pattern"));
    pattern.replace_all(raw, "").into_owned()
}

fn normalize_infinity(raw: &str) -> String {
    if raw.eq_ignore_ascii_case("Infinity") {
        "Infinity".to_string()
    } else if raw.eq_ignore_ascii_case("-Infinity") {
        "-Infinity".to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn integer_family_strips_decimal_digits_before_coercion() {
        assert_eq!(
            AttributeType::Integer.parse_value("3.7").unwrap(),
            AttributeValue::Integer(3)
        );
        assert_eq!(
            AttributeType::Byte.parse_value("12.0").unwrap(),
            AttributeValue::Byte(12)
        );
        assert_eq!(
            AttributeType::BigInteger.parse_value("98765432109876543210.9").unwrap(),
            AttributeValue::BigInteger("98765432109876543210".parse().unwrap())
        );
    }

    #[test]
    fn float_family_normalizes_infinity_spelling() {
        assert_eq!(
            AttributeType::Double.parse_value("infinity").unwrap(),
            AttributeValue::Double(f64::INFINITY)
        );
        assert_eq!(
            AttributeType::Float.parse_value("-INFINITY").unwrap(),
            AttributeValue::Float(f32::NEG_INFINITY)
        );
    }

    #[test]
    fn big_decimal_has_no_infinity() {
        let err = AttributeType::BigDecimal.parse_value("Infinity").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Coercion);
    }

    #[test]
    fn other_family_passes_tokens_through_unchanged() {
        assert_eq!(
            AttributeType::String.parse_value("3.7").unwrap(),
            AttributeValue::String("3.7".to_string())
        );
        assert_eq!(
            AttributeType::Boolean.parse_value("TRUE").unwrap(),
            AttributeValue::Boolean(true)
        );
        assert_eq!(
            AttributeType::Character.parse_value("x").unwrap(),
            AttributeValue::Character('x')
        );
    }

    #[test]
    fn coercion_errors_carry_token_and_target() {
        let err = AttributeType::Byte.parse_value("4000").unwrap_err();
        match err {
            ParseError::Coercion { token, target, .. } => {
                assert_eq!(token, "4000");
                assert_eq!(target, AttributeType::Byte);
            }
            other => panic!("expected coercion error, got: {other:?}"),
        }
        assert!(AttributeType::Character.parse_value("xy").is_err());
        assert!(AttributeType::Boolean.parse_value("yes").is_err());
    }
}
