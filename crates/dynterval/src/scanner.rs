use crate::bound::parse_bound;
use crate::error::ParseError;
use crate::interval::{Interval, IntervalWithValue, Parsed};
use crate::types::AttributeType;

const EMPTY_SENTINEL: &str = "<empty>";

/// Scans a whole input for interval groups. Characters between groups are
/// separator noise and carry no meaning; the groups themselves come back in
/// the order their openers appeared.
pub(crate) fn scan(
    input: &str,
    declared: Option<AttributeType>,
) -> Result<Parsed<IntervalWithValue>, ParseError> {
    if input.trim().eq_ignore_ascii_case(EMPTY_SENTINEL) {
        return Ok(Parsed::Empty);
    }

    // One synthetic trailing space so backing the cursor up one position
    // after a read never lands past the end of the buffer.
    let chars: Vec<char> = input.chars().chain(std::iter::once(' ')).collect();
    let mut index = 0usize;
    let mut intervals = Vec::new();

    while index < chars.len() {
        let ch = chars[index];
        index += 1;
        match ch {
            '[' | '(' => {
                intervals.push(scan_group(&chars, &mut index, ch == '(', declared)?);
            }
            _ => {}
        }
    }

    if intervals.is_empty() {
        return Err(ParseError::NoIntervals);
    }

    Ok(Parsed::Intervals(intervals))
}

/// Consumes one group body, cursor positioned just after the opener. The
/// opener decided the low bound's openness; `]` makes the high bound
/// inclusive, `)` leaves it exclusive. Running out of input still builds the
/// group from whatever was collected.
fn scan_group(
    chars: &[char],
    index: &mut usize,
    low_open: bool,
    declared: Option<AttributeType>,
) -> Result<IntervalWithValue, ParseError> {
    let offset = *index - 1;
    let mut tokens: Vec<String> = Vec::new();
    let mut high_open = true;

    while *index < chars.len() {
        let ch = chars[*index];
        *index += 1;
        match ch {
            ']' => {
                high_open = false;
                break;
            }
            ')' => break,
            ' ' | '\t' | '\r' | '\n' | ',' => {}
            '\'' | '"' => tokens.push(scan_literal(chars, index, ch)),
            _ => {
                // Back up one position so the bare scanner sees the first
                // character of the token.
                *index -= 1;
                tokens.push(scan_bare(chars, index));
            }
        }
    }

    build_interval(tokens, low_open, high_open, declared, offset)
}

/// Reads a quoted literal until the matching unescaped quote. Only `\\` and
/// an escaped quote are meaningful escapes; a backslash before anything else
/// is dropped. Hitting end of input keeps the accumulated content rather than
/// failing.
fn scan_literal(chars: &[char], index: &mut usize, quote: char) -> String {
    let mut out = String::new();
    let mut escape_pending = false;

    while *index < chars.len() {
        let ch = chars[*index];
        *index += 1;
        if ch == quote {
            if escape_pending {
                out.push(quote);
                escape_pending = false;
            } else {
                return out;
            }
        } else if ch == '\\' {
            if escape_pending {
                out.push('\\');
                escape_pending = false;
            } else {
                escape_pending = true;
            }
        } else {
            escape_pending = false;
            out.push(ch);
        }
    }

    out
}

/// Reads an unquoted token up to the next comma or closer. A closer is left
/// in place for the group scanner; the result is whitespace-trimmed.
fn scan_bare(chars: &[char], index: &mut usize) -> String {
    let mut out = String::new();

    while *index < chars.len() {
        let ch = chars[*index];
        *index += 1;
        match ch {
            ')' | ']' => {
                *index -= 1;
                break;
            }
            ',' => break,
            _ => out.push(ch),
        }
    }

    out.trim().to_string()
}

fn build_interval(
    tokens: Vec<String>,
    low_open: bool,
    high_open: bool,
    declared: Option<AttributeType>,
    offset: usize,
) -> Result<IntervalWithValue, ParseError> {
    if tokens.len() < 2 {
        return Err(ParseError::MissingBound { offset });
    }
    if tokens.len() > 3 {
        return Err(ParseError::ExtraToken { offset });
    }

    let low = parse_bound(&tokens[0])?;
    let high = parse_bound(&tokens[1])?;
    let interval = Interval::new(low, high, low_open, high_open);

    let value = match (declared, tokens.get(2)) {
        (Some(target), Some(raw)) => Some(target.parse_value(raw)?),
        _ => None,
    };

    Ok(IntervalWithValue { interval, value })
}
