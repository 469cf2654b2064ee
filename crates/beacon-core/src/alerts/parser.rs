//! Signal message parser.
//!
//! Signal senders emit a fixed three-line message:
//!
//! ```text
//! BTCUSDT | BUY+LONG Signal
//! P: 45000.50  ATR: 1200.30  RSI: 35.20
//! LongStop: 43500.00  ShortStop: 46500.00
//! ```
//!
//! Line 1 carries the symbol and signal type, line 2 the price indicators and
//! line 3 the stop levels. Lines after the third are ignored. Numeric values
//! are captured as the exact text that was sent.

use std::str::FromStr;

use super::types::ParsedAlert;

/// Word that must close the header line.
const SIGNAL_SUFFIX: &str = "Signal";

/// Labels expected on the indicator line, in the order they are reported.
const PRICE_LABEL: &str = "P";
const ATR_LABEL: &str = "ATR";
const RSI_LABEL: &str = "RSI";

/// Labels expected on the stop line.
const LONG_STOP_LABEL: &str = "LongStop";
const SHORT_STOP_LABEL: &str = "ShortStop";

/// Number of lines a message must contain.
pub const REQUIRED_LINES: usize = 3;

/// Reasons a message is rejected. A failed parse never yields a partial record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected at least 3 lines, got {found}")]
    TooFewLines { found: usize },

    #[error("header line has no '|' separator")]
    MissingSeparator,

    #[error("header line does not end with ' Signal'")]
    MissingSignalSuffix,

    #[error("header line has an empty symbol")]
    EmptySymbol,

    #[error("header line has an empty signal type")]
    EmptySignalType,

    #[error("missing numeric field '{0}'")]
    MissingField(&'static str),
}

/// Parses a signal message into its seven fields.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first rule the message breaks.
pub fn parse_message(message: &str) -> Result<ParsedAlert, ParseError> {
    let lines: Vec<&str> = message
        .split('\n')
        .take(REQUIRED_LINES)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let &[header, indicators, stops] = lines.as_slice() else {
        return Err(ParseError::TooFewLines { found: lines.len() });
    };

    let (symbol, signal_type) = parse_header(header)?;

    Ok(ParsedAlert {
        symbol,
        signal_type,
        price: labeled_number(indicators, PRICE_LABEL)?,
        atr: labeled_number(indicators, ATR_LABEL)?,
        rsi: labeled_number(indicators, RSI_LABEL)?,
        long_stop: labeled_number(stops, LONG_STOP_LABEL)?,
        short_stop: labeled_number(stops, SHORT_STOP_LABEL)?,
    })
}

impl FromStr for ParsedAlert {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_message(s)
    }
}

/// Splits `"<symbol> | <signal type> Signal"`.
fn parse_header(line: &str) -> Result<(String, String), ParseError> {
    let (symbol, rest) = line.split_once('|').ok_or(ParseError::MissingSeparator)?;

    let label = rest
        .trim_end()
        .strip_suffix(SIGNAL_SUFFIX)
        .filter(|label| label.ends_with(char::is_whitespace))
        .ok_or(ParseError::MissingSignalSuffix)?;

    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ParseError::EmptySymbol);
    }

    let signal_type = label.trim();
    if signal_type.is_empty() {
        return Err(ParseError::EmptySignalType);
    }

    Ok((symbol.to_string(), signal_type.to_string()))
}

/// Finds `label`, an optional run of `:` and whitespace, then a number.
///
/// The label has to start the line or follow a non-alphanumeric character, so
/// `P` does not match inside `SP` or `LongStop`.
fn labeled_number(line: &str, label: &'static str) -> Result<String, ParseError> {
    let mut from = 0;

    while let Some(offset) = line[from..].find(label) {
        let start = from + offset;
        let end = start + label.len();

        let at_boundary =
            line[..start].chars().next_back().is_none_or(|c| !c.is_alphanumeric());

        if at_boundary {
            if let Some(token) = numeric_token(&line[end..]) {
                return Ok(token.to_string());
            }
        }

        from = end;
    }

    Err(ParseError::MissingField(label))
}

/// Reads `digits[.digits]` after skipping separators. At least one digit is required.
fn numeric_token(rest: &str) -> Option<&str> {
    let rest = rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace());
    let bytes = rest.as_bytes();

    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut len = int_len;
    let mut frac_len = 0;

    if bytes.get(len) == Some(&b'.') {
        frac_len = bytes[len + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        len += 1 + frac_len;
    }

    (int_len + frac_len > 0).then(|| &rest[..len])
}
