//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of a single content line.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{Parameter, find_param_value};

/// A raw content line: `name *(";" param) ":" value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding).
    pub raw_value: String,
}

impl ContentLine {
    /// Returns the value of the first parameter with the given name.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        find_param_value(&self.params, name)
    }
}

/// Unfolds content lines by removing line breaks followed by whitespace.
///
/// Per RFC 5545 §3.1 unfolding removes the CRLF and the single whitespace
/// character. Bare LF is accepted as a line break. A trailing line break is
/// dropped so a single property line comes back without a terminator.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    // Fold: skip the whitespace
                    chars.next();
                } else if chars.peek().is_some() {
                    result.push_str("\r\n");
                } else {
                    // Trailing line break
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parses a single (unfolded) content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the line is malformed or contains invalid characters.
pub fn parse_content_line(line: &str) -> ParseResult<ContentLine> {
    let mut chars = line.char_indices().peekable();
    let mut name_end = None;
    let mut colon_pos = None;

    // Find the property name (ends at ';' or ':')
    while let Some(&(i, c)) = chars.peek() {
        if c == ';' || c == ':' {
            name_end = Some(i);
            if c == ':' {
                colon_pos = Some(i);
            }
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(ParseErrorKind::InvalidPropertyName)
                .with_context(format!("column {}", i + 1)));
        }
        chars.next();
    }

    let name_end = match name_end {
        Some(0) => return Err(ParseError::new(ParseErrorKind::MissingPropertyName)),
        Some(end) => end,
        None if line.is_empty() => {
            return Err(ParseError::new(ParseErrorKind::MissingPropertyName));
        }
        None => return Err(ParseError::new(ParseErrorKind::MissingColon)),
    };

    let name = line[..name_end].to_ascii_uppercase();

    // Parse parameters if we stopped at ';'
    let mut params = Vec::new();
    if colon_pos.is_none() {
        chars.next(); // consume the ';'
        loop {
            let (param, colon) = parse_parameter(&mut chars, line)?;
            params.push(param);
            if colon.is_some() {
                colon_pos = colon;
                break;
            }
        }
    }

    let colon_pos = colon_pos.ok_or_else(|| ParseError::new(ParseErrorKind::MissingColon))?;

    Ok(ContentLine {
        name,
        params,
        raw_value: line[colon_pos + 1..].to_string(),
    })
}

/// Parses a single parameter from the character stream.
///
/// Returns the parameter and, when the parameter list ended, the position of the ':'.
fn parse_parameter(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    line: &str,
) -> ParseResult<(Parameter, Option<usize>)> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    // Parse parameter name (up to '=')
    let mut name_end = start;
    while let Some(&(i, c)) = chars.peek() {
        if c == '=' {
            name_end = i;
            chars.next(); // consume '='
            break;
        }
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(ParseError::new(ParseErrorKind::InvalidParameter)
                .with_context(format!("column {}", i + 1)));
        }
        chars.next();
    }

    if name_end == start {
        return Err(ParseError::new(ParseErrorKind::InvalidParameter)
            .with_context(format!("column {}", start + 1)));
    }

    let param_name = &line[start..name_end];

    // Parse parameter values (comma-separated, may be quoted)
    let mut values = Vec::new();
    loop {
        values.push(parse_param_value(chars, line)?);

        match chars.next() {
            Some((_, ',')) => {}
            Some((_, ';')) => return Ok((Parameter::with_values(param_name, values), None)),
            Some((i, ':')) => return Ok((Parameter::with_values(param_name, values), Some(i))),
            Some((i, c)) => {
                return Err(ParseError::new(ParseErrorKind::InvalidParameter)
                    .with_context(format!("unexpected character '{c}' at column {}", i + 1)));
            }
            None => return Err(ParseError::new(ParseErrorKind::MissingColon)),
        }
    }
}

/// Parses a parameter value (possibly quoted, with RFC 6868 caret encoding).
fn parse_param_value(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    line: &str,
) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(ParseErrorKind::MissingColon));
    };

    if first != '"' {
        // Unquoted value (ends at ',' ';' or ':')
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c == ',' || c == ';' || c == ':' {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        return Ok(line[start..end].to_string());
    }

    chars.next(); // consume opening quote
    let mut value = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '"' => return Ok(value),
            '^' => match chars.peek().map(|&(_, next)| next) {
                Some('^') => {
                    value.push('^');
                    chars.next();
                }
                Some('n') => {
                    value.push('\n');
                    chars.next();
                }
                Some('\'') => {
                    value.push('"');
                    chars.next();
                }
                // Invalid caret escape, preserve as-is
                _ => value.push('^'),
            },
            _ => value.push(c),
        }
    }

    Err(ParseError::new(ParseErrorKind::UnclosedQuote).with_context(format!("column {}", start + 1)))
}
