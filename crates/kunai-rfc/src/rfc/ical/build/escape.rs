//! Parameter value escaping (RFC 5545 §3.2, RFC 6868).

/// Escapes a parameter value, quoting it when it contains `:`, `;` or `,`.
///
/// Caret encoding is applied to `^`, newlines and double quotes.
#[must_use]
pub fn escape_param_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '^' => encoded.push_str("^^"),
            '\n' => encoded.push_str("^n"),
            '"' => encoded.push_str("^'"),
            _ => encoded.push(c),
        }
    }

    if value.contains([':', ';', ',']) {
        format!("\"{encoded}\"")
    } else {
        encoded
    }
}
