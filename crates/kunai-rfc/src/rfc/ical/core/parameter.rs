//! Property parameters (RFC 5545 §3.2).

/// A property parameter with one or more values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a single-valued parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_values(name, vec![value.into()])
    }

    /// Creates a parameter with several values.
    #[must_use]
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Parameter names compare case-insensitively.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Returns the first value of the first parameter called `name`.
#[must_use]
pub fn find_param_value<'a>(params: &'a [Parameter], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.is_named(name))
        .and_then(Parameter::value)
}
