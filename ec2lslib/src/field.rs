//! Field specifications: `Name=expression` tokens.
//!
//! A field pairs a column header with an expression that is resolved
//! against every record. Parsing never fails; a token that names something
//! nonexistent simply resolves to an empty cell later.
//!
//! ## Example
//!
//! ```rust
//! use ec2lslib::FieldSpec;
//!
//! let field = FieldSpec::parse("Name=tags.Name");
//! assert_eq!(field.display_name(), "Name");
//! assert_eq!(field.expression(), "tags.Name");
//!
//! let field = FieldSpec::parse("id");
//! assert_eq!(field.display_name(), "id");
//! assert!(field.is_shorthand());
//! ```

use std::fmt;

/// A column: header text plus the expression producing its values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    display_name: String,
    expression: String,
    shorthand: bool,
}

impl FieldSpec {
    /// Create a field from an explicit header and expression.
    pub fn new(display_name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            expression: expression.into(),
            shorthand: false,
        }
    }

    /// Parse a raw token, splitting on the first `=`.
    ///
    /// Without `=` the token is both header and expression.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('=') {
            Some((name, expression)) => Self::new(name, expression),
            None => Self {
                shorthand: true,
                ..Self::new(raw, raw)
            },
        }
    }

    /// Column header text.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Expression resolved against each record.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// True when parsed from a token without `=`.
    pub fn is_shorthand(&self) -> bool {
        self.shorthand
    }

    /// Copy of this field with a different header.
    pub fn with_display_name(&self, display_name: impl Into<String>) -> Self {
        Self::new(display_name, self.expression.clone())
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_shorthand() {
            write!(f, "{}", self.expression)
        } else {
            write!(f, "{}={}", self.display_name, self.expression)
        }
    }
}

/// Parse a list of raw tokens, keeping their order.
pub fn parse_fields<S: AsRef<str>>(raw: &[S]) -> Vec<FieldSpec> {
    raw.iter().map(|token| FieldSpec::parse(token.as_ref())).collect()
}
