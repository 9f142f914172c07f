use std::fmt;

/// A malformed style literal, rejected when the style is built.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleParseError {
    pub message: String,
    pub literal: String,
}

impl StyleParseError {
    pub(crate) fn new(message: impl Into<String>, literal: impl Into<String>) -> Self {
        Self { message: message.into(), literal: literal.into() }
    }
}

impl fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "style parse error: {} in {:?}", self.message, self.literal)
    }
}

impl std::error::Error for StyleParseError {}
