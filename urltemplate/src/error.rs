use thiserror::Error;

/// Result type for parsing URL templates.
pub type Result<T> = std::result::Result<T, TemplateParseError>;

/// An error type for parsing URL templates.
///
/// Every variant carries the slice of the input the diagnostic refers to,
/// so the rendered message can be reproduced without the input string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateParseError {
    /// Input ended while a variable was still open.
    ///
    /// `suffix` is everything after the unmatched `{`.
    #[error("An opening brace with no closing brace was found. The portion of the URL following the opening brace was '{suffix}'")]
    UnclosedBrace { suffix: String },
    /// A `}` was found outside of any variable.
    ///
    /// `prefix` is the constant text collected since the last component (or start of input).
    #[error("A closing brace with no opening brace was found. The portion of the URL preceeding the closing brace was '{prefix}'")]
    UnopenedBrace { prefix: String },
    /// A `{` was found inside of a variable.
    ///
    /// `partial` is the variable name collected up to the second brace, possibly empty.
    #[error("An opening brace within another variable was found. The portion of the URL following the first opening brace up until the second opening brace was '{partial}'")]
    NestedBrace { partial: String },
}
