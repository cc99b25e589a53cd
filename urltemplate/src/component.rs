use std::fmt::Display;

use crate::error::{Result, TemplateParseError};

/// A component of parsed URL template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Literal text, copied verbatim into the URL.
    Constant(String),
    /// A placeholder, that should be substituted for a value
    /// (contains the exact text found between the braces, which may be empty).
    Variable(String),
}

impl Component {
    /// Check, if this component is a placeholder.
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Get name of the variable, if this component is one.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            Self::Constant(_) => None,
        }
    }

    /// Get literal text, if this component is a constant.
    pub fn as_constant(&self) -> Option<&str> {
        match self {
            Self::Constant(text) => Some(text),
            Self::Variable(_) => None,
        }
    }
}

/// Writes the literal form of the component, i.e. `text` or `{name}`.
impl Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(text) => f.write_str(text),
            Self::Variable(name) => write!(f, "{{{name}}}"),
        }
    }
}

/// Parse raw template string into ordered components.
///
/// The scan stops at the first (leftmost) misplaced brace. An empty input
/// yields no components.
pub fn parse(raw: &str) -> Result<Vec<Component>> {
    let mut lexer = Lexer::new(raw);

    for (idx, ch) in raw.char_indices() {
        lexer.feed(idx, ch)?;
    }

    lexer.finish()
}

/// Concatenate literal forms of components back into a template string.
pub fn reconstruct(components: &[Component]) -> String {
    components.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Scanning,
    InVariable,
}

/// Pending buffers are kept as the byte range `mark..idx` of the input.
struct Lexer<'s> {
    raw: &'s str,
    state: State,
    mark: usize,
    components: Vec<Component>,
}

impl<'s> Lexer<'s> {
    fn new(raw: &'s str) -> Self {
        Self {
            raw,
            state: State::Scanning,
            mark: 0,
            components: vec![],
        }
    }

    fn pending(&self, idx: usize) -> &'s str {
        &self.raw[self.mark..idx]
    }

    fn feed(&mut self, idx: usize, ch: char) -> Result<()> {
        match (self.state, ch) {
            (State::Scanning, '{') => {
                self.flush_constant(idx);
                self.state = State::InVariable;
                self.mark = idx + 1;
            }
            (State::Scanning, '}') => {
                return Err(TemplateParseError::UnopenedBrace {
                    prefix: self.pending(idx).to_owned(),
                });
            }
            (State::InVariable, '{') => {
                return Err(TemplateParseError::NestedBrace {
                    partial: self.pending(idx).to_owned(),
                });
            }
            (State::InVariable, '}') => {
                let name = self.pending(idx).to_owned();
                self.components.push(Component::Variable(name));
                self.state = State::Scanning;
                self.mark = idx + 1;
            }
            _ => {}
        }

        Ok(())
    }

    fn flush_constant(&mut self, idx: usize) {
        let text = self.pending(idx);
        if !text.is_empty() {
            self.components.push(Component::Constant(text.to_owned()));
        }
    }

    fn finish(mut self) -> Result<Vec<Component>> {
        let end = self.raw.len();

        match self.state {
            State::Scanning => {
                self.flush_constant(end);
                Ok(self.components)
            }
            State::InVariable => Err(TemplateParseError::UnclosedBrace {
                suffix: self.pending(end).to_owned(),
            }),
        }
    }
}
