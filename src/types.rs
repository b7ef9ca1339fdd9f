use std::fmt;
use std::ops::Range;

/// One register array declaration together with its initial block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationMatch {
    /// Leading whitespace of the declaration line
    pub indent: String,
    /// Text between the first pair of brackets, e.g. "3:0"
    pub width: String,
    pub name: String,
    /// Text between the second pair of brackets, e.g. "0:1"
    pub depth: String,
    /// Body lines between `initial begin` and `end`, verbatim
    pub block: String,
    /// Byte offset of `block` in the source text
    pub block_start: usize,
    /// Start of the declaration line
    pub start: usize,
    /// One past the end of the `end` line, including its terminator
    pub end: usize,
    /// Terminator of the declaration line
    pub newline: String,
    /// Terminator of the `end` line ("\n", "\r\n" or "")
    pub line_ending: String,
}

impl DeclarationMatch {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A hex literal exactly as written after the `'h` marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralToken(String);

impl LiteralToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LiteralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LiteralToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Ordered tokens destined for one memory image file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryImage {
    tokens: Vec<LiteralToken>,
}

impl MemoryImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: LiteralToken) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Serialized form: one token per line, each newline-terminated.
    /// An empty image renders as zero bytes.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(self.tokens.len() * 4);
        for token in &self.tokens {
            output.push_str(token.as_str());
            output.push('\n');
        }
        output
    }
}

impl FromIterator<LiteralToken> for MemoryImage {
    fn from_iter<I: IntoIterator<Item = LiteralToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
