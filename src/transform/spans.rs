/// Classification of one region of AWK source text
///
/// A scan partitions the input into these kinds; every byte of the input
/// belongs to exactly one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Ordinary source text, passed through unchanged
    Text,
    /// A double-quoted string literal, including both quotes
    StringLiteral,
    /// A `#` comment running to the end of its line
    Comment,
    /// A slash-delimited regex literal, including both slashes
    Regex,
}

/// A classified region of source text, as a half-open byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// The region's text within its original source
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
