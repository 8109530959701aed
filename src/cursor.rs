use crate::error::{AnalysisError, ErrorKind, Result};
use crate::node::Span;

/// The pattern text, indexed by character rather than by byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSource {
    text: String,
    chars: Vec<char>,
}

impl PatternSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The text covered by `span`, or an empty string if the span does not fit.
    pub fn slice(&self, span: Span) -> String {
        self.chars
            .get(span.start..span.end)
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self, 0)
    }
}

/// A position in a [`PatternSource`].
///
/// Cursors are plain values: every primitive that moves returns a new cursor
/// and leaves the old one untouched, so keeping a copy is a checkpoint.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a PatternSource,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a PatternSource, position: usize) -> Self {
        Self {
            source,
            position: position.min(source.len()),
        }
    }

    pub fn source(self) -> &'a PatternSource {
        self.source
    }

    pub fn position(self) -> usize {
        self.position
    }

    pub fn at_end(self) -> bool {
        self.position >= self.source.len()
    }

    /// The character `offset` places ahead, without moving.
    pub fn peek(self, offset: usize) -> Option<char> {
        self.source.char_at(self.position + offset)
    }

    pub fn advance(self, count: usize) -> Self {
        Self::new(self.source, self.position + count)
    }

    pub fn consume(self) -> Result<(char, Self)> {
        match self.peek(0) {
            Some(c) => Ok((c, self.advance(1))),
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    pub fn expect(self, expected: char) -> Result<Self> {
        match self.peek(0) {
            Some(c) if c == expected => Ok(self.advance(1)),
            found => Err(self.error(ErrorKind::ExpectedCharacter { expected, found })),
        }
    }

    /// Consumes `expected` if it is next.
    pub fn eat(self, expected: char) -> Option<Self> {
        (self.peek(0) == Some(expected)).then(|| self.advance(1))
    }

    /// Consumes characters while `predicate` holds and returns them.
    pub fn take_while(self, predicate: impl Fn(char) -> bool) -> (String, Self) {
        let mut taken = String::new();
        let mut cursor = self;
        while let Some(c) = cursor.peek(0).filter(|&c| predicate(c)) {
            taken.push(c);
            cursor = cursor.advance(1);
        }
        (taken, cursor)
    }

    /// Skips whitespace and `#` comments when free-spacing is on.
    pub fn skip_trivia(self, free_spacing: bool) -> Self {
        if !free_spacing {
            return self;
        }
        let mut cursor = self;
        loop {
            match cursor.peek(0) {
                Some(c) if c.is_whitespace() => cursor = cursor.advance(1),
                Some('#') => {
                    let (_, rest) = cursor.take_while(|c| c != '\n');
                    cursor = rest.eat('\n').unwrap_or(rest);
                }
                _ => return cursor,
            }
        }
    }

    /// The span from `self` up to `end`.
    pub fn span_to(self, end: Cursor<'_>) -> Span {
        Span::new(self.position, end.position)
    }

    pub fn error(self, kind: ErrorKind) -> AnalysisError {
        AnalysisError::new(kind, self.position)
    }
}
