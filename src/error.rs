use thiserror::Error;

/// What went wrong while parsing a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unexpected end of pattern")]
    UnexpectedEndOfInput,

    #[error("expected {expected:?} but found {}", found_text(.found))]
    ExpectedCharacter { expected: char, found: Option<char> },

    #[error("unterminated character class")]
    UnterminatedCharacterClass,

    #[error("unbalanced group: unmatched {0:?}")]
    UnbalancedGroup(char),

    #[error("invalid quantifier range {{{min},{max}}}: maximum is less than minimum")]
    InvalidQuantifierRange { min: u32, max: u32 },

    #[error("quantifier {0:?} follows nothing")]
    QuantifierWithoutAtom(char),

    #[error("nested quantifier {0:?}")]
    NestedQuantifier(char),

    #[error("unrecognized group construct {0:?}")]
    UnknownGroupConstruct(String),

    #[error("invalid backreference {0:?}")]
    InvalidBackreference(String),

    #[error("invalid group name {0:?}")]
    InvalidGroupName(String),

    #[error("invalid escape sequence {0:?}")]
    InvalidEscape(String),

    #[error("character range {start:?}-{end:?} is in reverse order")]
    ReversedCharacterRange { start: char, end: char },

    #[error("number {0} is too large")]
    NumberTooLarge(String),

    #[error("nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    #[error("a subtraction must be the last element in a character class")]
    SubtractionNotLast,
}

fn found_text(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of pattern".to_string(),
    }
}

/// A parse failure and the character offset it refers to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct AnalysisError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl AnalysisError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The text callers are expected to show as-is.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
