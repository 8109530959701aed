use crate::cursor::PatternSource;
use crate::options::OptionChange;

/// A half-open range of character offsets into the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A predefined class of characters, written without brackets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shorthand {
    AnyChar,
    Digit,
    NotDigit,
    Word,
    NotWord,
    Whitespace,
    NotWhitespace,
    Category(String),
    NotCategory(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassItem {
    Char(char),
    Range(char, char),
    Shorthand(Shorthand),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterClass {
    pub negated: bool,
    pub items: Vec<ClassItem>,
    /// The bracketed class in `[base-[excluded]]`.
    pub subtract: Option<Box<CharacterClass>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    StartOfLine,
    EndOfLine,
    WordBoundary,
    NonWordBoundary,
    StartOfInput,
    EndOfInputBeforeNewline,
    EndOfInput,
    ContiguousMatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupKind {
    Capturing { index: u32 },
    NamedCapturing { index: u32, name: String },
    NonCapturing,
    Atomic,
    Lookahead { negated: bool },
    Lookbehind { negated: bool },
    /// `(?imnsx-imnsx:...)`; the change applies to the body only.
    Options(OptionChange),
}

impl GroupKind {
    pub fn capture_index(&self) -> Option<u32> {
        match self {
            GroupKind::Capturing { index } | GroupKind::NamedCapturing { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// Repetition bounds; `max` is `None` when unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatRange {
    pub min: u32,
    pub max: Option<u32>,
    pub lazy: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackreferenceTarget {
    Index(u32),
    Name(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Literal(String),
    Shorthand(Shorthand),
    CharacterClass(CharacterClass),
    Anchor(AnchorKind),
    Group { kind: GroupKind, body: Box<Node> },
    Quantifier { child: Box<Node>, range: RepeatRange },
    Alternation(Vec<Node>),
    Sequence(Vec<Node>),
    Backreference(BackreferenceTarget),
    Comment(String),
    InlineOptions(OptionChange),
}

/// One construct of a parsed pattern and the source text it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Group { body, .. } => vec![body.as_ref()],
            NodeKind::Quantifier { child, .. } => vec![child.as_ref()],
            NodeKind::Alternation(nodes) | NodeKind::Sequence(nodes) => nodes.iter().collect(),
            NodeKind::Literal(_)
            | NodeKind::Shorthand(_)
            | NodeKind::CharacterClass(_)
            | NodeKind::Anchor(_)
            | NodeKind::Backreference(_)
            | NodeKind::Comment(_)
            | NodeKind::InlineOptions(_) => Vec::new(),
        }
    }

    pub fn text(&self, source: &PatternSource) -> String {
        source.slice(self.span)
    }

    /// Whether a quantifier may follow this node.
    pub fn is_quantifiable(&self) -> bool {
        !matches!(self.kind, NodeKind::Comment(_) | NodeKind::InlineOptions(_))
    }

    /// Rebuilds the node's text from its children, taking only the delimiters
    /// between them from the source.
    ///
    /// The result equals [`Node::text`] exactly when the children's spans are
    /// ordered, disjoint and nested inside this node's span.
    pub fn reconstruct(&self, source: &PatternSource) -> String {
        let mut out = String::new();
        self.write_reconstructed(source, &mut out);
        out
    }

    fn write_reconstructed(&self, source: &PatternSource, out: &mut String) {
        let mut position = self.span.start;
        for child in self.children() {
            out.push_str(&source.slice(Span::new(position, child.span.start)));
            child.write_reconstructed(source, out);
            position = child.span.end;
        }
        out.push_str(&source.slice(Span::new(position, self.span.end)));
    }
}
