use crate::cursor::{Cursor, PatternSource};
use crate::error::{ErrorKind, Result};
use crate::groups::GroupTable;
use crate::node::{
    AnchorKind, BackreferenceTarget, CharacterClass, ClassItem, GroupKind, Node, NodeKind,
    RepeatRange, Shorthand, Span,
};
use crate::options::{InlineOption, OptionChange, RegexOptions};

/// How many groups and class subtractions may enclose one another.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A parsed value together with the cursor just past it.
pub(crate) type Parsed<'a, T> = Result<(T, Cursor<'a>)>;

/// Parses `source` into a node tree and its capture groups.
pub fn parse_pattern(source: &PatternSource, options: RegexOptions) -> Result<(Node, GroupTable)> {
    Parser::new(source, options).parse()
}

/// Recursive-descent parser for one pattern.
///
/// The parser only owns what outlives a single production: the group table,
/// which is numbered as opening parentheses are committed, and the options in
/// effect, which inline option constructs change. `depth` counts the groups
/// enclosing the current position and is capped at [`MAX_NESTING_DEPTH`].
pub struct Parser<'a> {
    source: &'a PatternSource,
    options: RegexOptions,
    groups: GroupTable,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a PatternSource, options: RegexOptions) -> Self {
        Self {
            source,
            options,
            groups: GroupTable::new(),
            depth: 0,
        }
    }

    /// Entry point.
    ///
    /// Example:
    /// - Pattern: `a|b` → Alternation([Sequence([Literal("a")]), Sequence([Literal("b")])])
    pub fn parse(mut self) -> Result<(Node, GroupTable)> {
        log::debug!("Parsing pattern {:?} with {:?}", self.source.as_str(), self.options);
        let (root, rest) = self.parse_alternation(self.source.cursor())?;
        if !rest.at_end() {
            // only an unmatched ')' stops the top-level alternation early
            return Err(rest.error(ErrorKind::UnbalancedGroup(')')));
        }
        log::debug!("Parsed {} capture group(s)", self.groups.len());
        Ok((root, self.groups))
    }

    /// Parse alternation (`|`) between sequences.
    ///
    /// A single branch is returned as its bare `Sequence`.
    fn parse_alternation(&mut self, start: Cursor<'a>) -> Parsed<'a, Node> {
        let (first, mut cursor) = self.parse_sequence(start)?;
        let mut rest = Vec::new();
        while let Some(after_bar) = cursor.eat('|') {
            let (branch, next) = self.parse_sequence(after_bar)?;
            rest.push(branch);
            cursor = next;
        }
        if rest.is_empty() {
            return Ok((first, cursor));
        }
        let mut branches = Vec::with_capacity(rest.len() + 1);
        branches.push(first);
        branches.extend(rest);
        Ok((
            Node::new(NodeKind::Alternation(branches), start.span_to(cursor)),
            cursor,
        ))
    }

    /// Parse terms up to the next `|`, `)` or the end of the pattern.
    ///
    /// Example:
    /// - Pattern: `ab*c` → Sequence([Literal("a"), Quantifier(Literal("b")), Literal("c")])
    fn parse_sequence(&mut self, start: Cursor<'a>) -> Parsed<'a, Node> {
        let mut items: Vec<Node> = Vec::new();
        let mut cursor = start;
        loop {
            cursor = cursor.skip_trivia(self.options.free_spacing);
            match cursor.peek(0) {
                None | Some('|') | Some(')') => break,
                Some(c @ ('*' | '+' | '?')) => {
                    return Err(cursor.error(ErrorKind::QuantifierWithoutAtom(c)));
                }
                Some('{') if read_quantifier(cursor)?.is_some() => {
                    return Err(cursor.error(ErrorKind::QuantifierWithoutAtom('{')));
                }
                Some(_) => {}
            }
            let (atom, next) = self.parse_atom(cursor)?;
            let (term, next) = self.parse_quantifier(atom, next)?;
            push_term(&mut items, term);
            cursor = next;
        }
        Ok((
            Node::new(NodeKind::Sequence(items), start.span_to(cursor)),
            cursor,
        ))
    }

    /// Wrap `atom` in a quantifier if one follows.
    ///
    /// Example:
    /// - Pattern: `a{2,4}?` → Quantifier { child: Literal("a"), range: 2..=4, lazy }
    fn parse_quantifier(&mut self, atom: Node, after_atom: Cursor<'a>) -> Parsed<'a, Node> {
        let cursor = after_atom.skip_trivia(self.options.free_spacing);
        let Some((range, next)) = read_quantifier(cursor)? else {
            return Ok((atom, after_atom));
        };
        let symbol = cursor.peek(0).unwrap_or('{');
        if !atom.is_quantifiable() {
            return Err(cursor.error(ErrorKind::QuantifierWithoutAtom(symbol)));
        }

        let following = next.skip_trivia(self.options.free_spacing);
        match following.peek(0) {
            Some(c @ ('*' | '+' | '?')) => {
                return Err(following.error(ErrorKind::NestedQuantifier(c)));
            }
            Some('{') if read_quantifier(following)?.is_some() => {
                return Err(following.error(ErrorKind::NestedQuantifier('{')));
            }
            _ => {}
        }

        let span = Span::new(atom.span.start, next.position());
        Ok((
            Node::new(
                NodeKind::Quantifier {
                    child: Box::new(atom),
                    range,
                },
                span,
            ),
            next,
        ))
    }

    /// Parse a single atom: group, character class, escape, anchor or literal.
    ///
    /// Examples:
    /// - Pattern: `(abc)` → Group { Capturing { index: 1 }, Sequence(..) }
    /// - Pattern: `[a-z]` → CharacterClass { items: [Range('a', 'z')] }
    /// - Pattern: `\d`    → Shorthand(Digit)
    /// - Pattern: `\k<n>` → Backreference(Name("n"))
    /// - Pattern: `^`     → Anchor(StartOfLine)
    fn parse_atom(&mut self, start: Cursor<'a>) -> Parsed<'a, Node> {
        let (c, next) = start.consume()?;
        let kind = match c {
            '(' => return self.parse_group(start),
            '[' => {
                let (class, end) = parse_character_class(start, self.depth)?;
                return Ok((
                    Node::new(NodeKind::CharacterClass(class), start.span_to(end)),
                    end,
                ));
            }
            '\\' => {
                let (escape, end) = read_escape(start, false)?;
                let kind = match escape {
                    Escape::Char(c) => NodeKind::Literal(c.to_string()),
                    Escape::Shorthand(shorthand) => NodeKind::Shorthand(shorthand),
                    Escape::Anchor(anchor) => NodeKind::Anchor(anchor),
                    Escape::Backreference(target) => NodeKind::Backreference(target),
                };
                return Ok((Node::new(kind, start.span_to(end)), end));
            }
            '.' => NodeKind::Shorthand(Shorthand::AnyChar),
            '^' => NodeKind::Anchor(AnchorKind::StartOfLine),
            '$' => NodeKind::Anchor(AnchorKind::EndOfLine),
            c => NodeKind::Literal(c.to_string()),
        };
        Ok((Node::new(kind, start.span_to(next)), next))
    }

    /// Parse a parenthesized construct starting at `open`.
    ///
    /// Comments and unscoped inline options produce leaf nodes; everything
    /// else owns a body parsed as a full alternation.
    fn parse_group(&mut self, open: Cursor<'a>) -> Parsed<'a, Node> {
        let (opener, body_start) = read_group_opener(open)?;
        let kind = match opener {
            GroupOpener::Comment(text) => {
                return Ok((
                    Node::new(NodeKind::Comment(text), open.span_to(body_start)),
                    body_start,
                ));
            }
            GroupOpener::Options {
                change,
                scoped: false,
            } => {
                log::trace!("Inline options at {}: {}", open.position(), change);
                self.options.apply(&change);
                return Ok((
                    Node::new(NodeKind::InlineOptions(change), open.span_to(body_start)),
                    body_start,
                ));
            }
            GroupOpener::Options {
                change,
                scoped: true,
            } => GroupKind::Options(change),
            GroupOpener::Capture if self.options.explicit_capture => GroupKind::NonCapturing,
            GroupOpener::Capture => GroupKind::Capturing {
                index: self.groups.allocate(None),
            },
            GroupOpener::Named(name) => GroupKind::NamedCapturing {
                index: self.groups.allocate(Some(name.clone())),
                name,
            },
            GroupOpener::NonCapturing => GroupKind::NonCapturing,
            GroupOpener::Atomic => GroupKind::Atomic,
            GroupOpener::Lookahead { negated } => GroupKind::Lookahead { negated },
            GroupOpener::Lookbehind { negated } => GroupKind::Lookbehind { negated },
        };
        if let Some(index) = kind.capture_index() {
            log::trace!("Capture group {} opened at {}", index, open.position());
        }

        if self.depth >= MAX_NESTING_DEPTH {
            return Err(open.error(ErrorKind::NestingTooDeep(MAX_NESTING_DEPTH)));
        }
        let saved = self.options;
        if let GroupKind::Options(change) = &kind {
            self.options.apply(change);
        }
        self.depth += 1;
        let parsed = self.parse_alternation(body_start);
        self.depth -= 1;
        self.options = saved;
        let (body, close) = parsed?;

        let end = close
            .eat(')')
            .ok_or_else(|| open.error(ErrorKind::UnbalancedGroup('(')))?;
        Ok((
            Node::new(
                NodeKind::Group {
                    kind,
                    body: Box::new(body),
                },
                open.span_to(end),
            ),
            end,
        ))
    }
}

/// Appends `term`, merging it into a directly adjacent literal.
fn push_term(items: &mut Vec<Node>, term: Node) {
    if let (
        NodeKind::Literal(text),
        Some(Node {
            kind: NodeKind::Literal(previous),
            span,
        }),
    ) = (&term.kind, items.last_mut())
    {
        if span.end == term.span.start {
            previous.push_str(text);
            span.end = term.span.end;
            return;
        }
    }
    items.push(term);
}

/// What an opening parenthesis introduces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum GroupOpener {
    Capture,
    Named(String),
    NonCapturing,
    Atomic,
    Lookahead { negated: bool },
    Lookbehind { negated: bool },
    Options { change: OptionChange, scoped: bool },
    /// `(?#...)`, already consumed through its closing parenthesis.
    Comment(String),
}

/// Reads the opening delimiter of a group at `open`.
///
/// `(?<=` and `(?<!` are checked before the named-capture path since all
/// three start with `(?<`.
pub(crate) fn read_group_opener(open: Cursor<'_>) -> Parsed<'_, GroupOpener> {
    let after_paren = open.expect('(')?;
    let Some(after_q) = after_paren.eat('?') else {
        return Ok((GroupOpener::Capture, after_paren));
    };
    let unknown = |end: Cursor<'_>| {
        open.error(ErrorKind::UnknownGroupConstruct(
            open.source().slice(open.span_to(end)),
        ))
    };

    match after_q.peek(0) {
        Some(':') => Ok((GroupOpener::NonCapturing, after_q.advance(1))),
        Some('>') => Ok((GroupOpener::Atomic, after_q.advance(1))),
        Some('=') => Ok((GroupOpener::Lookahead { negated: false }, after_q.advance(1))),
        Some('!') => Ok((GroupOpener::Lookahead { negated: true }, after_q.advance(1))),
        Some('<') => match after_q.peek(1) {
            Some('=') => Ok((GroupOpener::Lookbehind { negated: false }, after_q.advance(2))),
            Some('!') => Ok((GroupOpener::Lookbehind { negated: true }, after_q.advance(2))),
            _ => {
                let (name, end) = read_group_name(open, after_q.advance(1), '>')?;
                Ok((GroupOpener::Named(name), end))
            }
        },
        Some('\'') => {
            let (name, end) = read_group_name(open, after_q.advance(1), '\'')?;
            Ok((GroupOpener::Named(name), end))
        }
        Some('#') => {
            let (text, end) = after_q.advance(1).take_while(|c| c != ')');
            match end.eat(')') {
                Some(after) => Ok((GroupOpener::Comment(text), after)),
                None => Err(open.error(ErrorKind::UnbalancedGroup('('))),
            }
        }
        Some(c) if c == '-' || InlineOption::from_letter(c).is_some() => {
            let (change, end) = read_option_change(after_q);
            if change.enable.is_empty() && change.disable.is_empty() {
                return Err(unknown(end));
            }
            match end.peek(0) {
                Some(':') => Ok((GroupOpener::Options { change, scoped: true }, end.advance(1))),
                Some(')') => Ok((GroupOpener::Options { change, scoped: false }, end.advance(1))),
                Some(_) => Err(unknown(end.advance(1))),
                None => Err(open.error(ErrorKind::UnbalancedGroup('('))),
            }
        }
        Some(_) => Err(unknown(after_q.advance(1))),
        None => Err(after_q.error(ErrorKind::UnexpectedEndOfInput)),
    }
}

/// Reads option letters of the form `imnsx-imnsx`.
fn read_option_change(start: Cursor<'_>) -> (OptionChange, Cursor<'_>) {
    let mut change = OptionChange::default();
    let mut cursor = start;
    let mut disabling = false;
    while let Some(c) = cursor.peek(0) {
        if c == '-' && !disabling {
            disabling = true;
        } else if let Some(option) = InlineOption::from_letter(c) {
            if disabling {
                change.disable.push(option);
            } else {
                change.enable.push(option);
            }
        } else {
            break;
        }
        cursor = cursor.advance(1);
    }
    (change, cursor)
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Reads a declared group name up to `terminator`.
fn read_group_name<'a>(
    open: Cursor<'a>,
    start: Cursor<'a>,
    terminator: char,
) -> Parsed<'a, String> {
    let (name, end) = start.take_while(is_word_char);
    if end.peek(0) == Some('-') {
        // balancing groups, `(?<a-b>...)`
        return Err(open.error(ErrorKind::UnknownGroupConstruct(
            open.source().slice(open.span_to(end.advance(1))),
        )));
    }
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(start.error(ErrorKind::InvalidGroupName(name)));
    }
    let end = end.expect(terminator)?;
    Ok((name, end))
}

/// Reads `{n}`, `{n,}` or `{n,m}` starting at `open`.
///
/// Returns `None` when the braces do not form a quantifier, in which case the
/// `{` is an ordinary character.
fn read_braces(open: Cursor<'_>) -> Result<Option<(u32, Option<u32>, Cursor<'_>)>> {
    let Some(after_brace) = open.eat('{') else {
        return Ok(None);
    };
    let Some((min, cursor)) = read_number(after_brace)? else {
        return Ok(None);
    };
    let (max, cursor) = match cursor.eat(',') {
        Some(after_comma) => match read_number(after_comma)? {
            Some((max, next)) => (Some(max), next),
            None => (None, after_comma),
        },
        None => (Some(min), cursor),
    };
    let Some(end) = cursor.eat('}') else {
        return Ok(None);
    };
    if let Some(max) = max.filter(|&max| max < min) {
        return Err(open.error(ErrorKind::InvalidQuantifierRange { min, max }));
    }
    Ok(Some((min, max, end)))
}

fn read_number(start: Cursor<'_>) -> Result<Option<(u32, Cursor<'_>)>> {
    let (digits, end) = start.take_while(|c| c.is_ascii_digit());
    if digits.is_empty() {
        return Ok(None);
    }
    let value = digits
        .parse::<u32>()
        .map_err(|_| start.error(ErrorKind::NumberTooLarge(digits.clone())))?;
    Ok(Some((value, end)))
}

/// Reads a quantifier and its optional lazy suffix.
fn read_quantifier(start: Cursor<'_>) -> Result<Option<(RepeatRange, Cursor<'_>)>> {
    let (min, max, cursor) = match start.peek(0) {
        Some('*') => (0, None, start.advance(1)),
        Some('+') => (1, None, start.advance(1)),
        Some('?') => (0, Some(1), start.advance(1)),
        Some('{') => match read_braces(start)? {
            Some(bounds) => bounds,
            None => return Ok(None),
        },
        _ => return Ok(None),
    };
    let (lazy, cursor) = match cursor.eat('?') {
        Some(after) => (true, after),
        None => (false, cursor),
    };
    Ok(Some((RepeatRange { min, max, lazy }, cursor)))
}

/// Parse a character class at `open`, e.g. `[abc]`, `[^a-z\d]`, `[a-z-[aeiou]]`.
///
/// A `]` directly after `[` or `[^` is a member, not the closing bracket.
/// `-[` after at least one member starts a subtracted class, which must be
/// the last thing before the closing `]`. `depth` is the nesting the class
/// already sits in; each subtraction adds one level.
///
/// Example:
/// - Pattern: `[a-z-[aeiou]]` → CharacterClass { items: [Range('a', 'z')], subtract: [a, e, i, o, u] }
pub(crate) fn parse_character_class(open: Cursor<'_>, depth: usize) -> Parsed<'_, CharacterClass> {
    let mut cursor = open.expect('[')?;
    let negated = match cursor.eat('^') {
        Some(after) => {
            cursor = after;
            true
        }
        None => false,
    };
    let mut items = Vec::new();
    let mut first = true;
    loop {
        match cursor.peek(0) {
            None => return Err(open.error(ErrorKind::UnterminatedCharacterClass)),
            Some(']') if !first => {
                let class = CharacterClass {
                    negated,
                    items,
                    subtract: None,
                };
                return Ok((class, cursor.advance(1)));
            }
            Some('-') if !items.is_empty() && cursor.peek(1) == Some('[') => {
                let inner = cursor.advance(1);
                if depth >= MAX_NESTING_DEPTH {
                    return Err(inner.error(ErrorKind::NestingTooDeep(MAX_NESTING_DEPTH)));
                }
                let (subtract, after) = parse_character_class(inner, depth + 1)?;
                let end = match after.peek(0) {
                    Some(']') => after.advance(1),
                    Some(_) => return Err(after.error(ErrorKind::SubtractionNotLast)),
                    None => return Err(open.error(ErrorKind::UnterminatedCharacterClass)),
                };
                let class = CharacterClass {
                    negated,
                    items,
                    subtract: Some(Box::new(subtract)),
                };
                return Ok((class, end));
            }
            Some(_) => {}
        }
        first = false;

        let (item, next) = read_class_atom(open, cursor)?;
        cursor = next;
        let ClassItem::Char(low) = item else {
            items.push(item);
            continue;
        };
        let is_range =
            cursor.peek(0) == Some('-') && cursor.peek(1).is_some_and(|c| c != ']' && c != '[');
        if !is_range {
            items.push(item);
            continue;
        }
        let (high, after) = read_class_atom(open, cursor.advance(1))?;
        match high {
            ClassItem::Char(high) if high < low => {
                return Err(cursor.error(ErrorKind::ReversedCharacterRange {
                    start: low,
                    end: high,
                }));
            }
            ClassItem::Char(high) => items.push(ClassItem::Range(low, high)),
            shorthand => {
                // `a-\d`: the dash is a member of its own
                items.push(ClassItem::Char(low));
                items.push(ClassItem::Char('-'));
                items.push(shorthand);
            }
        }
        cursor = after;
    }
}

fn read_class_atom<'a>(open: Cursor<'a>, start: Cursor<'a>) -> Parsed<'a, ClassItem> {
    match start.peek(0) {
        None => Err(open.error(ErrorKind::UnterminatedCharacterClass)),
        Some('\\') if start.peek(1).is_none() => {
            Err(open.error(ErrorKind::UnterminatedCharacterClass))
        }
        Some('\\') => {
            let (escape, end) = read_escape(start, true)?;
            match escape {
                Escape::Char(c) => Ok((ClassItem::Char(c), end)),
                Escape::Shorthand(shorthand) => Ok((ClassItem::Shorthand(shorthand), end)),
                Escape::Anchor(_) | Escape::Backreference(_) => Err(start.error(
                    ErrorKind::InvalidEscape(start.source().slice(start.span_to(end))),
                )),
            }
        }
        Some(c) => Ok((ClassItem::Char(c), start.advance(1))),
    }
}

/// What a backslash sequence stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Escape {
    Char(char),
    Shorthand(Shorthand),
    Anchor(AnchorKind),
    Backreference(BackreferenceTarget),
}

/// Reads the escape sequence whose backslash is at `backslash`.
pub(crate) fn read_escape(backslash: Cursor<'_>, in_class: bool) -> Parsed<'_, Escape> {
    let after = backslash.expect('\\')?;
    let (c, next) = after.consume()?;
    let invalid = |end: Cursor<'_>| {
        backslash.error(ErrorKind::InvalidEscape(
            backslash.source().slice(backslash.span_to(end)),
        ))
    };

    let escape = match c {
        'd' => Escape::Shorthand(Shorthand::Digit),
        'D' => Escape::Shorthand(Shorthand::NotDigit),
        'w' => Escape::Shorthand(Shorthand::Word),
        'W' => Escape::Shorthand(Shorthand::NotWord),
        's' => Escape::Shorthand(Shorthand::Whitespace),
        'S' => Escape::Shorthand(Shorthand::NotWhitespace),
        'p' | 'P' => {
            let open = next.eat('{').ok_or_else(|| invalid(next))?;
            let (name, end) =
                open.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            if name.is_empty() {
                return Err(invalid(end));
            }
            let end = end.eat('}').ok_or_else(|| invalid(end))?;
            let shorthand = if c == 'p' {
                Shorthand::Category(name)
            } else {
                Shorthand::NotCategory(name)
            };
            return Ok((Escape::Shorthand(shorthand), end));
        }
        'b' if in_class => Escape::Char('\u{8}'),
        'b' | 'B' | 'A' | 'Z' | 'z' | 'G' if in_class => return Err(invalid(next)),
        'b' => Escape::Anchor(AnchorKind::WordBoundary),
        'B' => Escape::Anchor(AnchorKind::NonWordBoundary),
        'A' => Escape::Anchor(AnchorKind::StartOfInput),
        'Z' => Escape::Anchor(AnchorKind::EndOfInputBeforeNewline),
        'z' => Escape::Anchor(AnchorKind::EndOfInput),
        'G' => Escape::Anchor(AnchorKind::ContiguousMatch),
        'k' if !in_class => return read_named_backreference(backslash, next),
        '0'..='7' if in_class || c == '0' => {
            let (value, end) = read_octal(after);
            let c = char::from_u32(value).ok_or_else(|| invalid(end))?;
            return Ok((Escape::Char(c), end));
        }
        '1'..='9' if !in_class => {
            let (digits, end) = after.take_while(|c| c.is_ascii_digit());
            let index = digits
                .parse::<u32>()
                .map_err(|_| after.error(ErrorKind::NumberTooLarge(digits.clone())))?;
            return Ok((Escape::Backreference(BackreferenceTarget::Index(index)), end));
        }
        't' => Escape::Char('\t'),
        'n' => Escape::Char('\n'),
        'r' => Escape::Char('\r'),
        'f' => Escape::Char('\u{c}'),
        'v' => Escape::Char('\u{b}'),
        'e' => Escape::Char('\u{1b}'),
        'a' => Escape::Char('\u{7}'),
        'x' | 'u' => {
            let count = if c == 'x' { 2 } else { 4 };
            let (c, end) = read_hex(next, count).ok_or_else(|| invalid(next.advance(count)))?;
            return Ok((Escape::Char(c), end));
        }
        'c' => {
            let (letter, end) = next.consume().map_err(|_| invalid(next))?;
            if !letter.is_ascii_alphabetic() {
                return Err(invalid(end));
            }
            let control = (letter.to_ascii_uppercase() as u8) - b'@';
            return Ok((Escape::Char(char::from(control)), end));
        }
        c if c.is_alphanumeric() => return Err(invalid(next)),
        c => Escape::Char(c),
    };
    Ok((escape, next))
}

/// Up to three octal digits starting at `start`.
fn read_octal(start: Cursor<'_>) -> (u32, Cursor<'_>) {
    let mut value = 0;
    let mut cursor = start;
    for _ in 0..3 {
        match cursor.peek(0).and_then(|c| c.to_digit(8)) {
            Some(digit) => {
                value = value * 8 + digit;
                cursor = cursor.advance(1);
            }
            None => break,
        }
    }
    (value, cursor)
}

/// Exactly `count` hex digits starting at `start`.
fn read_hex(start: Cursor<'_>, count: usize) -> Option<(char, Cursor<'_>)> {
    let digits: String = (0..count).map_while(|i| start.peek(i)).collect();
    if digits.chars().count() != count || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(&digits, 16).ok()?;
    Some((char::from_u32(value)?, start.advance(count)))
}

/// Reads `\k<name>` or `\k'name'`; `next` is just past the `k`.
fn read_named_backreference<'a>(backslash: Cursor<'a>, next: Cursor<'a>) -> Parsed<'a, Escape> {
    let invalid = |end: Cursor<'a>| {
        backslash.error(ErrorKind::InvalidBackreference(
            backslash.source().slice(backslash.span_to(end)),
        ))
    };
    let close = match next.peek(0) {
        Some('<') => '>',
        Some('\'') => '\'',
        _ => return Err(invalid(next)),
    };
    let (name, end) = next.advance(1).take_while(is_word_char);
    let Some(end) = end.eat(close).filter(|_| !name.is_empty()) else {
        return Err(invalid(end));
    };

    let target = if name.chars().all(|c| c.is_ascii_digit()) {
        let index = name
            .parse::<u32>()
            .map_err(|_| next.error(ErrorKind::NumberTooLarge(name.clone())))?;
        BackreferenceTarget::Index(index)
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid(end));
    } else {
        BackreferenceTarget::Name(name)
    };
    Ok((Escape::Backreference(target), end))
}
