use std::fmt::Write;

use crate::cursor::PatternSource;
use crate::groups::GroupTable;
use crate::node::{
    AnchorKind, BackreferenceTarget, CharacterClass, ClassItem, GroupKind, Node, NodeKind,
    RepeatRange, Shorthand,
};

const INDENT: &str = "  ";
const EXCERPT_MAX_CHARS: usize = 40;

/// Renders `node` as an indented description, one line per construct.
pub fn render(node: &Node, source: &PatternSource, groups: &GroupTable, indent: usize) -> String {
    Renderer::new(source, groups).render(node, indent)
}

/// Turns a parsed tree into text.
///
/// Sequences have no line of their own: their terms appear directly under the
/// enclosing group or branch. A quantifier is shown as a suffix on the line of
/// the node it repeats.
pub struct Renderer<'a> {
    source: &'a PatternSource,
    groups: &'a GroupTable,
}

impl<'a> Renderer<'a> {
    pub fn new(source: &'a PatternSource, groups: &'a GroupTable) -> Self {
        Self { source, groups }
    }

    pub fn render(&self, node: &Node, indent: usize) -> String {
        let mut out = String::new();
        self.write_node(node, indent, &mut out);
        out
    }

    fn write_node(&self, node: &Node, indent: usize, out: &mut String) {
        match &node.kind {
            NodeKind::Sequence(items) if items.is_empty() => {
                self.write_line(out, indent, &self.describe(node), node);
            }
            NodeKind::Sequence(items) => {
                for item in items {
                    self.write_node(item, indent, out);
                }
            }
            NodeKind::Alternation(branches) => {
                self.write_line(out, indent, &self.describe(node), node);
                for (i, branch) in branches.iter().enumerate() {
                    if matches!(&branch.kind, NodeKind::Sequence(items) if items.is_empty()) {
                        let label = format!("Branch {} (empty)", i + 1);
                        self.write_line(out, indent + 1, &label, branch);
                        continue;
                    }
                    self.write_line(out, indent + 1, &format!("Branch {}", i + 1), branch);
                    self.write_node(branch, indent + 2, out);
                }
            }
            NodeKind::Quantifier { child, .. } => {
                self.write_line(out, indent, &self.describe(node), node);
                self.write_children(child, indent + 1, out);
            }
            _ => {
                self.write_line(out, indent, &self.describe(node), node);
                self.write_children(node, indent + 1, out);
            }
        }
    }

    /// Writes whatever hangs below the line already written for `node`.
    fn write_children(&self, node: &Node, indent: usize, out: &mut String) {
        if let NodeKind::Group { body, .. } = &node.kind {
            self.write_node(body, indent, out);
        }
    }

    fn write_line(&self, out: &mut String, indent: usize, text: &str, node: &Node) {
        let _ = writeln!(
            out,
            "{}{} `{}`",
            INDENT.repeat(indent),
            text,
            excerpt(&node.text(self.source))
        );
    }

    /// The one-line description of a node, without its children.
    ///
    /// Example:
    /// - Pattern: `\d{2}` → "Any digit, repeated exactly 2 times"
    pub fn describe(&self, node: &Node) -> String {
        match &node.kind {
            NodeKind::Literal(text) => format!("Literal {:?}", text),
            NodeKind::Shorthand(shorthand) => describe_shorthand(shorthand),
            NodeKind::CharacterClass(class) => describe_class(class),
            NodeKind::Anchor(anchor) => describe_anchor(*anchor).to_string(),
            NodeKind::Group { kind, .. } => describe_group(kind),
            NodeKind::Backreference(target) => self.describe_backreference(target),
            NodeKind::Comment(text) => format!("Comment {:?}", text.trim()),
            NodeKind::InlineOptions(change) => format!("Set options: {}", change),
            NodeKind::Quantifier { child, range } => {
                format!("{}, {}", self.describe(child), describe_range(range))
            }
            NodeKind::Alternation(branches) => {
                format!("Alternation with {} branches", branches.len())
            }
            NodeKind::Sequence(items) if items.is_empty() => "Empty".to_string(),
            NodeKind::Sequence(items) if items.len() == 1 => "Sequence of 1 term".to_string(),
            NodeKind::Sequence(items) => format!("Sequence of {} terms", items.len()),
        }
    }

    fn describe_backreference(&self, target: &BackreferenceTarget) -> String {
        match target {
            BackreferenceTarget::Index(index) => match self.groups.name(*index) {
                Some(name) => format!("Backreference to group {} <{}>", index, name),
                None => format!("Backreference to group {}", index),
            },
            BackreferenceTarget::Name(name) => match self.groups.index_of(name) {
                Some(index) => format!("Backreference to group {} <{}>", index, name),
                None => format!("Backreference to group <{}>", name),
            },
        }
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(EXCERPT_MAX_CHARS - 3).collect();
    short.push_str("...");
    short
}

fn describe_range(range: &RepeatRange) -> String {
    let times = match (range.min, range.max) {
        (0, None) => "repeated zero or more times".to_string(),
        (1, None) => "repeated one or more times".to_string(),
        (0, Some(1)) => "optional".to_string(),
        (min, None) => format!("repeated at least {} times", min),
        (1, Some(1)) => "repeated exactly once".to_string(),
        (min, Some(max)) if min == max => format!("repeated exactly {} times", min),
        (min, Some(max)) => format!("repeated {} to {} times", min, max),
    };
    if range.lazy {
        format!("{}, lazy", times)
    } else {
        times
    }
}

fn describe_shorthand(shorthand: &Shorthand) -> String {
    match shorthand {
        Shorthand::AnyChar => "Any character".to_string(),
        Shorthand::Digit => "Any digit".to_string(),
        Shorthand::NotDigit => "Any non-digit".to_string(),
        Shorthand::Word => "Any word character".to_string(),
        Shorthand::NotWord => "Any non-word character".to_string(),
        Shorthand::Whitespace => "Any whitespace character".to_string(),
        Shorthand::NotWhitespace => "Any non-whitespace character".to_string(),
        Shorthand::Category(name) => format!("Any character in category {}", name),
        Shorthand::NotCategory(name) => format!("Any character not in category {}", name),
    }
}

fn describe_class(class: &CharacterClass) -> String {
    let members = class_members(class);
    let text = if class.negated {
        format!("Any character not in: {}", members)
    } else {
        format!("Any character in: {}", members)
    };
    match &class.subtract {
        Some(subtract) => format!("{} except: {}", text, describe_subtraction(subtract)),
        None => text,
    }
}

fn describe_subtraction(class: &CharacterClass) -> String {
    let members = class_members(class);
    let text = if class.negated {
        format!("any character not in: {}", members)
    } else {
        members
    };
    match &class.subtract {
        Some(subtract) => format!("{} except: {}", text, describe_subtraction(subtract)),
        None => text,
    }
}

fn class_members(class: &CharacterClass) -> String {
    class
        .items
        .iter()
        .map(|item| match item {
            ClassItem::Char(c) => format!("{:?}", c),
            ClassItem::Range(low, high) => format!("{:?} to {:?}", low, high),
            ClassItem::Shorthand(shorthand) => describe_shorthand(shorthand).to_lowercase(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_anchor(anchor: AnchorKind) -> &'static str {
    match anchor {
        AnchorKind::StartOfLine => "Beginning of line or string",
        AnchorKind::EndOfLine => "End of line or string",
        AnchorKind::WordBoundary => "Word boundary",
        AnchorKind::NonWordBoundary => "Not a word boundary",
        AnchorKind::StartOfInput => "Beginning of string",
        AnchorKind::EndOfInputBeforeNewline => "End of string or before final newline",
        AnchorKind::EndOfInput => "End of string",
        AnchorKind::ContiguousMatch => "Contiguous with the previous match",
    }
}

fn describe_group(kind: &GroupKind) -> String {
    match kind {
        GroupKind::Capturing { index } => format!("Capture group {}", index),
        GroupKind::NamedCapturing { index, name } => {
            format!("Capture group {} <{}>", index, name)
        }
        GroupKind::NonCapturing => "Non-capturing group".to_string(),
        GroupKind::Atomic => "Atomic group".to_string(),
        GroupKind::Lookahead { negated: false } => "Positive lookahead".to_string(),
        GroupKind::Lookahead { negated: true } => "Negative lookahead".to_string(),
        GroupKind::Lookbehind { negated: false } => "Positive lookbehind".to_string(),
        GroupKind::Lookbehind { negated: true } => "Negative lookbehind".to_string(),
        GroupKind::Options(change) => format!("Group with options: {}", change),
    }
}
