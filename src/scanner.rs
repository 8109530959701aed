use crate::cursor::PatternSource;
use crate::options::RegexOptions;
use crate::parser::{parse_character_class, read_escape, read_group_opener, GroupOpener};

/// Names declared by `(?<name>...)` and `(?'name'...)` groups, in order of
/// first declaration. A repeated name is listed once.
///
/// Lookbehinds (`(?<=`, `(?<!`) are never mistaken for names.
pub fn named_groups(pattern: &str) -> Vec<String> {
    named_groups_with_options(pattern, RegexOptions::default())
}

/// Like [`named_groups`], honoring free-spacing so that names inside `#`
/// comments are skipped the same way the parser skips them.
///
/// This walks the pattern with the parser's own tokenizing primitives but
/// builds no tree. It stops at the first malformed construct and returns the
/// names found before it.
pub fn named_groups_with_options(pattern: &str, options: RegexOptions) -> Vec<String> {
    let source = PatternSource::new(pattern);
    let mut names = Vec::new();
    let mut options = options;
    // options to restore at each open group's ')'
    let mut enclosing: Vec<RegexOptions> = Vec::new();
    let mut cursor = source.cursor();

    loop {
        cursor = cursor.skip_trivia(options.free_spacing);
        let Some(c) = cursor.peek(0) else {
            break;
        };
        let step = match c {
            '\\' => read_escape(cursor, false).map(|(_, next)| next),
            '[' => parse_character_class(cursor, 0).map(|(_, next)| next),
            '(' => read_group_opener(cursor).map(|(opener, next)| {
                match opener {
                    GroupOpener::Named(name) => {
                        if !names.contains(&name) {
                            names.push(name);
                        }
                        enclosing.push(options);
                    }
                    GroupOpener::Options {
                        change,
                        scoped: false,
                    } => options.apply(&change),
                    GroupOpener::Options {
                        change,
                        scoped: true,
                    } => {
                        enclosing.push(options);
                        options.apply(&change);
                    }
                    GroupOpener::Comment(_) => {}
                    GroupOpener::Capture
                    | GroupOpener::NonCapturing
                    | GroupOpener::Atomic
                    | GroupOpener::Lookahead { .. }
                    | GroupOpener::Lookbehind { .. } => enclosing.push(options),
                }
                next
            }),
            ')' => {
                if let Some(outer) = enclosing.pop() {
                    options = outer;
                }
                Ok(cursor.advance(1))
            }
            _ => Ok(cursor.advance(1)),
        };
        match step {
            Ok(next) => cursor = next,
            Err(err) => {
                log::debug!("Named group scan stopped: {}", err);
                break;
            }
        }
    }
    names
}
