mod cursor;
mod error;
mod groups;
mod node;
mod options;
mod parser;
mod pattern;
mod renderer;
mod scanner;

pub use cursor::{Cursor, PatternSource};
pub use error::{AnalysisError, ErrorKind, Result};
pub use groups::GroupTable;
pub use node::{
    AnchorKind, BackreferenceTarget, CharacterClass, ClassItem, GroupKind, Node, NodeKind,
    RepeatRange, Shorthand, Span,
};
pub use options::{InlineOption, OptionChange, RegexOptions};
pub use parser::{parse_pattern, Parser, MAX_NESTING_DEPTH};
pub use pattern::{Analysis, Pattern};
pub use renderer::{render, Renderer};
pub use scanner::{named_groups, named_groups_with_options};

/// Parses `text`, describes it and collects its group names.
pub fn analyze(text: &str, options: RegexOptions) -> Result<Analysis> {
    log::debug!("Pattern string: {:?}", text);
    let pattern = Pattern::parse(text, options)?;
    log::debug!("Parsed pattern: {:?}", pattern.root());

    let named_groups = named_groups_with_options(text, options);
    let declared = pattern.groups().names();
    if named_groups != declared {
        log::warn!(
            "Named group scan {:?} disagrees with parsed groups {:?}",
            named_groups,
            declared
        );
    }

    let description = pattern.describe();
    log::debug!("Description:\n{}", description);
    Ok(Analysis {
        pattern,
        description,
        named_groups,
    })
}

/// The description of `text`, or a sentence explaining why there is none.
pub fn describe(text: &str, options: RegexOptions) -> String {
    match analyze(text, options) {
        Ok(analysis) => analysis.description,
        Err(err) => format!(
            "An error occurred while analyzing the pattern: \"{}\".",
            err.message()
        ),
    }
}
