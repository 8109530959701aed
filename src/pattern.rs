use std::str::FromStr;

use crate::cursor::PatternSource;
use crate::error::{AnalysisError, Result};
use crate::groups::GroupTable;
use crate::node::Node;
use crate::options::RegexOptions;
use crate::parser::Parser;
use crate::renderer::Renderer;

/// A successfully parsed pattern: its source, tree and capture groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    source: PatternSource,
    options: RegexOptions,
    root: Node,
    groups: GroupTable,
}

impl Pattern {
    pub fn parse(text: &str, options: RegexOptions) -> Result<Self> {
        let source = PatternSource::new(text);
        let (root, groups) = Parser::new(&source, options).parse()?;
        Ok(Self {
            source,
            options,
            root,
            groups,
        })
    }

    pub fn source(&self) -> &PatternSource {
        &self.source
    }

    pub fn as_str(&self) -> &str {
        self.source.as_str()
    }

    pub fn options(&self) -> RegexOptions {
        self.options
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// The indented description of the whole pattern.
    pub fn describe(&self) -> String {
        Renderer::new(&self.source, &self.groups).render(&self.root, 0)
    }
}

impl FromStr for Pattern {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, RegexOptions::default())
    }
}

/// The outcome of analyzing one pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub pattern: Pattern,
    pub description: String,
    /// Names found by the named-group scan.
    pub named_groups: Vec<String>,
}
