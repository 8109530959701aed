use std::collections::BTreeMap;

/// Capture indices and their optional names, numbered in the order the
/// opening parentheses appear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupTable {
    entries: BTreeMap<u32, Option<String>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the next capture index. A name that is already declared keeps
    /// the index it was first given.
    pub(crate) fn allocate(&mut self, name: Option<String>) -> u32 {
        if let Some(index) = name.as_deref().and_then(|name| self.index_of(name)) {
            return index;
        }
        let index = self.entries.len() as u32 + 1;
        self.entries.insert(index, name);
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn name(&self, index: u32) -> Option<&str> {
        self.entries.get(&index).and_then(|name| name.as_deref())
    }

    /// The index declared with `name`.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, n)| n.as_deref() == Some(name))
            .map(|(&index, _)| index)
    }

    /// Declared names in index order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.values().filter_map(|n| n.as_deref()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Option<&str>)> {
        self.entries.iter().map(|(&index, name)| (index, name.as_deref()))
    }

    pub fn as_map(&self) -> &BTreeMap<u32, Option<String>> {
        &self.entries
    }
}
