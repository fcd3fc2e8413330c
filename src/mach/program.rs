use crate::lang::{Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap};
use std::sync::Arc;

/// The program being edited: statement text keyed by line number.
///
/// Cloning is cheap; the source is shared until one of the clones is
/// modified. A run keeps its own clone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    source: Arc<BTreeMap<LineNumber, Line>>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Inserts the line or overwrites the text already at `number`.
    pub fn set(&mut self, number: LineNumber, text: &str) {
        self.insert(Line::new(number, text));
    }

    pub fn insert(&mut self, line: Line) -> Option<Line> {
        Arc::make_mut(&mut self.source).insert(line.number(), line)
    }

    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn get(&self, number: LineNumber) -> Option<&str> {
        self.source.get(&number).map(Line::text)
    }

    pub fn sorted_line_numbers(&self) -> Vec<LineNumber> {
        self.source.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Lines in ascending line number order.
    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    /// Single line formatted for listing.
    pub fn line(&self, number: LineNumber) -> Option<String> {
        self.source.get(&number).map(Line::to_string)
    }
}
