/*!
# IO

Utilities for turning generated structures into judge input text.

The convention is **length-prefixed**: the number of items on one line, then
one item (or one row) per following line. [`SeqFormatter`] makes the
separators and the length prefix configurable through the same builder pattern
the generators use, and consumes plain slices, so generation stays fully
decoupled from formatting.

```
use graphgen::{edge::Edge, io::SeqFormatter};

let fmt = SeqFormatter::new();
assert_eq!(fmt.format(&[4, 8, 15]), "3\n4\n8\n15\n");

let edges = [Edge(1, 2), Edge(3, 1)];
assert_eq!(fmt.format_edges(&edges), "2\n1 2\n3 1\n");
```
*/

use std::fmt::Display;

use itertools::Itertools;

use crate::edge::Edge;

/// Configurable length-prefixed text formatting for sequences.
///
/// Defaults: newline-separated items, a length prefix on its own line, and a
/// trailing newline.
#[derive(Debug, Clone)]
pub struct SeqFormatter {
    separator: String,
    with_len: bool,
    len_separator: String,
    terminator: String,
}

impl Default for SeqFormatter {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            with_len: true,
            len_separator: "\n".to_string(),
            terminator: "\n".to_string(),
        }
    }
}

impl SeqFormatter {
    /// Creates a new (default) formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between items.
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enables or disables the length prefix.
    pub fn with_len(mut self, with_len: bool) -> Self {
        self.with_len = with_len;
        self
    }

    /// Updates the separator between the length prefix and the items.
    pub fn len_separator<S: Into<String>>(mut self, len_separator: S) -> Self {
        self.len_separator = len_separator.into();
        self
    }

    /// Updates the terminator appended after the items.
    pub fn terminator<S: Into<String>>(mut self, terminator: S) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Formats a sequence: optional length prefix, separator-joined items,
    /// terminator.
    pub fn format<T: Display>(&self, seq: &[T]) -> String {
        let mut out = String::new();
        if self.with_len {
            out.push_str(&seq.len().to_string());
            out.push_str(&self.len_separator);
        }
        out.push_str(&seq.iter().join(&self.separator));
        out.push_str(&self.terminator);
        out
    }

    /// Formats a nested sequence: the length prefix counts rows, each row is
    /// space-joined in place of a single item.
    pub fn format_rows<T: Display>(&self, rows: &[Vec<T>]) -> String {
        let flat = rows.iter().map(|row| row.iter().join(" ")).collect_vec();
        self.format(&flat)
    }

    /// Formats an edge list as rows of two endpoints in stored orientation.
    pub fn format_edges<V: Display>(&self, edges: &[Edge<V>]) -> String {
        let flat = edges
            .iter()
            .map(|Edge(u, v)| format!("{u} {v}"))
            .collect_vec();
        self.format(&flat)
    }
}
