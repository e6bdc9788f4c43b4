//! Row iteration with zero-based position counters

use crate::context::Record;

/// Position of a row within its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    /// Zero-based position
    pub index: usize,
    /// Number of rows in the collection
    pub count: usize,
}

impl RowCursor {
    pub fn is_even(&self) -> bool {
        self.index % 2 == 0
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }

    /// One-based position
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Pick between two values by even/odd position
    pub fn alternate<'s>(&self, even: &'s str, odd: &'s str) -> &'s str {
        if self.is_even() { even } else { odd }
    }

    /// Table row class: `row1` on even positions, `row2` on odd
    pub fn row_class(&self) -> &'static str {
        self.alternate("row1", "row2")
    }

    /// Panel background class: `bg1` on even positions, `bg2` on odd
    pub fn bg_class(&self) -> &'static str {
        self.alternate("bg1", "bg2")
    }
}

/// Iterator over `(cursor, record)` pairs of one block
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    rows: &'a [Record],
    next: usize,
}

impl<'a> Rows<'a> {
    pub fn new(rows: &'a [Record]) -> Self {
        Self { rows, next: 0 }
    }

    /// Rows of a block nested inside `record`, with their own counter
    pub fn nested(record: &'a Record, block: &str) -> Self {
        Self::new(record.rows(block))
    }

    pub fn is_empty(&self) -> bool {
        self.next >= self.rows.len()
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = (RowCursor, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.get(self.next)?;
        let cursor = RowCursor {
            index: self.next,
            count: self.rows.len(),
        };
        self.next += 1;
        Some((cursor, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rows.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rows<'_> {}
