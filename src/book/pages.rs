//! Restartable pagination cursor over an address book.

use crate::models::Record;

/// External iterator yielding pages of up to `page_size` records.
///
/// A `Pages` cursor is a snapshot of the book's record order at creation
/// time. It yields `Vec<&Record>` pages in key order and signals
/// exhaustion by returning `None` after the last page. [`rewind`](Self::rewind)
/// restarts it from page 0; asking the book for a fresh cursor does the
/// same.
pub struct Pages<'a> {
    records: Vec<&'a Record>,
    page_size: usize,
    cursor: usize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: Vec<&'a Record>, page_size: usize) -> Self {
        Self {
            records,
            page_size,
            cursor: 0,
        }
    }

    /// Reset the cursor to the first page.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Total number of pages this cursor will yield from the start.
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor * self.page_size;
        if start >= self.records.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.records.len());
        self.cursor += 1;
        Some(self.records[start..end].to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.page_count().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}
