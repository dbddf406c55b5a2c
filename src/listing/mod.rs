//! Static item sequences revealed a page at a time.

mod cursor;

pub use cursor::VisibleCursor;

use crate::error::ConfigurationError;

/// A fixed, ordered item sequence with a growing visible prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    cursor: VisibleCursor,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Result<Self, ConfigurationError> {
        let cursor = VisibleCursor::new(page_size, items.len())?;
        Ok(Self { items, cursor })
    }

    /// First `visible_count` items, in original order.
    pub fn visible_items(&self) -> &[T] {
        &self.items[..self.cursor.visible()]
    }

    /// Reveals the next page. Returns `false` once everything is visible.
    pub fn load_more(&mut self) -> bool {
        let changed = self.cursor.load_more();
        if changed {
            tracing::debug!(
                visible = self.cursor.visible(),
                total = self.cursor.total(),
                "Loaded more items"
            );
        }
        changed
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    pub fn cursor(&self) -> VisibleCursor {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
