use crate::error::ConfigurationError;

/// How many items of a static list are currently shown.
///
/// Starts at one page (or the whole list if it is shorter), only grows,
/// and never exceeds the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCursor {
    visible: usize,
    page_size: usize,
    total: usize,
}

impl VisibleCursor {
    pub fn new(page_size: usize, total: usize) -> Result<Self, ConfigurationError> {
        if page_size == 0 {
            return Err(ConfigurationError::ZeroPageSize);
        }
        Ok(Self {
            visible: page_size.min(total),
            page_size,
            total,
        })
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    pub fn load_more(&mut self) -> bool {
        let next = self.visible.saturating_add(self.page_size).min(self.total);
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}
