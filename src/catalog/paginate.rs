use std::ops::Range;

use thiserror::Error;

use crate::constants::{MIN_VIEWPORT_HEIGHT, ROW_HEIGHT, SMALL_VIEWPORT_CAPACITY, VIEWPORT_MARGIN};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapacityError {
    #[error("page capacity must be at least 1")]
    Zero,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("page must be a positive integer, got {0:?}")]
    NotAPositiveInteger(String),
}

/// Outcome of a page request. `clamped` is set when the requested page was
/// outside `1..=total_pages` and had to be pulled back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelection {
    pub page: usize,
    pub clamped: bool,
}

pub fn total_pages(len: usize, capacity: usize) -> usize {
    len.div_ceil(capacity.max(1)).max(1)
}

/// Fixed-size windows over a sequence of `len` items. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    len: usize,
    capacity: usize,
}

impl Paginator {
    pub fn new(len: usize, capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        Ok(Self { len, capacity })
    }

    /// For callers that already hold a validated capacity.
    pub(crate) fn with_capacity(len: usize, capacity: usize) -> Self {
        Self {
            len,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.len, self.capacity)
    }

    pub fn goto(&self, page: i64) -> PageSelection {
        let total = self.total_pages();
        if page < 1 {
            return PageSelection {
                page: 1,
                clamped: true,
            };
        }
        match usize::try_from(page) {
            Ok(p) if p <= total => PageSelection {
                page: p,
                clamped: false,
            },
            _ => PageSelection {
                page: total,
                clamped: true,
            },
        }
    }

    /// Item offsets shown on `page`, after clamping it into range.
    pub fn range(&self, page: usize) -> Range<usize> {
        let page = page.clamp(1, self.total_pages());
        let start = ((page - 1) * self.capacity).min(self.len);
        let end = (page * self.capacity).min(self.len);
        start..end
    }
}

/// Parses a typed page number. Only digit strings are accepted; values too
/// large to represent are treated as "past the end" and clamp later.
pub fn parse_page_input(text: &str) -> Result<i64, NavigationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NavigationError::NotAPositiveInteger(text.to_string()));
    }
    Ok(trimmed.parse::<i64>().unwrap_or(i64::MAX))
}

/// Rows that fit in a list viewport of the given pixel height.
pub fn capacity_for_viewport(
    viewport_height: u32,
    header_height: u32,
    max_capacity: usize,
) -> usize {
    if viewport_height < MIN_VIEWPORT_HEIGHT {
        return SMALL_VIEWPORT_CAPACITY;
    }
    let usable = viewport_height
        .saturating_sub(header_height)
        .saturating_sub(VIEWPORT_MARGIN);
    let rows = (usable / ROW_HEIGHT) as usize;
    rows.min(max_capacity).max(1)
}
