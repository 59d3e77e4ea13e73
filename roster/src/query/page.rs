//! Page requests and page envelopes
//!
//! Pages are zero-indexed. The envelope always carries the size of the whole
//! filtered set, so a caller can page through without a second count query.
//!
//! # Example
//!
//! ```rust
//! use roster::query::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 10).unwrap();
//! assert_eq!(request.offset(), 20);
//!
//! let page = Page::new(vec!["a", "b"], request, 22);
//! assert_eq!(page.total_pages(), 3);
//! assert!(!page.has_next());
//! ```

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::error::{Error, Result};

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Zero-based page index and a page size of at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    index: u64,
    size: u32,
}

impl PageRequest {
    /// Build a request; a size of zero is rejected
    pub fn new(index: u64, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidPageRequest(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self { index, size })
    }

    /// Build a request from optional caller input, applying configured limits
    ///
    /// A missing size becomes `limits.default_size`; sizes above
    /// `limits.max_size` are clamped. An explicit zero is still rejected.
    pub fn from_parts(
        index: Option<u64>,
        size: Option<u32>,
        limits: &PaginationConfig,
    ) -> Result<Self> {
        let max = limits.max_size.max(1);
        let size = size.unwrap_or_else(|| limits.default_size.clamp(1, max));
        Self::new(index.unwrap_or(0), size).map(|request| request.clamped(max))
    }

    /// Same index with the size capped at `max`
    #[must_use]
    pub fn clamped(self, max: u32) -> Self {
        Self {
            index: self.index,
            size: self.size.clamp(1, max.max(1)),
        }
    }

    pub const fn index(&self) -> u64 {
        self.index
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of records preceding this page; saturates instead of overflowing
    pub const fn offset(&self) -> u64 {
        self.index.saturating_mul(self.size as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results
///
/// Serializes as `{"results", "page_size", "page_number", "total_count"}` in
/// that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub page_size: u32,
    pub page_number: u64,
    /// Matching records across the whole collection, not just this page
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        Self {
            results,
            page_size: request.size(),
            page_number: request.index(),
            total_count,
        }
    }

    /// Convert every item, keeping the paging fields
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            page_size: self.page_size,
            page_number: self.page_number,
            total_count: self.total_count,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next(&self) -> bool {
        self.page_number.saturating_add(1) < self.total_pages()
    }
}
