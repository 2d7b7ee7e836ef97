//! Page requests and the paginated response envelope.

use serde::Serialize;

use crate::domain::types::TypeConstraintError;

/// Zero-based page index used when the caller does not ask for one.
pub const DEFAULT_PAGE: usize = 0;
/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Zero-based page index and a page size that is always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Result<Self, TypeConstraintError> {
        if size == 0 {
            return Err(TypeConstraintError::ZeroPageSize);
        }
        Ok(Self { page, size })
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of rows to skip before the requested page starts.
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Number of pages needed to hold `total_items` rows, zero when there are none.
pub fn total_pages(total_items: usize, request: &PageRequest) -> usize {
    total_items.div_ceil(request.size())
}

/// Uniform wrapper for a single page of results.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> PageEnvelope<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total_items: usize) -> Self {
        Self {
            data,
            current_page: request.page(),
            total_items,
            total_pages: total_pages(total_items, &request),
        }
    }
}
