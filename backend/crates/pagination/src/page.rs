//! Page envelope returned by list endpoints.

use serde::Serialize;

use crate::PageRequest;

/// A window of an ordered collection plus navigation metadata.
///
/// Serialises with camelCase keys:
/// `{"content":[..],"number":0,"size":20,"numberOfElements":3,
/// "totalElements":3,"totalPages":1,"first":true,"last":true,"empty":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    number: u32,
    size: u32,
    number_of_elements: usize,
    total_elements: u64,
    total_pages: u64,
    first: bool,
    last: bool,
    empty: bool,
}

impl<T> Page<T> {
    /// Wrap `content` fetched for `request` out of `total_elements` items.
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(request.size()));
        let number = request.page();
        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            content,
            number,
            size: request.size(),
            total_elements,
            total_pages,
            first: number == 0,
            last: u64::from(number) + 1 >= total_pages,
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total number of items across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether this is the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.first
    }

    /// Whether no page follows this one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.last
    }
}
