//! Page window requested by a client.

use crate::Sort;

/// Page size used when the client does not supply one (or supplies zero).
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound applied to client supplied page sizes.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Zero-based page window over an ordered collection.
///
/// ## Invariants
/// - `size` is within `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Sort,
}

impl PageRequest {
    /// Build a request, applying defaults and clamping the size.
    ///
    /// # Examples
    /// ```
    /// use pagination::{MAX_PAGE_SIZE, PageRequest, Sort};
    ///
    /// let request = PageRequest::new(None, Some(10_000), Sort::ascending("id"));
    /// assert_eq!(request.page(), 0);
    /// assert_eq!(request.size(), MAX_PAGE_SIZE);
    /// ```
    #[must_use]
    pub fn new(page: Option<u32>, size: Option<u32>, sort: Sort) -> Self {
        let size = match size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        Self {
            page: page.unwrap_or(0),
            size,
            sort,
        }
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Sort key the collection is ordered by.
    #[must_use]
    pub const fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Number of items preceding this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Alias for [`PageRequest::size`] widened for storage queries.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, DEFAULT_PAGE_SIZE)]
    #[case(Some(0), DEFAULT_PAGE_SIZE)]
    #[case(Some(5), 5)]
    #[case(Some(MAX_PAGE_SIZE + 1), MAX_PAGE_SIZE)]
    fn size_is_defaulted_and_clamped(#[case] requested: Option<u32>, #[case] expected: u32) {
        let request = PageRequest::new(None, requested, Sort::ascending("id"));
        assert_eq!(request.size(), expected);
    }

    #[rstest]
    fn offset_does_not_overflow_for_large_pages() {
        let request = PageRequest::new(Some(u32::MAX), Some(MAX_PAGE_SIZE), Sort::ascending("id"));
        assert_eq!(
            request.offset(),
            u64::from(u32::MAX) * u64::from(MAX_PAGE_SIZE)
        );
    }
}
