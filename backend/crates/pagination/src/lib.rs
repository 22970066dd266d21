//! Offset pagination primitives shared by list endpoints.
//!
//! A [`PageRequest`] describes which window of an ordered collection a client
//! wants (zero-based page number, page size and sort key). A [`Page`] wraps the
//! returned slice together with the metadata clients need to walk the rest of
//! the collection.
//!
//! ```
//! use pagination::{Page, PageRequest, Sort};
//!
//! let request = PageRequest::new(Some(1), Some(2), Sort::ascending("id"));
//! assert_eq!(request.offset(), 2);
//!
//! let page = Page::new(vec!["c", "d"], &request, 5);
//! assert_eq!(page.total_pages(), 3);
//! assert!(!page.is_last());
//! ```

mod error;
mod page;
mod request;
mod sort;

pub use error::PageRequestError;
pub use page::Page;
pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use sort::{Direction, Sort};
