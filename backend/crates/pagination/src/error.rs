//! Errors raised while interpreting client supplied paging parameters.

/// Rejection reasons for page request parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The sort expression did not name a property.
    #[error("Sort property must not be empty")]
    EmptyProperty,
    /// The sort property is not one the collection can be ordered by.
    #[error("No property '{property}' found for type '{entity}'")]
    UnknownProperty {
        /// Property requested by the client.
        property: String,
        /// Entity name used in the message.
        entity: &'static str,
    },
    /// The sort direction is neither `asc` nor `desc`.
    #[error("Invalid sort direction '{direction}'")]
    InvalidDirection {
        /// Direction requested by the client.
        direction: String,
    },
}
