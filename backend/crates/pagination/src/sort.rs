//! Sort key parsing for `sort=property[,direction]` query parameters.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::PageRequestError;

/// Ordering direction applied to the sort property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Smallest value first.
    #[default]
    Asc,
    /// Largest value first.
    Desc,
}

impl Direction {
    /// Whether this direction is [`Direction::Desc`].
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl FromStr for Direction {
    type Err = PageRequestError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(PageRequestError::InvalidDirection {
                direction: raw.to_owned(),
            })
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// A single sort key.
///
/// ## Invariants
/// - `property` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sort {
    property: String,
    direction: Direction,
}

impl Sort {
    /// Build an ascending sort on `property`.
    #[must_use]
    pub fn ascending(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    /// Build a descending sort on `property`.
    #[must_use]
    pub fn descending(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// Parse `property[,direction]`, accepting only the listed properties.
    ///
    /// `entity` names the sorted type in error messages.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when the property is empty or unknown, or
    /// when the direction is not `asc`/`desc` (case-insensitive).
    ///
    /// # Examples
    /// ```
    /// use pagination::{Direction, Sort};
    ///
    /// let sort = Sort::parse("name,desc", &["id", "name"], "Person").expect("valid sort");
    /// assert_eq!(sort.property(), "name");
    /// assert_eq!(sort.direction(), Direction::Desc);
    /// ```
    pub fn parse(
        raw: &str,
        allowed: &[&str],
        entity: &'static str,
    ) -> Result<Self, PageRequestError> {
        let (property, direction) = match raw.split_once(',') {
            Some((property, direction)) => (property.trim(), direction.trim().parse()?),
            None => (raw.trim(), Direction::Asc),
        };
        if property.is_empty() {
            return Err(PageRequestError::EmptyProperty);
        }
        if !allowed.contains(&property) {
            return Err(PageRequestError::UnknownProperty {
                property: property.to_owned(),
                entity,
            });
        }
        Ok(Self {
            property: property.to_owned(),
            direction,
        })
    }

    /// Property the collection is ordered by.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Ordering direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.property, self.direction)
    }
}
