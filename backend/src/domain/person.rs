//! Person data model and the name grammar every stored person satisfies.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of characters allowed in a person name.
pub const PERSON_NAME_MAX: usize = 50;

/// Reasons a candidate name is rejected, in the order they are checked.
///
/// The `Display` text is part of the public error contract and is returned
/// verbatim to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameValidationError {
    /// The name is the empty string.
    #[error("Invalid name! The name must not be empty!")]
    Empty,
    /// The name does not start with `A-Z` or contains a character outside
    /// Latin letters, digits, space, `.` and `-`.
    #[error(
        "Invalid name! The name must contain Latin characters, numbers, signs '-', '.' \
         and start with a capital letter!"
    )]
    InvalidCharacters,
    /// The name is longer than [`PERSON_NAME_MAX`] characters.
    #[error("Invalid name! The name must be no longer than {max} characters!")]
    TooLong { max: usize },
}

static PERSON_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn person_name_regex() -> &'static Regex {
    PERSON_NAME_RE.get_or_init(|| {
        // Length is enforced separately, after the grammar check.
        let pattern = r"^[A-Z][A-Za-z0-9 .\-]*$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("person name regex failed to compile: {error}"))
    })
}

/// Check `name` against the naming grammar.
///
/// Rules short-circuit in this order: empty, grammar, length. A name that is
/// both too long and contains an illegal character reports
/// [`NameValidationError::InvalidCharacters`].
///
/// # Examples
/// ```
/// use person_registry::domain::{NameValidationError, validate_name};
///
/// assert_eq!(validate_name("Ada Lovelace"), Ok(()));
/// assert_eq!(validate_name(""), Err(NameValidationError::Empty));
/// assert_eq!(validate_name("ada"), Err(NameValidationError::InvalidCharacters));
/// ```
pub fn validate_name(name: &str) -> Result<(), NameValidationError> {
    if name.is_empty() {
        return Err(NameValidationError::Empty);
    }
    if !person_name_regex().is_match(name) {
        return Err(NameValidationError::InvalidCharacters);
    }
    if name.chars().count() > PERSON_NAME_MAX {
        return Err(NameValidationError::TooLong {
            max: PERSON_NAME_MAX,
        });
    }
    Ok(())
}

/// Store-assigned person identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A name that has passed [`validate_name`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`].
    pub fn new(name: impl Into<String>) -> Result<Self, NameValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = NameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A registered person.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `name` always satisfies the naming grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    id: PersonId,
    name: PersonName,
}

impl Person {
    /// Build a person from validated components.
    pub fn new(id: PersonId, name: PersonName) -> Self {
        Self { id, name }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Current name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Replace the name, keeping the identifier.
    pub fn rename(&mut self, name: PersonName) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests;
