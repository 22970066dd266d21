//! Domain primitives, services and ports.
//!
//! Public surface:
//! - `Person`, `PersonId`, `PersonName`: the stored entity and its parts.
//! - `validate_name`: the naming grammar shared by every write path.
//! - `Error`, `ErrorCode`: transport-agnostic request failures.
//! - `PersonServiceImpl`: use-cases over a `PersonRepository` port.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod person;
pub mod person_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::person::{
    NameValidationError, PERSON_NAME_MAX, Person, PersonId, PersonName, validate_name,
};
pub use self::person_service::PersonServiceImpl;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
