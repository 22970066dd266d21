//! Tests for domain error messages and categories.

use super::*;
use crate::domain::PERSON_NAME_MAX;
use rstest::rstest;

#[rstest]
#[case(Error::PersonNotFound(PersonId::new(999)), ErrorCode::NotFound, "Person 999 not found.")]
#[case(
    Error::from(NameValidationError::Empty),
    ErrorCode::InvalidRequest,
    "Invalid name! The name must not be empty!"
)]
#[case(
    Error::from(NameValidationError::TooLong { max: PERSON_NAME_MAX }),
    ErrorCode::InvalidRequest,
    "Invalid name! The name must be no longer than 50 characters!"
)]
#[case(
    Error::missing_parameter("name"),
    ErrorCode::InvalidRequest,
    "Required String parameter 'name' is not present"
)]
#[case(
    Error::invalid_parameter("sort", "No property 'age' found for type 'Person'"),
    ErrorCode::InvalidRequest,
    "No property 'age' found for type 'Person'"
)]
#[case(
    Error::no_handler("PATCH", "/person"),
    ErrorCode::NotFound,
    "No handler found for PATCH /person"
)]
#[case(
    Error::unexpected("person repository connection failed: refused"),
    ErrorCode::InternalError,
    "person repository connection failed: refused"
)]
fn variants_carry_code_and_message(
    #[case] error: Error,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    assert_eq!(error.code(), code);
    assert_eq!(error.to_string(), message);
}

#[rstest]
fn error_code_serialises_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::InvalidRequest).expect("serialise code");
    assert_eq!(value, serde_json::json!("invalid_request"));
}
