//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{NameValidationError, PersonId};
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;

async fn render(error: Error, path: &str) -> (StatusCode, ErrorPayload) {
    let req = TestRequest::default().uri(path).to_http_request();
    let response = ResponseError::error_response(&ApiError::new(&req, error));
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("error payload deserialises");
    (status, payload)
}

#[rstest]
#[case(Error::PersonNotFound(PersonId::new(1)), StatusCode::NOT_FOUND)]
#[case(Error::InvalidName(NameValidationError::Empty), StatusCode::BAD_REQUEST)]
#[case(Error::missing_parameter("name"), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_parameter("sort", "bad"), StatusCode::BAD_REQUEST)]
#[case(Error::no_handler("PATCH", "/person"), StatusCode::NOT_FOUND)]
#[case(Error::unexpected("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    let req = TestRequest::default().to_http_request();
    assert_eq!(ApiError::new(&req, error).status_code(), expected);
}

#[rstest]
#[actix_web::test]
async fn not_found_payload_carries_url_status_and_message() {
    let (status, payload) = render(Error::PersonNotFound(PersonId::new(999)), "/person/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        payload,
        ErrorPayload {
            url: "/person/999".to_owned(),
            status: 404,
            message: "Person 999 not found.".to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn url_excludes_query_string() {
    let (_, payload) = render(Error::missing_parameter("name"), "/person?other=1").await;

    assert_eq!(payload.url, "/person");
    assert_eq!(
        payload.message,
        "Required String parameter 'name' is not present"
    );
}

#[rstest]
#[actix_web::test]
async fn unexpected_errors_keep_their_description() {
    let (status, payload) = render(Error::unexpected("connection refused"), "/person").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload.status, 500);
    assert_eq!(payload.message, "connection refused");
}

#[rstest]
#[actix_web::test]
async fn invalid_name_uses_fixed_message() {
    let (_, payload) = render(
        Error::InvalidName(NameValidationError::TooLong { max: 50 }),
        "/person",
    )
    .await;

    assert_eq!(
        payload.message,
        "Invalid name! The name must be no longer than 50 characters!"
    );
}
