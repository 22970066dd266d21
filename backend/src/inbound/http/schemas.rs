//! OpenAPI schema definitions for domain and adapter types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their JSON
//! shape so the framework dependency stays in the inbound layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Person`].
#[derive(ToSchema)]
#[schema(as = Person)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Display name; starts with a capital Latin letter, at most 50 characters.
    #[schema(example = "Ada Lovelace", max_length = 50, pattern = r"^[A-Z][A-Za-z0-9 .\-]*$")]
    name: String,
}

/// OpenAPI schema for a page of persons.
#[derive(ToSchema)]
#[schema(as = PersonPage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonPageSchema {
    content: Vec<PersonSchema>,
    /// Zero-based page index.
    number: u32,
    /// Requested page size.
    size: u32,
    number_of_elements: u32,
    total_elements: u64,
    total_pages: u64,
    first: bool,
    last: bool,
    empty: bool,
}

/// OpenAPI schema for [`crate::inbound::http::error::ErrorPayload`].
#[derive(ToSchema)]
#[schema(as = ErrorPayload)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Path of the failed request.
    #[schema(example = "/person/999")]
    url: String,
    /// HTTP status code.
    #[schema(example = 404)]
    status: u16,
    /// Human-readable reason.
    #[schema(example = "Person 999 not found.")]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn properties<T: PartialSchema>() -> Vec<String> {
        match T::schema() {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_three_fields() {
        let mut fields = properties::<ErrorSchema>();
        fields.sort();
        assert_eq!(fields, vec!["message", "status", "url"]);
    }

    #[test]
    fn page_schema_uses_camel_case() {
        let fields = properties::<PersonPageSchema>();
        assert!(fields.contains(&"numberOfElements".to_owned()));
        assert!(fields.contains(&"totalElements".to_owned()));
    }
}
