//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the person endpoints, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is printed by the `openapi-dump` binary.

use crate::inbound::http::schemas::{ErrorSchema, PersonPageSchema, PersonSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person registry API",
        description = "CRUD interface over named persons, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::persons::list_persons,
        crate::inbound::http::persons::add_person,
        crate::inbound::http::persons::get_person,
        crate::inbound::http::persons::update_person,
        crate::inbound::http::persons::remove_person,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(PersonSchema, PersonPageSchema, ErrorSchema)),
    tags(
        (name = "persons", description = "Person registration and lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
