//! Person API handlers.
//!
//! ```text
//! GET    /person?page=0&size=20&sort=name,desc
//! PUT    /person          name=Ada
//! GET    /person/{id}
//! POST   /person/{id}     name=Grace
//! DELETE /person/{id}
//! ```
//!
//! `name` is read from an `application/x-www-form-urlencoded` body and falls
//! back to the query string when no form is sent.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use pagination::{Page, PageRequest, Sort};
use serde::Deserialize;

use crate::domain::ports::PERSON_SORT_PROPERTIES;
use crate::domain::{Error, Person, PersonId};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Entity name used in sort error messages.
const SORT_ENTITY: &str = "Person";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Paging parameters for `GET /person`.
///
/// Values that do not parse as non-negative integers fall back to their
/// defaults. When a key repeats, the first occurrence wins.
#[derive(Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index. Defaults to 0.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// Page size, clamped to 1..=2000. Defaults to 20.
    #[param(value_type = Option<u32>)]
    pub size: Option<String>,
    /// `property[,asc|desc]` where property is `id` or `name`. Defaults to `id`.
    pub sort: Option<String>,
}

impl PageParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "size" => &mut params.size,
                "sort" => &mut params.sort,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    fn into_request(self) -> Result<PageRequest, Error> {
        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => Sort::ascending("id"),
            Some(raw) => Sort::parse(raw, PERSON_SORT_PROPERTIES, SORT_ENTITY)
                .map_err(|err| Error::invalid_parameter("sort", err.to_string()))?,
        };
        Ok(PageRequest::new(
            lenient_number(self.page.as_deref()),
            lenient_number(self.size.as_deref()),
            sort,
        ))
    }
}

fn lenient_number(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|raw| raw.trim().parse().ok())
}

/// Carrier for the `name` request parameter.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct NameParam {
    pub name: Option<String>,
}

/// Pick `name` from a form body, or from the query string when the request
/// carries no form. A form body that fails to decode is reported as is.
fn resolve_name(
    req: &HttpRequest,
    form: Result<web::Form<NameParam>, actix_web::Error>,
    query: web::Query<NameParam>,
) -> Result<String, Error> {
    let from_body = match form {
        Ok(form) => form.into_inner().name,
        Err(err) if req.content_type() == FORM_CONTENT_TYPE => {
            return Err(Error::invalid_parameter("body", err.to_string()));
        }
        Err(_) => None,
    };
    from_body
        .or_else(|| query.into_inner().name)
        .ok_or_else(|| Error::missing_parameter("name"))
}

/// List one page of persons.
#[utoipa::path(
    get,
    path = "/person",
    params(PageParams),
    responses(
        (status = 200, description = "Page of persons", body = crate::inbound::http::schemas::PersonPageSchema),
        (status = 400, description = "Invalid sort expression", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "listPersons"
)]
#[get("/person")]
pub async fn list_persons(
    state: web::Data<HttpState>,
    req: HttpRequest,
    pairs: web::Query<Vec<(String, String)>>,
) -> ApiResult<web::Json<Page<Person>>> {
    let request = PageParams::from_pairs(pairs.into_inner())
        .into_request()
        .map_err(|err| ApiError::new(&req, err))?;
    let page = state
        .persons
        .list(request)
        .await
        .map_err(|err| ApiError::new(&req, err))?;
    Ok(web::Json(page))
}

/// Register a new person.
#[utoipa::path(
    put,
    path = "/person",
    params(("name" = String, Query, description = "Person name; may also be sent as a form field")),
    responses(
        (status = 200, description = "Stored person", body = crate::inbound::http::schemas::PersonSchema),
        (status = 400, description = "Missing or invalid name", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "addPerson"
)]
#[put("/person")]
pub async fn add_person(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<NameParam>,
    form: Result<web::Form<NameParam>, actix_web::Error>,
) -> ApiResult<web::Json<Person>> {
    let name = resolve_name(&req, form, query).map_err(|err| ApiError::new(&req, err))?;
    let person = state
        .persons
        .add(&name)
        .await
        .map_err(|err| ApiError::new(&req, err))?;
    Ok(web::Json(person))
}

/// Fetch a person by id.
#[utoipa::path(
    get,
    path = "/person/{id}",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person", body = crate::inbound::http::schemas::PersonSchema),
        (status = 400, description = "Non-numeric id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Person not found", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "getPerson"
)]
#[get("/person/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    req: HttpRequest,
    id: web::Path<i64>,
) -> ApiResult<web::Json<Person>> {
    let person = state
        .persons
        .get_by_id(PersonId::new(id.into_inner()))
        .await
        .map_err(|err| ApiError::new(&req, err))?;
    Ok(web::Json(person))
}

/// Rename an existing person.
#[utoipa::path(
    post,
    path = "/person/{id}",
    params(
        ("id" = i64, Path, description = "Person identifier"),
        ("name" = String, Query, description = "New name; may also be sent as a form field")
    ),
    responses(
        (status = 200, description = "Updated person", body = crate::inbound::http::schemas::PersonSchema),
        (status = 400, description = "Missing or invalid name", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Person not found", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "updatePerson"
)]
#[post("/person/{id}")]
pub async fn update_person(
    state: web::Data<HttpState>,
    req: HttpRequest,
    id: web::Path<i64>,
    query: web::Query<NameParam>,
    form: Result<web::Form<NameParam>, actix_web::Error>,
) -> ApiResult<web::Json<Person>> {
    let name = resolve_name(&req, form, query).map_err(|err| ApiError::new(&req, err))?;
    let person = state
        .persons
        .update(PersonId::new(id.into_inner()), &name)
        .await
        .map_err(|err| ApiError::new(&req, err))?;
    Ok(web::Json(person))
}

/// Delete a person. Unknown ids succeed silently.
#[utoipa::path(
    delete,
    path = "/person/{id}",
    params(("id" = i64, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person removed or never existed"),
        (status = 400, description = "Non-numeric id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "removePerson"
)]
#[delete("/person/{id}")]
pub async fn remove_person(
    state: web::Data<HttpState>,
    req: HttpRequest,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .persons
        .remove(PersonId::new(id.into_inner()))
        .await
        .map_err(|err| ApiError::new(&req, err))?;
    Ok(HttpResponse::Ok().finish())
}

/// Register the person routes and the extractor configs they rely on.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use person_registry::inbound::http::persons;
///
/// let app = App::new().configure(persons::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(crate::inbound::http::error::query_config())
        .app_data(crate::inbound::http::error::form_config())
        .app_data(crate::inbound::http::error::path_config())
        .service(list_persons)
        .service(add_person)
        .service(get_person)
        .service(update_person)
        .service(remove_person);
}
