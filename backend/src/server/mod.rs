//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use person_registry::Trace;
#[cfg(debug_assertions)]
use person_registry::doc::ApiDoc;
use person_registry::domain::PersonServiceImpl;
use person_registry::domain::ports::PersonRepository;
use person_registry::inbound::http::error::no_handler;
use person_registry::inbound::http::health::{HealthState, live, ready};
use person_registry::inbound::http::persons;
use person_registry::inbound::http::state::HttpState;
use person_registry::outbound::memory::InMemoryPersonRepository;
use person_registry::outbound::persistence::DieselPersonRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Pick the person store: PostgreSQL when a pool is configured, otherwise
/// process memory.
fn build_person_repository(config: &ServerConfig) -> Arc<dyn PersonRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "person store selected");
            Arc::new(DieselPersonRepository::new(pool.clone()))
        }
        None => {
            info!(store = "memory", "person store selected");
            Arc::new(InMemoryPersonRepository::new())
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(persons::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(no_handler))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let repository = build_person_repository(&config);
    let http_state = web::Data::new(HttpState::new(Arc::new(PersonServiceImpl::new(
        repository,
    ))));
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "person registry listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::Value;

    fn memory_state() -> web::Data<HttpState> {
        let repository = Arc::new(InMemoryPersonRepository::new());
        web::Data::new(HttpState::new(Arc::new(PersonServiceImpl::new(repository))))
    }

    #[rstest]
    #[case(test::TestRequest::patch().uri("/person"))]
    #[case(test::TestRequest::get().uri("/people"))]
    #[actix_web::test]
    async fn unrouted_requests_get_not_found_payload(#[case] request: test::TestRequest) {
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            memory_state(),
        ))
        .await;
        let res = test::call_service(&app, request.to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().contains_key("trace-id"));
        let body: Value = test::read_body_json(res).await;
        let message = body["message"].as_str().expect("message");
        assert!(message.starts_with("No handler found for "));
        assert_eq!(body["status"], 404);
    }

    #[actix_web::test]
    async fn health_probes_are_routed() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = test::init_service(build_app(health, memory_state())).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn memory_store_is_selected_without_pool() {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("socket address"));
        let repository = build_person_repository(&config);
        assert!(
            repository
                .find_by_id(person_registry::domain::PersonId::new(1))
                .await
                .expect("memory lookup")
                .is_none()
        );
    }
}
