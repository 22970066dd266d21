//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the [`PersonService`] port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::PersonService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub persons: Arc<dyn PersonService>,
}

impl HttpState {
    /// Construct state from the person use-case port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use person_registry::domain::PersonServiceImpl;
    /// use person_registry::inbound::http::state::HttpState;
    /// use person_registry::outbound::memory::InMemoryPersonRepository;
    ///
    /// let service = PersonServiceImpl::new(Arc::new(InMemoryPersonRepository::new()));
    /// let state = HttpState::new(Arc::new(service));
    /// let _persons = state.persons.clone();
    /// ```
    pub fn new(persons: Arc<dyn PersonService>) -> Self {
        Self { persons }
    }
}
