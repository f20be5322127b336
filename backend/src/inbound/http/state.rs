//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only depend on the
//! driving ports, so they can be tested against any implementation.

use std::sync::Arc;

use crate::domain::ports::{GroupDirectory, UserDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
    pub groups: Arc<dyn GroupDirectory>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users: Arc<dyn UserDirectory>, groups: Arc<dyn GroupDirectory>) -> Self {
        Self { users, groups }
    }

    /// Use one service for both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use usergroups::domain::DirectoryService;
    /// use usergroups::inbound::http::state::HttpState;
    /// use usergroups::outbound::memory::InMemoryDirectoryStore;
    ///
    /// let service = Arc::new(DirectoryService::new(InMemoryDirectoryStore::default()));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<D>(service: Arc<D>) -> Self
    where
        D: UserDirectory + GroupDirectory + 'static,
    {
        Self {
            users: service.clone(),
            groups: service,
        }
    }
}
