//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test as actix_test;
use actix_web::web;
use serde_json::Value;

use crate::domain::DirectoryService;
use crate::domain::seed::DirectorySeed;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryDirectoryStore;

/// Handler state over an in-memory store holding the built-in seed.
///
/// Each call builds a fresh store, so tests never share mutations.
pub fn seeded_state() -> web::Data<HttpState> {
    let mut store = InMemoryDirectoryStore::default();
    DirectorySeed::builtin()
        .apply(&mut store)
        .expect("built-in seed applies");
    web::Data::new(HttpState::from_service(Arc::new(DirectoryService::new(
        store,
    ))))
}

/// Read a response body as JSON.
pub async fn read_json<B>(response: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}
