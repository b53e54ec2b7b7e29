//! HTTP surface of the contacts service.
//!
//! | Route | Operation |
//! |---|---|
//! | `GET /contacts/all` | every contact, sorted by name ignoring case |
//! | `GET /contacts/recent` | up to five contacts in store order |
//! | `GET /contacts/{name}` | one contact |
//! | `POST /contacts` | create or replace a contact |
//! | `PUT /contacts/{name}` | partial update |
//! | `DELETE /contacts/{name}` | delete |
//! | `GET /contacts/gender/{gender}` | exact match on gender |
//! | `GET /contacts/email/{email}` | substring match on email |
//!
//! `all` and `recent` are reserved: a contact with either name can be updated and deleted,
//! but `GET /contacts/{name}` never reaches it. Anything else answers
//! `404 {"error": "Not Found"}`, including known paths with an unsupported method.

/// Error type and its mapping onto HTTP responses.
pub mod error;

/// Route handlers.
pub mod handlers;

/// Success response bodies.
pub mod response;

use crate::store;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for contacts.
    pub store: Arc<dyn store::ContactStore>,
}

/// Build the router over `store`.
pub fn router(store: Arc<dyn store::ContactStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/contacts", post(handlers::create_contact))
        .route(
            "/contacts/{name}",
            get(handlers::read_contacts)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/contacts/gender/{gender}", get(handlers::filter_by_gender))
        .route("/contacts/email/{email}", get(handlers::filter_by_email))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
