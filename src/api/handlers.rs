use crate::{
    api::{
        AppState,
        error::{ApiError, Operation},
        response::{self, Listing, Message},
    },
    common::condition,
    contact, results,
    store::ScanRequest,
};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// What `GET /contacts/{segment}` refers to.
///
/// The literals `all` and `recent` always win, so contacts carrying those names cannot be
/// fetched individually through this route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContactSelector {
    /// Every contact, sorted by name.
    All,
    /// The first few contacts in store order.
    Recent,
    /// A single contact looked up by name.
    Name(String),
}

impl From<String> for ContactSelector {
    fn from(segment: String) -> Self {
        match segment.as_str() {
            "all" => Self::All,
            "recent" => Self::Recent,
            _ => Self::Name(segment),
        }
    }
}

/// A body that failed to parse as JSON is reported like any other malformed body.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable request body");
            Err(contact::ValidationError::NotAnObject.into())
        }
    }
}

/// `GET /contacts/{segment}`
pub async fn read_contacts(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Response, ApiError> {
    let response = match ContactSelector::from(segment) {
        ContactSelector::All => Json(list_all(&state).await?).into_response(),
        ContactSelector::Recent => Json(list_recent(&state).await?).into_response(),
        ContactSelector::Name(name) => Json(get_contact(&state, &name).await?).into_response(),
    };
    Ok(response)
}

#[tracing::instrument(skip_all)]
async fn list_all(state: &AppState) -> Result<Listing, ApiError> {
    let mut contacts = state
        .store
        .scan(ScanRequest::all())
        .await
        .map_err(ApiError::store(Operation::ListAll))?;
    results::sort_by_name(&mut contacts);
    Ok(Listing::sorted(contacts, response::NO_CONTACTS))
}

#[tracing::instrument(skip_all)]
async fn list_recent(state: &AppState) -> Result<Listing, ApiError> {
    let limit = i32::try_from(results::RECENT_LIMIT).unwrap_or(i32::MAX);
    let contacts = state
        .store
        .scan(ScanRequest::limited(limit))
        .await
        .map_err(ApiError::store(Operation::ListRecent))?;
    let contacts = results::take_recent(contacts);
    Ok(Listing::contacts(contacts, response::NO_CONTACTS))
}

#[tracing::instrument(skip(state))]
async fn get_contact(state: &AppState, name: &str) -> Result<contact::Contact, ApiError> {
    state
        .store
        .get(name)
        .await
        .map_err(ApiError::store(Operation::Get))?
        .ok_or(ApiError::ContactNotFound)
}

/// `POST /contacts`
#[tracing::instrument(skip_all)]
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let contact = contact::Contact::try_from(json_body(body)?)?;
    if contact::Contact::is_reserved_name(&contact.name) {
        tracing::warn!(
            name = %contact.name,
            "contact name shadowed by a listing route, it can only be reached by update or delete"
        );
    }
    state
        .store
        .put(contact)
        .await
        .map_err(ApiError::store(Operation::Create))?;
    Ok(Json(Message::new("Contact created")))
}

/// `PUT /contacts/{name}`
#[tracing::instrument(skip(state, body))]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let patch = contact::ContactPatch::try_from(json_body(body)?)?;
    state
        .store
        .update(&name, patch)
        .await
        .map_err(ApiError::store(Operation::Update))?;
    Ok(Json(Message::new("Contact updated")))
}

/// `DELETE /contacts/{name}`
#[tracing::instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state
        .store
        .delete(&name)
        .await
        .map_err(ApiError::store(Operation::Delete))?;
    Ok(Json(Message::new("Contact deleted")))
}

/// `GET /contacts/gender/{gender}`
#[tracing::instrument(skip(state))]
pub async fn filter_by_gender(
    State(state): State<AppState>,
    Path(gender): Path<String>,
) -> Result<Json<Listing>, ApiError> {
    let filter = condition::Filter::gender(&gender);
    filtered(&state, filter, response::NO_GENDER_MATCH).await
}

/// `GET /contacts/email/{email}`
#[tracing::instrument(skip(state))]
pub async fn filter_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Listing>, ApiError> {
    let filter = condition::Filter::email(&email);
    filtered(&state, filter, response::NO_EMAIL_MATCH).await
}

async fn filtered(
    state: &AppState,
    filter: condition::Filter,
    empty: &'static str,
) -> Result<Json<Listing>, ApiError> {
    let contacts = state
        .store
        .scan(ScanRequest::filtered(filter))
        .await
        .map_err(ApiError::store(Operation::Filter))?;
    Ok(Json(Listing::contacts(contacts, empty)))
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::all("all", ContactSelector::All)]
    #[case::recent("recent", ContactSelector::Recent)]
    #[case::name("Ada", ContactSelector::Name("Ada".to_string()))]
    #[case::literals_are_case_sensitive("ALL", ContactSelector::Name("ALL".to_string()))]
    #[case::prefix_is_a_name("recently", ContactSelector::Name("recently".to_string()))]
    fn test_contact_selector(#[case] segment: &str, #[case] expected: ContactSelector) {
        assert_eq!(ContactSelector::from(segment.to_string()), expected);
    }
}
