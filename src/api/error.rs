use crate::{contact, store};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

/// Store operation a failure happened in, which selects the message sent to the client.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// `GET /contacts/all`
    ListAll,
    /// `GET /contacts/recent`
    ListRecent,
    /// `GET /contacts/{name}`
    Get,
    /// `POST /contacts`
    Create,
    /// `PUT /contacts/{name}`
    Update,
    /// `DELETE /contacts/{name}`
    Delete,
    /// `GET /contacts/gender/{gender}` and `GET /contacts/email/{email}`
    Filter,
}

impl Operation {
    /// Fixed client-facing message for a failure of this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::ListAll => "Could not retrieve all contacts",
            Self::ListRecent => "Could not retrieve latest contacts",
            Self::Get => "Could not retrieve contact",
            Self::Create => "Could not create contact",
            Self::Update => "Could not update contact",
            Self::Delete => "Could not delete contact",
            Self::Filter => "Could not retrieve contacts",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error(transparent)]
    Validation(#[from] contact::ValidationError),
    /// Direct lookup of a name that is not stored.
    #[error("Could not find contact with provided name")]
    ContactNotFound,
    /// No route matches the request.
    #[error("Not Found")]
    RouteNotFound,
    /// The store failed; the source is logged, only the operation message is returned.
    #[error("{0}")]
    Store(Operation, #[source] store::StoreError),
}

impl ApiError {
    /// Wrap a store failure raised while performing `operation`.
    pub fn store(operation: Operation) -> impl FnOnce(store::StoreError) -> Self {
        move |err| Self::Store(operation, err)
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ContactNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Store(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    /// Human readable message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Store(operation, source) => {
                tracing::error!(%operation, error = %source, "store operation failed");
            }
            Self::Validation(err) => tracing::debug!(error = %err, "rejected request body"),
            Self::ContactNotFound | Self::RouteNotFound => {}
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::validation(
        ApiError::Validation(contact::ValidationError::NotAString("Email")),
        StatusCode::BAD_REQUEST,
        "Email must be a string"
    )]
    #[case::contact_not_found(
        ApiError::ContactNotFound,
        StatusCode::NOT_FOUND,
        "Could not find contact with provided name"
    )]
    #[case::route_not_found(
        ApiError::RouteNotFound,
        StatusCode::NOT_FOUND,
        "Not Found"
    )]
    #[case::store_hides_source(
        ApiError::Store(
            Operation::Update,
            store::StoreError::Request("throttled".to_string())
        ),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Could not update contact"
    )]
    fn test_status_and_message(
        #[case] err: ApiError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.to_string(), message);
    }
}
