//! Storage boundary for contact records.
//!
//! [`ContactStore`] is the only way the HTTP layer touches persisted contacts. The
//! production implementation talks to DynamoDB; the in-memory one backs local runs and tests.
//! Neither retries, locks or versions records: concurrent writes to the same name resolve as
//! last write wins.

/// DynamoDB-backed store.
pub mod dynamodb;

/// In-process store.
pub mod memory;

use crate::{common, contact};

use async_trait::async_trait;
use aws_sdk_dynamodb::error;
use std::{error::Error as StdError, fmt};
use thiserror::Error;

/// Failures surfaced by a [`ContactStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing service rejected or failed the request.
    #[error("store request failed: {0}")]
    Request(String),
    /// An item could not be converted to or from a contact.
    #[error("malformed contact item: {0}")]
    Item(#[from] serde_dynamo::Error),
}

impl<E, R> From<error::SdkError<E, R>> for StoreError
where
    E: StdError + 'static,
    R: fmt::Debug,
{
    fn from(err: error::SdkError<E, R>) -> Self {
        Self::Request(error::DisplayErrorContext(err).to_string())
    }
}

/// Parameters of a table scan.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanRequest {
    /// Only return contacts matching this filter.
    pub filter: Option<common::condition::Filter>,
    /// Examine at most this many items; unbounded when `None`.
    pub limit: Option<i32>,
}

impl ScanRequest {
    /// Scan every contact.
    pub fn all() -> Self {
        Self::default()
    }

    /// Scan every contact matching `filter`.
    pub fn filtered(filter: common::condition::Filter) -> Self {
        Self {
            filter: Some(filter),
            ..Default::default()
        }
    }

    /// Examine at most `limit` items.
    pub fn limited(limit: i32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// The operations the API needs from the backing table.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Fetch the contact called `name`, if any.
    async fn get(&self, name: &str) -> Result<Option<contact::Contact>, StoreError>;

    /// Insert `contact`, replacing any contact with the same name.
    async fn put(&self, contact: contact::Contact) -> Result<(), StoreError>;

    /// Assign the patched fields of the contact called `name`, creating it if absent.
    async fn update(&self, name: &str, patch: contact::ContactPatch) -> Result<(), StoreError>;

    /// Remove the contact called `name`. Succeeds whether or not it existed.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// Read contacts in the store's native order.
    async fn scan(&self, request: ScanRequest) -> Result<Vec<contact::Contact>, StoreError>;
}
