#![deny(missing_docs)]

//! # DynamoDB Contacts
//!
//! A contact-management REST API whose records live in an Amazon DynamoDB table.
//!
//! ## Overview
//!
//! Each contact is keyed by its `name` and carries `gender`, `phone_num`, `email` and
//! `address`. The crate is layered bottom-up:
//! - typed DynamoDB operations that build expressions and placeholder maps for you
//! - a [`store::ContactStore`] boundary with DynamoDB and in-memory implementations
//! - request validation, result sorting and an axum router mapping outcomes to JSON
//!
//! ## Quick Example
//!
//! Serve the API over an in-memory store:
//!
//! ```no_run
//! use dynamodb_contacts::{api, store};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(store::memory::MemoryStore::new());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, api::router(store)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Partial updates never require writing expression strings:
//!
//! ```no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_contacts::{common, contact, write};
//!
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let patch = contact::ContactPatch::try_from(vec![
//!     (contact::ContactField::Gender, "female".to_string()),
//!     (contact::ContactField::Email, "ada@example.com".to_string()),
//! ])?;
//! let update_item = write::update_item::UpdateItem {
//!     key: common::key::Key::contact("Ada"),
//!     patch,
//!     write_args: write::common::WriteArgs {
//!         table_name: "contacts".to_string(),
//!     },
//! };
//! // The crate builds: "SET #gender = :gender, #email = :email"
//! update_item.send(client).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Keys, filter conditions and expression placeholders
//! - [`mod@read`] - Read operations (GetItem, Scan)
//! - [`mod@write`] - Write operations (PutItem, UpdateItem, DeleteItem)
//! - [`mod@contact`] - The contact record and body validation
//! - [`mod@store`] - The storage boundary
//! - [`mod@results`] - Sorting and truncation of listings
//! - [`mod@api`] - HTTP routes, handlers and error mapping

/// HTTP routes, handlers and error mapping.
pub mod api;

/// Common utilities for keys, conditions, and expression placeholders.
pub mod common;

/// Command line and environment configuration.
pub mod config;

/// The contact record and request body validation.
pub mod contact;

/// Tracing subscriber setup.
pub mod logging;

/// Read operations for retrieving contacts from DynamoDB.
///
/// This module provides operations for:
/// - Getting a contact by name
/// - Scanning the table with an optional filter and limit
pub mod read;

/// Post-processing of listings.
pub mod results;

/// Storage boundary for contacts.
pub mod store;

/// Write operations for modifying contacts in DynamoDB.
///
/// This module provides operations for:
/// - Putting new contacts or replacing existing ones
/// - Partially updating contacts
/// - Deleting contacts by name
pub mod write;
