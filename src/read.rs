//! Read operations for retrieving contact items.
//!
//! This module provides operations for reading data from DynamoDB:
//! - Getting a single contact by name
//! - Scanning the table, optionally filtered and bounded

/// Get item operation for retrieving a single contact by name.
pub mod get_item;

/// Scan operation for retrieving many contacts.
pub mod scan;
