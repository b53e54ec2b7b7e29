//! Write operations for modifying contact items.
//!
//! This module provides operations for writing data to DynamoDB:
//! - Putting new contacts or replacing existing ones
//! - Partially updating contacts
//! - Deleting contacts by name

/// Common utilities and types for write operations.
pub mod common;

/// Delete item operation for removing contacts.
pub mod delete_item;

/// Put item operation for creating or replacing contacts.
pub mod put_item;

/// Update item operation for patching existing contacts.
pub mod update_item;
