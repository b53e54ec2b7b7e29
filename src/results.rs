//! Post-processing applied to scanned contacts before they are returned.

use crate::contact;

/// Upper bound on the contacts returned by the "recent" listing.
pub const RECENT_LIMIT: usize = 5;

/// Sort contacts by name, ignoring case.
///
/// Names are upper-cased before comparison. The sort is stable, so contacts whose names
/// differ only in case keep their scan order.
pub fn sort_by_name(contacts: &mut [contact::Contact]) {
    contacts.sort_by_cached_key(|contact| contact.name.to_uppercase());
}

/// Keep at most [`RECENT_LIMIT`] contacts, in the order the store returned them.
///
/// The store scan carries no creation timestamp, so this is the first page of the table's
/// native order rather than the most recently created contacts.
pub fn take_recent(mut contacts: Vec<contact::Contact>) -> Vec<contact::Contact> {
    contacts.truncate(RECENT_LIMIT);
    contacts
}
