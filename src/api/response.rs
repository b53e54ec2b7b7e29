use crate::contact;

use serde::Serialize;

/// Informational message returned when a listing finds nothing.
pub const NO_CONTACTS: &str = "No contacts created yet";
/// Empty result of the gender filter.
pub const NO_GENDER_MATCH: &str = "No contacts with specified gender found!";
/// Empty result of the email filter.
pub const NO_EMAIL_MATCH: &str = "No contacts with specified email found!";

/// `{"message": ...}` body.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Message {
    /// The message.
    pub message: &'static str,
}

impl Message {
    /// Body carrying `message`.
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Body of the listing routes: the contacts, or a message when there are none.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    /// `{"sortedContacts": [...]}`
    Sorted(SortedContacts),
    /// `{"contacts": [...]}`
    Contacts(Contacts),
    /// `{"message": ...}`
    Empty(Message),
}

/// Wrapper serialized as `{"sortedContacts": [...]}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SortedContacts {
    /// Contacts ordered by name.
    #[serde(rename = "sortedContacts")]
    pub sorted_contacts: Vec<contact::Contact>,
}

/// Wrapper serialized as `{"contacts": [...]}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Contacts {
    /// Contacts in store order.
    pub contacts: Vec<contact::Contact>,
}

impl Listing {
    /// Sorted listing, or `empty` when there are no contacts.
    pub fn sorted(sorted_contacts: Vec<contact::Contact>, empty: &'static str) -> Self {
        if sorted_contacts.is_empty() {
            Self::Empty(Message::new(empty))
        } else {
            Self::Sorted(SortedContacts { sorted_contacts })
        }
    }

    /// Plain listing, or `empty` when there are no contacts.
    pub fn contacts(contacts: Vec<contact::Contact>, empty: &'static str) -> Self {
        if contacts.is_empty() {
            Self::Empty(Message::new(empty))
        } else {
            Self::Contacts(Contacts { contacts })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    fn ada() -> contact::Contact {
        contact::Contact {
            name: "Ada".to_string(),
            gender: Some("female".to_string()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case::sorted(
        Listing::sorted(vec![ada()], NO_CONTACTS),
        json!({"sortedContacts": [{"name": "Ada", "gender": "female"}]})
    )]
    #[case::sorted_empty(
        Listing::sorted(vec![], NO_CONTACTS),
        json!({"message": "No contacts created yet"})
    )]
    #[case::contacts(
        Listing::contacts(vec![ada()], NO_GENDER_MATCH),
        json!({"contacts": [{"name": "Ada", "gender": "female"}]})
    )]
    #[case::contacts_empty(
        Listing::contacts(vec![], NO_EMAIL_MATCH),
        json!({"message": "No contacts with specified email found!"})
    )]
    fn test_listing_serialization(#[case] listing: Listing, #[case] expected: Value) {
        let actual = serde_json::to_value(&listing).unwrap();
        assert_eq!(actual, expected);
    }
}
