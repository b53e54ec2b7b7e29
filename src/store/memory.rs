use crate::{contact, store};

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// [`store::ContactStore`] held in process memory.
///
/// Scans yield contacts in first-insertion order. Replacing a contact keeps its position,
/// deleting one closes the gap. A limit bounds the number of contacts examined before the
/// filter applies, as DynamoDB's `Limit` does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: RwLock<IndexMap<String, contact::Contact>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    /// Whether the store holds no contacts.
    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

impl FromIterator<contact::Contact> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = contact::Contact>>(iter: I) -> Self {
        let contacts = iter
            .into_iter()
            .map(|contact| (contact.name.clone(), contact))
            .collect();
        Self {
            contacts: RwLock::new(contacts),
        }
    }
}

#[async_trait]
impl store::ContactStore for MemoryStore {
    async fn get(&self, name: &str) -> Result<Option<contact::Contact>, store::StoreError> {
        Ok(self.contacts.read().await.get(name).cloned())
    }

    async fn put(&self, contact: contact::Contact) -> Result<(), store::StoreError> {
        self.contacts
            .write()
            .await
            .insert(contact.name.clone(), contact);
        Ok(())
    }

    async fn update(
        &self,
        name: &str,
        patch: contact::ContactPatch,
    ) -> Result<(), store::StoreError> {
        let mut contacts = self.contacts.write().await;
        let existing = contacts
            .entry(name.to_string())
            .or_insert_with(|| contact::Contact {
                name: name.to_string(),
                ..Default::default()
            });
        existing.apply(&patch);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), store::StoreError> {
        self.contacts.write().await.shift_remove(name);
        Ok(())
    }

    async fn scan(
        &self,
        request: store::ScanRequest,
    ) -> Result<Vec<contact::Contact>, store::StoreError> {
        let contacts = self.contacts.read().await;
        let examined = match request.limit {
            Some(limit) => usize::try_from(limit).unwrap_or(0),
            None => contacts.len(),
        };
        let matching = contacts
            .values()
            .take(examined)
            .filter(|contact| {
                request
                    .filter
                    .as_ref()
                    .is_none_or(|filter| filter.matches(contact))
            })
            .cloned()
            .collect();
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::condition;
    use crate::store::{ContactStore, ScanRequest};

    use rstest::rstest;

    fn contact(name: &str, gender: &str, email: &str) -> contact::Contact {
        contact::Contact {
            name: name.to_string(),
            gender: Some(gender.to_string()),
            phone_num: Some("555-0100".to_string()),
            email: Some(email.to_string()),
            address: Some("1 Main St".to_string()),
        }
    }

    fn seeded() -> MemoryStore {
        MemoryStore::from_iter([
            contact("a", "female", "a@example.com"),
            contact("b", "male", "b@test.org"),
            contact("c", "female", "c@example.com"),
        ])
    }

    fn names(contacts: &[contact::Contact]) -> Vec<&str> {
        contacts.iter().map(|contact| contact.name.as_str()).collect()
    }

    #[rstest]
    #[case::all(ScanRequest::all(), vec!["a", "b", "c"])]
    #[case::gender(ScanRequest::filtered(condition::Filter::gender("female")), vec!["a", "c"])]
    #[case::email(ScanRequest::filtered(condition::Filter::email("example.com")), vec!["a", "c"])]
    #[case::limited(ScanRequest::limited(2), vec!["a", "b"])]
    #[case::limit_applies_before_filter(
        ScanRequest {
            filter: Some(condition::Filter::gender("female")),
            limit: Some(2),
        },
        vec!["a"]
    )]
    #[case::negative_limit(ScanRequest::limited(-1), vec![])]
    #[tokio::test]
    async fn test_scan(#[case] request: ScanRequest, #[case] expected: Vec<&str>) {
        let store = seeded();
        let actual = store.scan(request).await.unwrap();
        assert_eq!(names(&actual), expected);
    }

    #[tokio::test]
    async fn test_put_replaces_in_place() {
        let store = seeded();
        store
            .put(contact("a", "male", "a@test.org"))
            .await
            .unwrap();
        let actual = store.scan(ScanRequest::all()).await.unwrap();
        assert_eq!(names(&actual), vec!["a", "b", "c"]);
        assert_eq!(actual[0].gender.as_deref(), Some("male"));
    }

    #[tokio::test]
    async fn test_update_upserts_absent_contact() {
        let store = MemoryStore::new();
        let patch = contact::ContactPatch::try_from(vec![(
            contact::ContactField::Email,
            "z@example.com".to_string(),
        )])
        .unwrap();
        store.update("z", patch).await.unwrap();
        let actual = store.get("z").await.unwrap();
        assert_eq!(
            actual,
            Some(contact::Contact {
                name: "z".to_string(),
                email: Some("z@example.com".to_string()),
                ..Default::default()
            })
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = seeded();
        store.delete("b").await.unwrap();
        store.delete("b").await.unwrap();
        store.delete("never-created").await.unwrap();
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get("b").await.unwrap(), None);
    }
}
