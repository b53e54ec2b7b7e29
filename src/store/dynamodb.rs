use crate::{common, contact, read, store, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::from_item;

/// [`store::ContactStore`] over a DynamoDB table keyed by `name` (type `S`).
#[derive(Clone, Debug)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Store backed by `table_name`, reached through `client`.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// The table this store reads and writes.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn write_args(&self) -> write::common::WriteArgs {
        write::common::WriteArgs {
            table_name: self.table_name.clone(),
        }
    }
}

#[async_trait]
impl store::ContactStore for DynamoDbStore {
    #[tracing::instrument(name = "contacts.get_item", skip(self), fields(table = %self.table_name))]
    async fn get(&self, name: &str) -> Result<Option<contact::Contact>, store::StoreError> {
        let output = read::get_item::GetItem {
            key: common::key::Key::contact(name),
            table_name: self.table_name.clone(),
            ..Default::default()
        }
        .send(&self.client)
        .await?;
        let contact = output.item.map(from_item).transpose()?;
        Ok(contact)
    }

    #[tracing::instrument(
        name = "contacts.put_item",
        skip_all,
        fields(table = %self.table_name, name = %contact.name)
    )]
    async fn put(&self, contact: contact::Contact) -> Result<(), store::StoreError> {
        write::put_item::PutItem {
            item: contact,
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[tracing::instrument(
        name = "contacts.update_item",
        skip(self, patch),
        fields(table = %self.table_name, field_count = patch.len())
    )]
    async fn update(
        &self,
        name: &str,
        patch: contact::ContactPatch,
    ) -> Result<(), store::StoreError> {
        write::update_item::UpdateItem {
            key: common::key::Key::contact(name),
            patch,
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[tracing::instrument(name = "contacts.delete_item", skip(self), fields(table = %self.table_name))]
    async fn delete(&self, name: &str) -> Result<(), store::StoreError> {
        write::delete_item::DeleteItem {
            key: common::key::Key::contact(name),
            write_args: self.write_args(),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[tracing::instrument(name = "contacts.scan", skip(self), fields(table = %self.table_name))]
    async fn scan(
        &self,
        request: store::ScanRequest,
    ) -> Result<Vec<contact::Contact>, store::StoreError> {
        let items = read::scan::Scan {
            filter: request.filter,
            limit: request.limit,
            table_name: self.table_name.clone(),
        }
        .send(&self.client)
        .await?;
        tracing::debug!(count = items.len(), "scanned contacts");
        let contacts = items
            .into_iter()
            .map(from_item)
            .collect::<Result<Vec<contact::Contact>, _>>()?;
        Ok(contacts)
    }
}
