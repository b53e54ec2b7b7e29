use crate::common;

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    expression_attribute_names: Option<collections::HashMap<String, String>>,
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    filter_expression: Option<String>,
    limit: Option<i32>,
    table_name: String,
}

/// Scan operation.
///
/// Without a `limit` every page is read until the table is exhausted. With a `limit` a single
/// page is read: DynamoDB examines at most `limit` items and then applies the filter, so the
/// result may hold fewer items than the limit even if more would match. The order of the
/// returned items is whatever order the table yields.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_contacts::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     filter: Some(common::condition::Filter::gender("female")),
///     table_name: "contacts".to_string(),
///     ..Default::default()
/// };
/// let items = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scan {
    /// Filter applied server side to every scanned item.
    pub filter: Option<common::condition::Filter>,
    /// The maximum number of items to evaluate.
    pub limit: Option<i32>,
    /// The name of the table to scan.
    pub table_name: String,
}

impl From<Scan> for ScanInput {
    fn from(scan: Scan) -> Self {
        let mut operation = Self {
            limit: scan.limit,
            table_name: scan.table_name,
            ..Default::default()
        };
        if let Some(filter) = scan.filter {
            let filter_operation: common::ExpressionInput = filter.into();
            let filter_expression = filter_operation.merge_into(
                &mut operation.expression_attribute_names,
                &mut operation.expression_attribute_values,
            );
            operation.filter_expression = Some(filter_expression);
        }
        operation
    }
}

impl Scan {
    /// Execute the scan operation and return the raw items.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        Vec<collections::HashMap<String, types::AttributeValue>>,
        error::SdkError<operation::scan::ScanError>,
    > {
        let scan: ScanInput = self.into();
        let builder = client
            .scan()
            .set_expression_attribute_names(scan.expression_attribute_names)
            .set_expression_attribute_values(scan.expression_attribute_values)
            .set_filter_expression(scan.filter_expression)
            .set_limit(scan.limit)
            .table_name(scan.table_name);
        if scan.limit.is_some() {
            let output = builder.send().await?;
            return Ok(output.items.unwrap_or_default());
        }
        let mut items = Vec::new();
        let mut paginator = builder.into_paginator().send();
        while let Some(page) = paginator.next().await {
            if let Some(page_items) = page?.items {
                items.extend(page_items);
            }
        }
        Ok(items)
    }
}
