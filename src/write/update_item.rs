use crate::{common, contact, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

impl From<&contact::ContactPatch> for common::ExpressionInput {
    /// Build `SET #f1 = :f1, #f2 = :f2, ...` for every patched field, in patch order.
    ///
    /// Field names come from the allow-list, so they are valid placeholder identifiers and
    /// never collide with one another.
    fn from(patch: &contact::ContactPatch) -> Self {
        let operations = patch
            .iter()
            .map(|(field, value)| {
                let key = field.as_str();
                let placeholder = common::name_placeholder(key);
                let value_placeholder = common::value_placeholder(key);
                common::ExpressionInput {
                    expression: format!("{placeholder} = {value_placeholder}"),
                    expression_attribute_names: collections::HashMap::from([(
                        placeholder,
                        key.to_string(),
                    )]),
                    expression_attribute_values: collections::HashMap::from([(
                        value_placeholder,
                        types::AttributeValue::S(value.to_string()),
                    )]),
                }
            })
            .collect();
        let mut operation = common::ExpressionInput::merge(", ", operations);
        operation.expression = format!("SET {}", operation.expression);
        operation
    }
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation.
///
/// Only the fields named by the patch change. DynamoDB creates the item if the key is absent.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_contacts::{common, contact, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let patch = contact::ContactPatch::try_from(vec![
///     (contact::ContactField::Email, "ada@example.com".to_string()),
/// ])?;
/// let update_item = write::update_item::UpdateItem {
///     key: common::key::Key::contact("Ada"),
///     patch,
///     write_args: write::common::WriteArgs {
///         table_name: "contacts".to_string(),
///     },
/// };
/// // builds "SET #email = :email"
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem {
    /// The primary key of the item to update.
    pub key: common::key::Key,
    /// The fields to assign.
    pub patch: contact::ContactPatch,
    /// Additional write operation arguments.
    pub write_args: write::common::WriteArgs,
}

impl From<UpdateItem> for UpdateItemInput {
    fn from(update_item: UpdateItem) -> Self {
        let mut write_operation: write::common::WriteInput = update_item.write_args.into();
        let operation = common::ExpressionInput::from(&update_item.patch);
        let update_expression = write_operation.merge_expression(operation);
        Self {
            key: update_item.key.into(),
            update_expression,
            write_operation,
        }
    }
}

impl UpdateItem {
    /// Execute the update item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.into();
        let builder = client
            .update_item()
            .set_key(Some(update_item.key))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::contact::ContactField;
    use rstest::rstest;

    fn patch(fields: &[(ContactField, &str)]) -> contact::ContactPatch {
        fields
            .iter()
            .map(|(field, value)| (*field, value.to_string()))
            .collect::<Vec<_>>()
            .try_into()
            .unwrap()
    }

    #[rstest]
    #[case::single_field(
        patch(&[(ContactField::Gender, "a")]),
        common::ExpressionInput {
            expression: "SET #gender = :gender".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#gender".to_string(), "gender".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":gender".to_string(),
                        types::AttributeValue::S(
                            "a".to_string()
                        )
                    ),
                ]
            ),
        }
    )]
    #[case::keeps_patch_order(
        patch(
            &[
                (ContactField::PhoneNum, "a"),
                (ContactField::Address, "b"),
                (ContactField::Email, "c"),
            ]
        ),
        common::ExpressionInput {
            expression: "SET #phone_num = :phone_num, #address = :address, #email = :email".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#phone_num".to_string(), "phone_num".to_string()),
                    ("#address".to_string(), "address".to_string()),
                    ("#email".to_string(), "email".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":phone_num".to_string(),
                        types::AttributeValue::S(
                            "a".to_string()
                        )
                    ),
                    (
                        ":address".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                    (
                        ":email".to_string(),
                        types::AttributeValue::S(
                            "c".to_string()
                        )
                    ),
                ]
            ),
        }
    )]
    #[case::repeated_field_keeps_last_value(
        patch(
            &[
                (ContactField::Email, "a"),
                (ContactField::Email, "b"),
            ]
        ),
        common::ExpressionInput {
            expression: "SET #email = :email".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#email".to_string(), "email".to_string()),
                ]
            ),
            expression_attribute_values: collections::HashMap::from(
                [
                    (
                        ":email".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                ]
            ),
        }
    )]
    fn test_patch_to_update_expression(
        #[case] patch: contact::ContactPatch,
        #[case] expected: common::ExpressionInput,
    ) {
        let actual = common::ExpressionInput::from(&patch);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_update_item() {
        let args = UpdateItem {
            key: common::key::Key::contact("a"),
            patch: patch(&[(ContactField::Address, "b")]),
            write_args: write::common::WriteArgs {
                table_name: "c".to_string(),
            },
        };
        let expected = UpdateItemInput {
            key: collections::HashMap::from(
                [(
                    "name".to_string(),
                    types::AttributeValue::S(
                        "a".to_string()
                    ),
                )]
            ),
            update_expression: "SET #address = :address".to_string(),
            write_operation: write::common::WriteInput {
                expression_attribute_names: Some(
                    collections::HashMap::from(
                        [
                            ("#address".to_string(), "address".to_string()),
                        ]
                    )
                ),
                expression_attribute_values: Some(
                    collections::HashMap::from(
                        [
                            (
                                ":address".to_string(),
                                types::AttributeValue::S(
                                    "b".to_string()
                                )
                            ),
                        ]
                    )
                ),
                table_name: "c".to_string(),
            },
        };
        let actual: UpdateItemInput = args.into();
        assert_eq!(actual, expected);
    }
}
