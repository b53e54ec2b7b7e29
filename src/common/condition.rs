use crate::{common, contact};

use aws_sdk_dynamodb::types;
use std::collections;

/// Condition types supported by contact filters.
///
/// ```rust
/// use dynamodb_contacts::common::condition;
///
/// let eq = condition::Condition::Equals("female".to_string());
/// let contains = condition::Condition::Contains("example.com".to_string());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Condition {
    /// Checks if an attribute contains a specified substring.
    Contains(String),
    /// Checks if an attribute value equals a specified value.
    Equals(String),
}

impl Condition {
    fn get_expression(
        self,
        key: &str,
        key_placeholder: &str,
        index: &mut usize,
    ) -> (String, collections::HashMap<String, types::AttributeValue>) {
        let (expression, value_placeholder, value) = match self {
            Self::Contains(value) => {
                let value_placeholder = common::value_placeholder(&format!("{key}_contains{index}"));
                let expression = format!("contains({key_placeholder}, {value_placeholder})");
                (expression, value_placeholder, value)
            }
            Self::Equals(value) => {
                let value_placeholder = common::value_placeholder(&format!("{key}_eq{index}"));
                let expression = format!("{key_placeholder} = {value_placeholder}");
                (expression, value_placeholder, value)
            }
        };
        *index += 1;
        let expression_attribute_values =
            collections::HashMap::from([(value_placeholder, types::AttributeValue::S(value))]);
        (expression, expression_attribute_values)
    }

    /// Evaluate the condition against an attribute value. Absent attributes never match.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Self::Contains(needle), Some(value)) => value.contains(needle.as_str()),
            (Self::Equals(expected), Some(value)) => value == expected,
            (_, None) => false,
        }
    }
}

/// Condition applied to a contact attribute.
///
/// ```rust
/// use dynamodb_contacts::{common::condition, contact};
///
/// let filter = condition::Filter {
///     field: contact::ContactField::Gender,
///     condition: condition::Condition::Equals("female".to_string()),
/// };
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter {
    /// The condition to apply to the attribute.
    pub condition: Condition,
    /// The attribute to apply the condition to.
    pub field: contact::ContactField,
}

impl Filter {
    /// Exact match on `gender`.
    pub fn gender(gender: &str) -> Self {
        Self {
            condition: Condition::Equals(gender.to_string()),
            field: contact::ContactField::Gender,
        }
    }

    /// Substring match on `email`.
    pub fn email(email: &str) -> Self {
        Self {
            condition: Condition::Contains(email.to_string()),
            field: contact::ContactField::Email,
        }
    }

    /// Evaluate the filter in process, with the semantics DynamoDB applies server side.
    pub fn matches(&self, contact: &contact::Contact) -> bool {
        self.condition.matches(contact.get(self.field))
    }
}

impl From<Filter> for common::ExpressionInput {
    fn from(filter: Filter) -> Self {
        let key = filter.field.as_str();
        let placeholder = common::name_placeholder(key);
        let (expression, expression_attribute_values) =
            filter.condition.get_expression(key, &placeholder, &mut 0);
        Self {
            expression,
            expression_attribute_names: collections::HashMap::from([(
                placeholder,
                key.to_string(),
            )]),
            expression_attribute_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::gender_equals(
        Filter::gender("female"),
        common::ExpressionInput {
            expression: "#gender = :gender_eq0".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [(
                    "#gender".to_string(),
                    "gender".to_string(),
                )]
            ),
            expression_attribute_values: collections::HashMap::from(
                [(
                    ":gender_eq0".to_string(),
                    types::AttributeValue::S(
                        "female".to_string()
                    ),
                )]
            ),
        }
    )]
    #[case::email_contains(
        Filter::email("example.com"),
        common::ExpressionInput {
            expression: "contains(#email, :email_contains0)".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [(
                    "#email".to_string(),
                    "email".to_string(),
                )]
            ),
            expression_attribute_values: collections::HashMap::from(
                [(
                    ":email_contains0".to_string(),
                    types::AttributeValue::S(
                        "example.com".to_string()
                    ),
                )]
            ),
        }
    )]
    #[case::address_equals(
        Filter {
            condition: Condition::Equals(
                "1 Main St".to_string()
            ),
            field: contact::ContactField::Address,
        },
        common::ExpressionInput {
            expression: "#address = :address_eq0".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [(
                    "#address".to_string(),
                    "address".to_string(),
                )]
            ),
            expression_attribute_values: collections::HashMap::from(
                [(
                    ":address_eq0".to_string(),
                    types::AttributeValue::S(
                        "1 Main St".to_string()
                    ),
                )]
            ),
        }
    )]
    fn test_filter_to_expression_input(
        #[case] filter: Filter,
        #[case] expected: common::ExpressionInput,
    ) {
        let actual: common::ExpressionInput = filter.into();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::equals_hit(Condition::Equals("female".to_string()), Some("female"), true)]
    #[case::equals_is_case_sensitive(Condition::Equals("female".to_string()), Some("Female"), false)]
    #[case::equals_is_not_prefix(Condition::Equals("fe".to_string()), Some("female"), false)]
    #[case::contains_hit(Condition::Contains("example.com".to_string()), Some("a@example.com"), true)]
    #[case::contains_miss(Condition::Contains("example.com".to_string()), Some("b@test.org"), false)]
    #[case::absent_attribute(Condition::Contains(String::new()), None, false)]
    fn test_condition_matches(
        #[case] condition: Condition,
        #[case] value: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(condition.matches(value), expected);
    }
}
