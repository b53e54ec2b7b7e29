use crate::contact;

use aws_sdk_dynamodb::types;
use std::collections;

/// Primary key of a contact item.
///
/// ```rust
/// use dynamodb_contacts::common::key;
///
/// let key = key::Key::contact("Ada");
/// assert_eq!(key.name, "name");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Key {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: String,
}

impl Key {
    /// Key of the contact called `name`.
    pub fn contact(name: &str) -> Self {
        Self {
            name: contact::NAME_ATTRIBUTE.to_string(),
            value: name.to_string(),
        }
    }
}

impl From<Key> for collections::HashMap<String, types::AttributeValue> {
    fn from(key: Key) -> Self {
        Self::from([(key.name, types::AttributeValue::S(key.value))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::plain_name(
        Key::contact("Ada"),
        collections::HashMap::from(
            [(
                "name".to_string(),
                types::AttributeValue::S(
                    "Ada".to_string()
                ),
            )]
        )
    )]
    #[case::reserved_word_is_just_a_value(
        Key::contact("all"),
        collections::HashMap::from(
            [(
                "name".to_string(),
                types::AttributeValue::S(
                    "all".to_string()
                ),
            )]
        )
    )]
    fn test_key_to_hash_map(
        #[case] key: Key,
        #[case] expected: collections::HashMap<String, types::AttributeValue>,
    ) {
        let actual: collections::HashMap<String, types::AttributeValue> = key.into();
        assert_eq!(actual, expected);
    }
}
