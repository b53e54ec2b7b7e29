//! The contact record and the validation applied to inbound request bodies.
//!
//! A contact is keyed by its `name`. The four remaining attributes are the only ones a
//! client may patch, and [`ContactField`] is the allow-list for them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Attribute name of the table's partition key.
pub const NAME_ATTRIBUTE: &str = "name";

/// Path segments the read route interprets itself, so contacts with these names cannot be
/// fetched through `GET /contacts/{name}`.
pub const RESERVED_NAMES: [&str; 2] = ["all", "recent"];

/// A single contact record.
///
/// Attributes missing from a stored item are kept as `None` and left out when serialized.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Contact {
    /// Unique name, also the partition key.
    pub name: String,
    /// Gender, matched exactly by the gender filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Phone number, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_num: Option<String>,
    /// Email address, matched by substring in the email filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Postal address, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Contact {
    /// Value of a non-key attribute.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Gender => self.gender.as_deref(),
            ContactField::PhoneNum => self.phone_num.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Address => self.address.as_deref(),
        }
    }

    /// Overwrite a non-key attribute.
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Gender => &mut self.gender,
            ContactField::PhoneNum => &mut self.phone_num,
            ContactField::Email => &mut self.email,
            ContactField::Address => &mut self.address,
        };
        *slot = Some(value);
    }

    /// Apply every field of `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: &ContactPatch) {
        for (field, value) in patch.iter() {
            self.set(field, value.to_string());
        }
    }

    /// Whether `name` collides with a literal segment of the read route.
    pub fn is_reserved_name(name: &str) -> bool {
        RESERVED_NAMES.contains(&name)
    }
}

/// Non-key contact attributes, the only ones an update may touch.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ContactField {
    /// `gender`
    Gender,
    /// `phone_num`
    PhoneNum,
    /// `email`
    Email,
    /// `address`
    Address,
}

impl ContactField {
    /// All patchable fields, in the order the create pipeline checks them.
    pub const ALL: [Self; 4] = [Self::Gender, Self::PhoneNum, Self::Email, Self::Address];

    /// Attribute name in the table and in JSON bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::PhoneNum => "phone_num",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    /// Human readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::PhoneNum => "Phone number",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NAME_ATTRIBUTE => Err(ValidationError::ImmutableKey),
            other => Self::ALL
                .into_iter()
                .find(|field| field.as_str() == other)
                .ok_or_else(|| ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// Reasons a request body is rejected before reaching the store.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// The body is not a JSON object.
    #[error("Request body must be a JSON object")]
    NotAnObject,
    /// A field is missing or holds something other than a string.
    #[error("{0} must be a string")]
    NotAString(&'static str),
    /// An update tried to change the key.
    #[error("Name cannot be updated")]
    ImmutableKey,
    /// An update named an attribute outside the allow-list.
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// An update carried no fields at all.
    #[error("Update body must contain at least one field")]
    EmptyUpdate,
}

fn as_object(body: Value) -> Result<Map<String, Value>, ValidationError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ValidationError::NotAnObject),
    }
}

fn take_string(
    map: &mut Map<String, Value>,
    key: &str,
    label: &'static str,
) -> Result<String, ValidationError> {
    match map.remove(key) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(ValidationError::NotAString(label)),
    }
}

impl TryFrom<Value> for Contact {
    type Error = ValidationError;

    /// Validate a create body. Fields are checked in a fixed order and the first failure is
    /// returned; keys other than the five contact attributes are ignored.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let mut map = as_object(body)?;
        let name = take_string(&mut map, NAME_ATTRIBUTE, "Name")?;
        let mut contact = Self {
            name,
            ..Default::default()
        };
        for field in ContactField::ALL {
            let value = take_string(&mut map, field.as_str(), field.label())?;
            contact.set(field, value);
        }
        Ok(contact)
    }
}

/// A non-empty set of field assignments for a partial update, in request order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactPatch {
    fields: IndexMap<ContactField, String>,
}

impl ContactPatch {
    /// Iterate over the assignments in request order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Number of assigned fields, never zero.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`: construction rejects empty patches.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<(ContactField, String)>> for ContactPatch {
    type Error = ValidationError;

    fn try_from(assignments: Vec<(ContactField, String)>) -> Result<Self, Self::Error> {
        if assignments.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        let fields = assignments.into_iter().collect();
        Ok(Self { fields })
    }
}

impl TryFrom<Value> for ContactPatch {
    type Error = ValidationError;

    /// Validate an update body against the field allow-list, stopping at the first bad key.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let map = as_object(body)?;
        let mut assignments = Vec::with_capacity(map.len());
        for (key, value) in map {
            let field: ContactField = key.parse()?;
            match value {
                Value::String(value) => assignments.push((field, value)),
                _ => return Err(ValidationError::NotAString(field.label())),
            }
        }
        assignments.try_into()
    }
}
