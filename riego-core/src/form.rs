//! Irrigation form state.
//!
//! Holds one string per field, updated independently on each edit. The
//! state serializes to a JSON object with exactly the ten field keys, in
//! field order, with the values as typed.

use crate::error::{Result, RiegoError};
use crate::field::Field;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; 10],
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style `set`.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate `(field, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// First field, in insertion order, holding the empty string.
    ///
    /// Whitespace counts as a value; only `""` is empty.
    pub fn first_empty(&self) -> Option<Field> {
        self.iter().find(|(_, v)| v.is_empty()).map(|(f, _)| f)
    }

    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    pub fn validate(&self) -> Result<()> {
        match self.first_empty() {
            Some(field) => Err(RiegoError::EmptyField(field)),
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
