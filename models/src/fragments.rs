//! Ingredient and instruction text as the backend stores it: a list whose first element is an
//! object of text fragments, followed by a fixed-width trailer that is not part of the text.

use crate::number::format_number;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Characters dropped from the end of the joined fragments.
const TRAILER_LEN: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected a list of fragment objects")]
    NotAList,
    #[error("fragment list is empty")]
    Empty,
    #[error("first fragment entry is not an object")]
    NotAnObject,
    #[error("fragment {0:?} is not a scalar")]
    Nested(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Fragments(Value);

impl Fragments {
    /// Join the values of the first entry in property order and cut off the trailer.
    pub fn text(&self) -> Result<String, ShapeError> {
        let first = match &self.0 {
            Value::Array(entries) => entries.first().ok_or(ShapeError::Empty)?,
            _ => return Err(ShapeError::NotAList),
        };

        let fields = first.as_object().ok_or(ShapeError::NotAnObject)?;
        let mut joined = String::new();

        for (key, value) in property_order(fields) {
            match value {
                Value::String(s) => joined.push_str(s),
                Value::Number(n) => {
                    if let Some(n) = n.as_f64() {
                        joined.push_str(&format_number(n));
                    }
                }
                Value::Bool(b) => joined.push_str(if *b { "true" } else { "false" }),
                Value::Null => {}
                Value::Array(_) | Value::Object(_) => return Err(ShapeError::Nested(key.clone())),
            }
        }

        let keep = joined.chars().count().saturating_sub(TRAILER_LEN);
        Ok(joined.chars().take(keep).collect())
    }
}

/// Browser property order: array index keys ascending, then the remaining keys as they appear.
fn property_order(fields: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut indexed = Vec::new();
    let mut named = Vec::new();

    for (key, value) in fields {
        match array_index(key) {
            Some(index) => indexed.push((index, key, value)),
            None => named.push((key, value)),
        }
    }

    indexed.sort_by_key(|(index, _, _)| *index);

    indexed
        .into_iter()
        .map(|(_, key, value)| (key, value))
        .chain(named)
        .collect()
}

/// `key` as an array index: canonical decimal below 2^32 - 1, so no sign and no leading zero.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if key.len() > 1 && key.starts_with('0') {
        return None;
    }

    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

impl From<Value> for Fragments {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
