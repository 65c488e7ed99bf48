//! Decoding helpers shared by the entity models.

use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{EntityError, EntityKind};

/// Decodes a wire object into `T`, wrapping the first failure as an
/// [`EntityError`] of the given kind.
pub(crate) fn decode<T>(kind: EntityKind, object: &Value) -> Result<T, EntityError>
where
    T: DeserializeOwned,
{
    if !object.is_object() {
        return Err(EntityError::new(
            kind,
            format!("expected a {} object, got {}", kind, type_name(object)),
        ));
    }
    T::deserialize(object).map_err(|e| EntityError::new(kind, e.to_string()))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Deserializes `null` (or an absent field, together with `#[serde(default)]`)
/// into `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes an optional value that can be either a string or an integer into Option<String>.
///
/// Phone numbers arrive in either form depending on how they were entered.
pub(crate) fn optional_string_or_int<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionalStringOrIntVisitor;

    impl<'de> Visitor<'de> for OptionalStringOrIntVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("null, a string, or an integer")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }
    }

    deserializer.deserialize_option(OptionalStringOrIntVisitor)
}

/// Converts an optional field into a JSON value, `null` when absent.
pub(crate) fn opt<T>(value: &Option<T>) -> Value
where
    T: Clone + Into<Value>,
{
    value.clone().map_or(Value::Null, Into::into)
}
