//! Strict tool arguments with legacy field aliases.
//!
//! Tool inputs are validated in three steps before a handler runs:
//!
//! 1. Alias fields are renamed to their canonical field using the request
//!    type's declarative alias table. Supplying an alias together with its
//!    canonical field is rejected.
//! 2. The canonical request type is deserialized with
//!    `deny_unknown_fields`, which checks field types and rejects anything
//!    outside the canonical set.
//! 3. Cross-field and range checks in [`ToolArgs::validate`] run.
//!
//! [`Strict`] wraps a request type and performs all three. Its JSON schema is
//! the canonical type's schema, so aliases are accepted at runtime but never
//! appear in `tools/list`.

use std::borrow::Cow;

use rmcp::schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Raw tool arguments as received on the wire.
pub type RawArgs = Map<String, Value>;

/// A canonical tool request type.
pub trait ToolArgs: DeserializeOwned {
    /// `(alias, canonical)` field pairs accepted on input.
    const ALIASES: &'static [(&'static str, &'static str)] = &[];

    /// Checks beyond what the field types express.
    fn validate(&self) -> Result<(), ArgumentError> {
        Ok(())
    }
}

/// Argument validation failures not covered by serde.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("both '{canonical}' and its alias '{alias}' were supplied")]
    AliasConflict {
        alias: &'static str,
        canonical: &'static str,
    },

    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: i64,
        value: i64,
    },
}

/// Rename alias fields to their canonical names.
pub fn resolve_aliases(
    mut args: RawArgs,
    aliases: &[(&'static str, &'static str)],
) -> Result<RawArgs, ArgumentError> {
    for &(alias, canonical) in aliases {
        let Some(value) = args.remove(alias) else {
            continue;
        };
        if args.contains_key(canonical) {
            return Err(ArgumentError::AliasConflict { alias, canonical });
        }
        args.insert(canonical.to_string(), value);
    }
    Ok(args)
}

/// Parse and validate raw arguments into `T`.
pub fn parse_args<T: ToolArgs>(raw: RawArgs) -> Result<T, String> {
    let args = resolve_aliases(raw, T::ALIASES).map_err(|e| e.to_string())?;
    let parsed: T = serde_json::from_value(Value::Object(args)).map_err(|e| e.to_string())?;
    parsed.validate().map_err(|e| e.to_string())?;
    Ok(parsed)
}

/// Tool parameters parsed through the alias table and validated.
///
/// Use as `Parameters<Strict<Request>>` in a tool handler.
#[derive(Debug, Clone)]
pub struct Strict<T>(pub T);

impl<'de, T: ToolArgs> Deserialize<'de> for Strict<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawArgs::deserialize(deserializer)?;
        parse_args(raw).map(Strict).map_err(D::Error::custom)
    }
}

// Advertise the canonical schema only.
impl<T: JsonSchema> JsonSchema for Strict<T> {
    fn schema_name() -> Cow<'static, str> {
        T::schema_name()
    }

    fn schema_id() -> Cow<'static, str> {
        T::schema_id()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        T::json_schema(generator)
    }
}
