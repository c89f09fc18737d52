// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::{FieldValue, ResolverContext};
use async_graphql::indexmap::IndexMap;
use async_graphql::{Name, Result, Value};

use crate::graphql::constants::ID_FIELD;

/// Build an object value from the given fields, keeping their order.
pub fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
    Value::Object(
        IntoIterator::into_iter(fields)
            .map(|(name, value)| (Name::new(name), value))
            .collect(),
    )
}

/// Returns the `id` of a backend record or null if there is none.
pub fn record_id(record: &Value) -> Value {
    match record {
        Value::Object(fields) => fields.get(ID_FIELD).cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Collect all arguments passed to the current query field.
pub fn field_arguments(ctx: &ResolverContext) -> Result<IndexMap<Name, Value>> {
    ctx.args
        .iter()
        .map(|(name, value)| Ok((name.to_owned(), value.deserialize::<Value>()?)))
        .collect()
}

/// Resolve a field by looking up its name in the value passed down from the parent field.
///
/// Lists are turned into list field values so that their items can be resolved as objects.
pub fn resolve_from_parent<'a>(ctx: &ResolverContext) -> Option<FieldValue<'a>> {
    let fields = match ctx.parent_value.as_value() {
        Some(Value::Object(fields)) => fields,
        _ => return None,
    };

    match fields.get(ctx.field().name()) {
        None | Some(Value::Null) => None,
        Some(Value::List(items)) => Some(FieldValue::list(
            items.iter().cloned().map(FieldValue::value),
        )),
        Some(value) => Some(FieldValue::value(value.to_owned())),
    }
}
