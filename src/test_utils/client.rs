// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::Schema;
use async_graphql::{Response, Value};

/// Execute a GraphQL query against the given schema.
pub async fn execute(schema: &Schema, query: &str) -> Response {
    let _ = env_logger::builder().is_test(true).try_init();
    schema.execute(query).await
}

/// Returns the names of all fields of the root query object.
pub async fn query_field_names(schema: &Schema) -> Vec<String> {
    let response = execute(schema, r#"{ __type(name: "Query") { fields { name } } }"#).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let fields = match response.data {
        Value::Object(mut data) => match data.shift_remove("__type") {
            Some(Value::Object(mut query_type)) => query_type.shift_remove("fields"),
            _ => None,
        },
        _ => None,
    };

    match fields {
        Some(Value::List(fields)) => fields
            .into_iter()
            .filter_map(|field| match field {
                Value::Object(field) => match field.get("name") {
                    Some(Value::String(name)) => Some(name.to_owned()),
                    _ => None,
                },
                _ => None,
            })
            .collect(),
        _ => panic!("Expected list of query fields"),
    }
}
