// SPDX-License-Identifier: AGPL-3.0-or-later

//! Build and manage the root GraphQL schema holding the query fields of all content types.
use std::sync::Arc;

use anyhow::Result;
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, Scalar, Schema, TypeRef};
use async_graphql::{Request, Response, Value};
use dynamic_graphql::internal::Registry;
use log::{debug, info, warn};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::sync::Mutex;

use crate::config::Configuration;
use crate::content_type::{ContentType, ContentTypeProvider};
use crate::errors::SchemaBuildError;
use crate::graphql::collaborators::BuilderContext;
use crate::graphql::constants::{ID_SCALAR, QUERY};
use crate::graphql::input_values::{
    build_filters_input_object, build_scalar_filter_input, PublicationState,
};
use crate::graphql::queries::build_collection_type_queries;
use crate::graphql::scalars::BUILT_IN_SCALARS;
use crate::graphql::types::{
    build_attributes_object, build_entity_object, build_entity_response_collection_object,
    build_entity_response_object, build_pagination_object, build_response_collection_meta_object,
};

/// Add a `ping` field to the root query object.
///
/// The root query needs at least one field to be valid, even when no content type exposes a query.
fn with_ping_field(query: Object) -> Object {
    query.field(
        Field::new("ping", TypeRef::named_nn(TypeRef::STRING), |_| {
            FieldFuture::new(async move { Ok(Some(FieldValue::value(Value::from("pong")))) })
        })
        .description("Returns `pong`, useful to check if the API is reachable."),
    )
}

/// Returns the root GraphQL schema exposing find-one and find-many queries for the given content
/// types.
///
/// Content types which are not in the allow list of the configuration are ignored.
pub fn build_root_schema(
    content_types: &[ContentType],
    ctx: &BuilderContext,
    config: &Configuration,
) -> Result<Schema, SchemaBuildError> {
    // Using dynamic-graphql we create a registry where we can add static types.
    let registry = Registry::new().register::<PublicationState>();

    // Construct the schema builder and populate it with the registered types.
    let mut schema_builder = Schema::build(QUERY, None, None);
    schema_builder = registry.apply_into_schema_builder(schema_builder);

    // Register scalars and one filter input per scalar, these are shared by all content types.
    let scalars = ctx.scalars.scalars();
    for scalar in &scalars {
        if !BUILT_IN_SCALARS.contains(&scalar.as_str()) {
            schema_builder = schema_builder.register(Scalar::new(scalar));
        }
    }

    for scalar in std::iter::once(ID_SCALAR).chain(scalars.iter().map(String::as_str)) {
        let filter_input_name = ctx.scalars.filter_input_type_name(scalar);
        schema_builder =
            schema_builder.register(build_scalar_filter_input(&filter_input_name, scalar));
    }

    schema_builder = schema_builder
        .register(build_pagination_object())
        .register(build_response_collection_meta_object());

    let mut query = Object::new(QUERY);

    for content_type in content_types {
        if !config
            .supported_content_types
            .contains(&content_type.uid().to_owned())
        {
            debug!("Ignoring unsupported content type {}", content_type.uid());
            continue;
        }

        debug!("Adding content type {} to GraphQL schema", content_type.uid());

        schema_builder = schema_builder
            .register(build_attributes_object(content_type, ctx))
            .register(build_entity_object(content_type, ctx))
            .register(build_entity_response_object(content_type, ctx))
            .register(build_entity_response_collection_object(content_type, ctx))
            .register(build_filters_input_object(content_type, ctx));

        query = build_collection_type_queries(query, content_type, ctx);
    }

    schema_builder = schema_builder.register(with_ping_field(query));

    if let Some(depth) = config.depth_limit {
        schema_builder = schema_builder.limit_depth(depth);
    }

    if let Some(complexity) = config.complexity_limit {
        schema_builder = schema_builder.limit_complexity(complexity);
    }

    if !config.introspection {
        schema_builder = schema_builder.disable_introspection();
    }

    Ok(schema_builder.finish()?)
}

/// Latest built GraphQL root schema.
type GraphQLSchemaHandle = Arc<Mutex<Schema>>;

/// Shared types needed to (re-)build GraphQL schemas.
#[derive(Clone, Debug)]
struct GraphQLSharedData {
    /// Provider giving us access to the currently known content types.
    provider: ContentTypeProvider,

    /// Naming, backend and translation services used to build query fields.
    ctx: BuilderContext,

    /// Allow list and limits applied to every schema.
    config: Configuration,
}

/// Builds new GraphQL schemas dynamically and executes the latest GraphQL schema for incoming
/// queries.
///
/// Every rebuild replaces the whole schema. Requests which are already being executed keep the
/// schema they started with.
#[derive(Clone)]
pub struct GraphQLSchemaManager {
    /// Latest successfully built GraphQL root schema.
    schema: GraphQLSchemaHandle,

    /// Commonly shared types for GraphQL schemas.
    shared: GraphQLSharedData,
}

impl GraphQLSchemaManager {
    /// Returns a new instance of `GraphQLSchemaManager`.
    ///
    /// Fails if the initial schema can not be built.
    pub async fn new(
        provider: ContentTypeProvider,
        ctx: BuilderContext,
        config: Configuration,
    ) -> Result<Self> {
        let shared = GraphQLSharedData {
            provider,
            ctx,
            config,
        };

        // Subscribe before building so that no change gets lost in between
        let on_content_type_changed = shared.provider.on_content_type_changed();

        let content_types = shared.provider.all().await;
        let schema = build_root_schema(&content_types, &shared.ctx, &shared.config)?;
        debug!("Finished building initial GraphQL schema");

        // Create manager instance and spawn internal watch task
        let manager = Self {
            schema: Arc::new(Mutex::new(schema)),
            shared,
        };
        manager.spawn_content_type_changed_task(on_content_type_changed);

        Ok(manager)
    }

    /// Rebuild the GraphQL schema whenever a content type was changed.
    fn spawn_content_type_changed_task(
        &self,
        mut on_content_type_changed: Receiver<String>,
    ) {
        let shared = self.shared.clone();
        let schema = self.schema.clone();

        info!("Subscribing GraphQL manager to content type provider");

        // Create a new GraphQL schema based on the current state of known content types
        async fn rebuild(shared: &GraphQLSharedData, schema: &GraphQLSchemaHandle) {
            let content_types = shared.provider.all().await;
            match build_root_schema(&content_types, &shared.ctx, &shared.config) {
                Ok(new_schema) => *schema.lock().await = new_schema,
                Err(err) => warn!("Failed rebuilding GraphQL schema, keeping previous: {}", err),
            }
        }

        tokio::task::spawn(async move {
            loop {
                match on_content_type_changed.recv().await {
                    Ok(uid) => {
                        info!("Changed content type {}, rebuilding GraphQL API", uid);
                        rebuild(&shared, &schema).await;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        info!(
                            "Missed {} content type changes, rebuilding GraphQL API",
                            skipped
                        );
                        rebuild(&shared, &schema).await;
                    }
                    Err(RecvError::Closed) => {
                        debug!("Content type provider closed, stop rebuilding GraphQL API");
                        break;
                    }
                }
            }
        });
    }

    /// Returns the latest GraphQL schema.
    pub async fn current(&self) -> Schema {
        self.schema.lock().await.clone()
    }

    /// Executes an incoming GraphQL query.
    ///
    /// This method makes sure the GraphQL query will be executed by the latest given schema the
    /// manager knows about.
    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        self.current().await.execute(request).await
    }
}

impl std::fmt::Debug for GraphQLSchemaManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `schema` does not implement `Debug` but we can at least print the other fields
        f.debug_struct("GraphQLSchemaManager")
            .field("shared", &self.shared)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_graphql::{value, Value};
    use rstest::rstest;
    use serde_json::json;

    use crate::config::{AllowList, Configuration};
    use crate::content_type::{Attribute, AttributeType, ContentType, ContentTypeProvider};
    use crate::graphql::collaborators::BuilderContext;
    use crate::test_utils::{dish, execute, query_field_names, restaurant, MockBackend};

    use super::{build_root_schema, GraphQLSchemaManager};

    #[tokio::test]
    async fn executes_find_one() {
        let content_type = restaurant();
        let backend = Arc::new(MockBackend::with_all_actions(&content_type).with_response(
            "api::restaurant.restaurant.findOne",
            Ok(value!({ "id": "1", "name": "Luigi's", "stars": 4 })),
        ));
        let ctx = BuilderContext::new(backend.clone());
        let schema = build_root_schema(&[content_type], &ctx, &Configuration::default()).unwrap();

        let response = execute(
            &schema,
            r#"{ restaurant(id: { eq: "1" }) { data { id attributes { name stars } } } }"#,
        )
        .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data,
            value!({
                "restaurant": {
                    "data": { "id": "1", "attributes": { "name": "Luigi's", "stars": 4 } }
                }
            })
        );
        assert_eq!(
            backend.queries(),
            vec![(
                "api::restaurant.restaurant.findOne".to_owned(),
                value!({ "id": { "$eq": "1" } })
            )]
        );
    }

    #[tokio::test]
    async fn executes_find_many() {
        let content_type = restaurant();
        let backend = Arc::new(MockBackend::with_all_actions(&content_type).with_response(
            "api::restaurant.restaurant.find",
            Ok(value!([
                { "id": "1", "name": "Luigi's" },
                { "id": "2", "name": "Mario's" },
            ])),
        ));
        let ctx = BuilderContext::new(backend.clone());
        let schema = build_root_schema(&[content_type], &ctx, &Configuration::default()).unwrap();

        let response = execute(
            &schema,
            r#"{
                restaurants(filters: { stars: { gte: 4 } }) {
                    data { id attributes { name } }
                    meta { pagination { page pageSize } }
                }
            }"#,
        )
        .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({
                "restaurants": {
                    "data": [
                        { "id": "1", "attributes": { "name": "Luigi's" } },
                        { "id": "2", "attributes": { "name": "Mario's" } },
                    ],
                    "meta": { "pagination": { "page": null, "pageSize": null } },
                }
            })
        );

        let queries = backend.queries();
        assert_eq!(queries.len(), 1);
        match &queries[0].1 {
            Value::Object(query) => {
                assert_eq!(query.get("filters"), Some(&value!({ "stars": { "$gte": 4 } })));
            }
            query => panic!("Expected object query, got {}", query),
        }
    }

    #[rstest]
    #[case(&["findOne", "find"], &["restaurant", "restaurants"], &[])]
    #[case(&["findOne"], &["restaurant"], &["restaurants"])]
    #[case(&["find"], &["restaurants"], &["restaurant"])]
    #[case(&[], &[], &["restaurant", "restaurants"])]
    #[tokio::test]
    async fn fields_gated_by_actions(
        #[case] actions: &[&str],
        #[case] present: &[&str],
        #[case] absent: &[&str],
    ) {
        let backend = actions.iter().fold(MockBackend::new(), |backend, action| {
            backend.with_action(&format!("api::restaurant.restaurant.{}", action))
        });
        let ctx = BuilderContext::new(Arc::new(backend));
        let schema = build_root_schema(&[restaurant()], &ctx, &Configuration::default()).unwrap();

        let fields = query_field_names(&schema).await;
        assert!(fields.contains(&"ping".to_owned()));
        for name in present {
            assert!(fields.contains(&name.to_string()), "{} missing", name);
        }
        for name in absent {
            assert!(!fields.contains(&name.to_string()), "{} present", name);
        }
    }

    #[rstest]
    #[case("id")]
    #[case("and")]
    #[case("or")]
    #[case("not")]
    #[tokio::test]
    async fn reserved_attribute_names(#[case] attribute_name: &str) {
        let content_type = ContentType::new(
            "api::menu.menu",
            "menu",
            vec![
                (attribute_name, Attribute::new(AttributeType::Integer).unique()),
                ("code", Attribute::new(AttributeType::String).unique()),
            ],
        )
        .unwrap();
        let backend = Arc::new(
            MockBackend::with_all_actions(&content_type)
                .with_response(
                    "api::menu.menu.findOne",
                    Ok(value!({ "id": "7", "code": "lunch" })),
                )
                .with_response("api::menu.menu.find", Ok(value!([]))),
        );
        let ctx = BuilderContext::new(backend);
        let schema = build_root_schema(&[content_type], &ctx, &Configuration::default()).unwrap();

        let response = execute(
            &schema,
            r#"{ menu(id: { eq: "7" }) { data { id attributes { id code } } } }"#,
        )
        .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data,
            value!({
                "menu": { "data": { "id": "7", "attributes": { "id": "7", "code": "lunch" } } }
            })
        );

        let response = execute(
            &schema,
            r#"{
                menus(filters: { code: { eq: "lunch" }, not: { id: { eq: "1" } } }) {
                    data { id }
                }
            }"#,
        )
        .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(response.data, value!({ "menus": { "data": [] } }));
    }

    #[tokio::test]
    async fn backend_errors_reach_client() {
        let content_type = restaurant();
        let backend = Arc::new(MockBackend::with_all_actions(&content_type).with_response(
            "api::restaurant.restaurant.findOne",
            Err("Forbidden access".to_owned()),
        ));
        let ctx = BuilderContext::new(backend);
        let schema = build_root_schema(&[content_type], &ctx, &Configuration::default()).unwrap();

        let response = execute(
            &schema,
            r#"{ restaurant(id: { eq: "1" }) { data { id } } }"#,
        )
        .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Forbidden access");
        assert_eq!(response.data, Value::Null);
    }

    #[tokio::test]
    async fn ignores_unsupported_content_types() {
        let backend = Arc::new(
            MockBackend::with_all_actions(&restaurant()).with_content_type_actions(&dish()),
        );
        let ctx = BuilderContext::new(backend);
        let config = Configuration {
            supported_content_types: AllowList::Set(vec!["api::dish.dish".to_owned()]),
            ..Configuration::default()
        };
        let schema = build_root_schema(&[restaurant(), dish()], &ctx, &config).unwrap();

        let fields = query_field_names(&schema).await;
        assert!(fields.contains(&"dishes".to_owned()));
        assert!(!fields.contains(&"restaurants".to_owned()));
    }

    #[tokio::test]
    async fn applies_depth_limit() {
        let content_type = restaurant();
        let ctx = BuilderContext::new(Arc::new(MockBackend::with_all_actions(&content_type)));
        let config = Configuration {
            depth_limit: Some(2),
            ..Configuration::default()
        };
        let schema = build_root_schema(&[content_type], &ctx, &config).unwrap();

        let response = execute(
            &schema,
            r#"{ restaurant(id: { eq: "1" }) { data { attributes { name } } } }"#,
        )
        .await;
        assert!(!response.errors.is_empty());

        let response = execute(&schema, "{ ping }").await;
        assert_eq!(response.data, value!({ "ping": "pong" }));
    }

    #[tokio::test]
    async fn rebuilds_on_content_type_changes() {
        let backend = Arc::new(
            MockBackend::with_all_actions(&restaurant()).with_content_type_actions(&dish()),
        );
        let ctx = BuilderContext::new(backend);
        let provider = ContentTypeProvider::new(vec![restaurant()], AllowList::Wildcard);

        let manager =
            GraphQLSchemaManager::new(provider.clone(), ctx, Configuration::default())
                .await
                .unwrap();

        let fields = query_field_names(&manager.current().await).await;
        assert!(fields.contains(&"restaurants".to_owned()));
        assert!(!fields.contains(&"dishes".to_owned()));

        // Schema held by a running request stays untouched by rebuilds
        let previous = manager.current().await;

        provider.update(dish()).await.unwrap();

        let mut rebuilt = false;
        for _ in 0..50 {
            let fields = query_field_names(&manager.current().await).await;
            if fields.contains(&"dishes".to_owned()) {
                rebuilt = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        assert!(rebuilt, "GraphQL schema was not rebuilt");
        assert!(!query_field_names(&previous).await.contains(&"dishes".to_owned()));

        let response = manager.execute("{ ping }").await;
        assert_eq!(response.data, value!({ "ping": "pong" }));
    }
}
