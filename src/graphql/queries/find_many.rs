// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::indexmap::IndexMap;
use async_graphql::{Name, Result, Value};
use log::debug;

use crate::content_type::ContentType;
use crate::errors::{FilterError, ResponseError};
use crate::graphql::collaborators::{BuilderContext, FilterTranslator, ResolverOptions};
use crate::graphql::constants::{
    ATTRIBUTES_FIELD, DATA_FIELD, DEFAULT_PUBLICATION_STATE, FILTERS_ARG, FIND_ACTION, ID_FIELD,
    LOCALE_ARG, META_FIELD, PAGINATION_FIELD, PUBLICATION_STATE, PUBLICATION_STATE_ARG,
    SORT_ARG,
};
use crate::graphql::queries::plan::{
    ArgumentSpec, FieldPlan, FieldResolver, QueryFieldSpec, QueryKind, SkipReason,
};
use crate::graphql::utils::{object, record_id};

/// Plans the query for getting a collection of entries of a content type.
///
/// The query follows the format `<plural name>(publicationState: .., locale: .., sort: ..,
/// filters: ..)` and is skipped when the backend has no `<uid>.find` action.
pub fn plan_find_many(content_type: &ContentType, ctx: &BuilderContext) -> FieldPlan {
    let name = ctx.naming.plural_entity_name(content_type);
    let return_type_name = ctx.naming.response_collection_type_name(content_type);
    let options = ResolverOptions::new(content_type, FIND_ACTION);

    if !ctx.actions.action_exists(&options) {
        return FieldPlan::Skip(SkipReason::MissingAction {
            field: name,
            resolver: options,
        });
    }

    let backend = ctx
        .resolvers
        .build_query(&ctx.naming.plural_model_name(content_type), &options);

    let mut args = IndexMap::new();
    args.insert(
        PUBLICATION_STATE_ARG.to_owned(),
        ArgumentSpec::named(PUBLICATION_STATE)
            .default_value(Value::Enum(Name::new(DEFAULT_PUBLICATION_STATE))),
    );
    args.insert(LOCALE_ARG.to_owned(), ArgumentSpec::named("String"));
    args.insert(
        SORT_ARG.to_owned(),
        ArgumentSpec::list("String").default_value(Value::List(vec![])),
    );
    args.insert(
        FILTERS_ARG.to_owned(),
        ArgumentSpec::named(ctx.naming.filters_input_type_name(content_type)),
    );

    FieldPlan::Register(QueryFieldSpec {
        name,
        return_type_name,
        args,
        resolver: FieldResolver {
            kind: QueryKind::FindMany,
            content_type: content_type.clone(),
            options,
            backend,
            filters: ctx.filters.clone(),
        },
    })
}

/// Returns the arguments of a find-many query with its `filters` translated into a backend query.
///
/// Missing filters are translated as well, all other arguments are passed on unchanged.
pub fn translate_find_many_args(
    args: &IndexMap<Name, Value>,
    content_type: &ContentType,
    filters: &dyn FilterTranslator,
) -> Result<IndexMap<Name, Value>, FilterError> {
    let given = args.get(FILTERS_ARG).unwrap_or(&Value::Null);
    let translated = filters.translate(given, content_type)?;

    let mut query = args.clone();
    query.insert(Name::new(FILTERS_ARG), translated);
    Ok(query)
}

/// Wrap a list of backend records into a collection response envelope.
///
/// Returns `None` if the records are not a list.
pub fn entity_response_collection(records: Value) -> Option<Value> {
    let records = match records {
        Value::List(records) => records,
        _ => return None,
    };

    let data = records
        .into_iter()
        .map(|record| {
            let id = record_id(&record);
            object([(ID_FIELD, id), (ATTRIBUTES_FIELD, record)])
        })
        .collect();

    Some(object([
        (DATA_FIELD, Value::List(data)),
        (
            META_FIELD,
            object([(PAGINATION_FIELD, Value::Object(IndexMap::new()))]),
        ),
    ]))
}

pub(crate) async fn resolve_find_many(
    resolver: &FieldResolver,
    args: IndexMap<Name, Value>,
) -> Result<Value> {
    let query = Value::Object(translate_find_many_args(
        &args,
        &resolver.content_type,
        resolver.filters.as_ref(),
    )?);
    debug!("Resolving {} with {}", resolver.options, query);

    let records = resolver.backend.resolve(query).await?;
    let envelope = entity_response_collection(records)
        .ok_or_else(|| ResponseError::ExpectedList(resolver.options.to_string()))?;
    Ok(envelope)
}
