// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::indexmap::IndexMap;
use async_graphql::{Name, Result, Value};
use log::{debug, trace};

use crate::content_type::ContentType;
use crate::errors::FilterError;
use crate::graphql::collaborators::{BuilderContext, FilterTranslator, ResolverOptions};
use crate::graphql::constants::{
    ATTRIBUTES_FIELD, DATA_FIELD, FIND_ONE_ACTION, ID_ARG, ID_FIELD, ID_SCALAR, LOGICAL_OPERATORS,
};
use crate::graphql::queries::plan::{
    ArgumentSpec, FieldPlan, FieldResolver, QueryFieldSpec, QueryKind, SkipReason,
};
use crate::graphql::queries::unique_attributes::unique_attribute_filters;
use crate::graphql::utils::{object, record_id};

/// Plans the query for getting a single entry of a content type, filtered by its id or any of its
/// unique scalar attributes.
///
/// The query follows the format `<singular name>(id: .., <unique attribute>: ..)` and is skipped
/// when the backend has no `<uid>.findOne` action.
pub fn plan_find_one(content_type: &ContentType, ctx: &BuilderContext) -> FieldPlan {
    let name = ctx.naming.singular_entity_name(content_type);
    let return_type_name = ctx.naming.response_type_name(content_type);
    let options = ResolverOptions::new(content_type, FIND_ONE_ACTION);

    if !ctx.actions.action_exists(&options) {
        return FieldPlan::Skip(SkipReason::MissingAction {
            field: name,
            resolver: options,
        });
    }

    let backend = ctx
        .resolvers
        .build_query(&ctx.naming.singular_model_name(content_type), &options);

    // Only unique attributes identify a single entry, `id` always does and can't be replaced.
    // Attributes named like logical operators would be read as such by the filter translator.
    let mut args = IndexMap::new();
    args.insert(
        ID_ARG.to_owned(),
        ArgumentSpec::named(ctx.scalars.filter_input_type_name(ID_SCALAR)),
    );
    for (attribute_name, filter_type_name) in
        unique_attribute_filters(content_type.attributes(), ctx.scalars.as_ref())
    {
        if attribute_name == ID_ARG || LOGICAL_OPERATORS.contains(&attribute_name.as_str()) {
            trace!("Unique attribute {} can't be used as argument", attribute_name);
            continue;
        }
        args.insert(attribute_name, ArgumentSpec::named(filter_type_name));
    }

    FieldPlan::Register(QueryFieldSpec {
        name,
        return_type_name,
        args,
        resolver: FieldResolver {
            kind: QueryKind::FindOne,
            content_type: content_type.clone(),
            options,
            backend,
            filters: ctx.filters.clone(),
        },
    })
}

/// Translate all arguments of a find-one query into a backend query.
pub fn translate_find_one_args(
    args: IndexMap<Name, Value>,
    content_type: &ContentType,
    filters: &dyn FilterTranslator,
) -> Result<Value, FilterError> {
    filters.translate(&Value::Object(args), content_type)
}

/// Wrap a single backend record into a response envelope.
///
/// An absent record (null) is wrapped as well, resulting in null `id` and `attributes`.
pub fn entity_response(record: Value) -> Value {
    let id = record_id(&record);
    object([(
        DATA_FIELD,
        object([(ID_FIELD, id), (ATTRIBUTES_FIELD, record)]),
    )])
}

pub(crate) async fn resolve_find_one(
    resolver: &FieldResolver,
    args: IndexMap<Name, Value>,
) -> Result<Value> {
    let query = translate_find_one_args(args, &resolver.content_type, resolver.filters.as_ref())?;
    debug!("Resolving {} with {}", resolver.options, query);

    let record = resolver.backend.resolve(query).await?;
    Ok(entity_response(record))
}
