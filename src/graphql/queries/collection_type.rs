// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::Object;
use log::debug;

use crate::content_type::ContentType;
use crate::graphql::collaborators::BuilderContext;
use crate::graphql::queries::find_many::plan_find_many;
use crate::graphql::queries::find_one::plan_find_one;
use crate::graphql::queries::plan::{register_field, FieldPlan};

/// Plans the find-one and find-many queries of a collection type, in this order.
///
/// Planning has no side effects apart from requesting resolvers from the backend, calling it
/// twice for the same content type results in equal plans.
pub fn plan_collection_type_queries(
    content_type: &ContentType,
    ctx: &BuilderContext,
) -> Vec<FieldPlan> {
    vec![
        plan_find_one(content_type, ctx),
        plan_find_many(content_type, ctx),
    ]
}

/// Adds the query fields of a collection type to the root query object.
///
/// Fields whose backend action does not exist are left out.
pub fn build_collection_type_queries(
    query: Object,
    content_type: &ContentType,
    ctx: &BuilderContext,
) -> Object {
    plan_collection_type_queries(content_type, ctx)
        .into_iter()
        .fold(query, |query, plan| match plan {
            FieldPlan::Register(query_field) => register_field(query, query_field),
            FieldPlan::Skip(reason) => {
                debug!("Skipping query of {}: {}", content_type.uid(), reason);
                query
            }
        })
}
