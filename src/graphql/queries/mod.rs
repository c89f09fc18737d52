// SPDX-License-Identifier: AGPL-3.0-or-later

//! Find-one and find-many query fields of collection types.
mod collection_type;
mod find_many;
mod find_one;
mod plan;
mod unique_attributes;

pub use collection_type::{build_collection_type_queries, plan_collection_type_queries};
pub use find_many::{entity_response_collection, plan_find_many, translate_find_many_args};
pub use find_one::{entity_response, plan_find_one, translate_find_one_args};
pub use plan::{
    register_field, ArgumentSpec, ArgumentType, FieldPlan, FieldResolver, QueryFieldSpec,
    QueryKind, SkipReason,
};
pub use unique_attributes::unique_attribute_filters;
