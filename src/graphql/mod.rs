// SPDX-License-Identifier: AGPL-3.0-or-later

//! Dynamic GraphQL schema exposing find-one and find-many queries for every content type.
pub mod collaborators;
pub mod constants;
mod filters;
pub mod input_values;
mod naming;
pub mod queries;
mod scalars;
mod schema;
pub mod types;
mod utils;

pub use collaborators::{
    ActionRegistry, BuilderContext, FilterTranslator, Naming, QueryResolver, ResolverFactory,
    ResolverOptions, ScalarMapper,
};
pub use filters::DefaultFilterTranslator;
pub use naming::DefaultNaming;
pub use queries::{build_collection_type_queries, plan_collection_type_queries};
pub use scalars::{ScalarTable, BUILT_IN_SCALARS};
pub use schema::{build_root_schema, GraphQLSchemaManager};
