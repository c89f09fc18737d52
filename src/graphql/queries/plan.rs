// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;
use std::sync::Arc;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, Object, TypeRef};
use async_graphql::indexmap::IndexMap;
use async_graphql::{Name, Result, Value};
use log::debug;

use crate::content_type::ContentType;
use crate::graphql::collaborators::{FilterTranslator, QueryResolver, ResolverOptions};
use crate::graphql::queries::find_many::resolve_find_many;
use crate::graphql::queries::find_one::resolve_find_one;
use crate::graphql::utils::field_arguments;

/// Outcome of planning a query field for a content type.
#[derive(Debug)]
pub enum FieldPlan {
    /// The field is left out of the schema.
    Skip(SkipReason),

    /// The field gets registered.
    Register(QueryFieldSpec),
}

impl FieldPlan {
    /// Returns the query field if it gets registered.
    pub fn field(&self) -> Option<&QueryFieldSpec> {
        match self {
            FieldPlan::Register(query_field) => Some(query_field),
            FieldPlan::Skip(_) => None,
        }
    }
}

/// Why a query field is not registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The backend action the field would delegate to does not exist.
    MissingAction {
        /// Name the field would have had.
        field: String,

        /// Reference of the missing action.
        resolver: ResolverOptions,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAction { field, resolver } => {
                write!(f, "action {} for field {} does not exist", resolver, field)
            }
        }
    }
}

/// Type of a query field argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentType {
    /// Single value of the named type.
    Named(String),

    /// List of values of the named type.
    List(String),
}

impl From<&ArgumentType> for TypeRef {
    fn from(argument_type: &ArgumentType) -> Self {
        match argument_type {
            ArgumentType::Named(name) => TypeRef::named(name),
            ArgumentType::List(name) => TypeRef::named_list(name),
        }
    }
}

/// Argument of a query field.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentSpec {
    /// Type of the argument.
    pub argument_type: ArgumentType,

    /// Value used when the argument is not passed.
    pub default_value: Option<Value>,
}

impl ArgumentSpec {
    /// Argument of a single value of the named type, without default.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            argument_type: ArgumentType::Named(type_name.into()),
            default_value: None,
        }
    }

    /// Argument of a list of values of the named type, without default.
    pub fn list(type_name: impl Into<String>) -> Self {
        Self {
            argument_type: ArgumentType::List(type_name.into()),
            default_value: None,
        }
    }

    /// Sets the value used when the argument is not passed.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Kind of a query field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    /// Resolves a single entry.
    FindOne,

    /// Resolves a collection of entries.
    FindMany,
}

/// Resolves a query field by delegating to the backend and wrapping its result in a response
/// envelope.
#[derive(Clone)]
pub struct FieldResolver {
    pub(crate) kind: QueryKind,
    pub(crate) content_type: ContentType,
    pub(crate) options: ResolverOptions,
    pub(crate) backend: Arc<dyn QueryResolver>,
    pub(crate) filters: Arc<dyn FilterTranslator>,
}

impl FieldResolver {
    /// Resolve the field for the given arguments.
    ///
    /// Errors of the backend are returned as they are.
    pub async fn resolve(&self, args: IndexMap<Name, Value>) -> Result<Value> {
        match self.kind {
            QueryKind::FindOne => resolve_find_one(self, args).await,
            QueryKind::FindMany => resolve_find_many(self, args).await,
        }
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldResolver")
            .field("kind", &self.kind)
            .field("content_type", &self.content_type.uid())
            .field("options", &self.options)
            .finish()
    }
}

/// A query field ready to be registered on the root query object.
///
/// Specs are immutable once built and can be shared by all concurrent resolutions.
#[derive(Clone, Debug)]
pub struct QueryFieldSpec {
    /// Name of the query field.
    pub name: String,

    /// Name of the returned type.
    pub return_type_name: String,

    /// Arguments in the order they appear in the schema.
    pub args: IndexMap<String, ArgumentSpec>,

    /// Resolution logic of the field.
    pub resolver: FieldResolver,
}

impl QueryFieldSpec {
    /// Kind of this query field.
    pub fn kind(&self) -> QueryKind {
        self.resolver.kind
    }

    /// Resolve this field for the given arguments.
    pub async fn resolve(&self, args: IndexMap<Name, Value>) -> Result<Value> {
        self.resolver.resolve(args).await
    }
}

/// Adds the field described by `query_field` to the passed root query object.
pub fn register_field(query: Object, query_field: QueryFieldSpec) -> Object {
    let QueryFieldSpec {
        name,
        return_type_name,
        args,
        resolver,
    } = query_field;

    let field_name = name.clone();
    let mut field = Field::new(name, TypeRef::named(return_type_name), move |ctx| {
        let resolver = resolver.clone();
        debug!("Query to {} received", field_name);

        FieldFuture::new(async move {
            let args = field_arguments(&ctx)?;
            let envelope = resolver.resolve(args).await?;
            Ok(Some(FieldValue::value(envelope)))
        })
    });

    for (name, argument) in args {
        let mut input_value = InputValue::new(name, TypeRef::from(&argument.argument_type));
        if let Some(default_value) = argument.default_value {
            input_value = input_value.default_value(default_value);
        }
        field = field.argument(input_value);
    }

    query.field(field)
}
