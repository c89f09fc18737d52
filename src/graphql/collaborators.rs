// SPDX-License-Identifier: AGPL-3.0-or-later

//! Interfaces to the services query fields are built from: naming, backend actions, scalar
//! mapping and filter translation.
use std::fmt;
use std::sync::Arc;

use async_graphql::{Result, Value};
use async_trait::async_trait;

use crate::content_type::{AttributeType, ContentType};
use crate::errors::FilterError;
use crate::graphql::filters::DefaultFilterTranslator;
use crate::graphql::naming::DefaultNaming;
use crate::graphql::scalars::ScalarTable;

/// Reference to a backend action bound to a content type, formatted `<uid>.<action>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolverOptions {
    resolver: String,
}

impl ResolverOptions {
    /// Returns the reference to `action` of the given content type.
    pub fn new(content_type: &ContentType, action: &str) -> Self {
        Self {
            resolver: format!("{}.{}", content_type.uid(), action),
        }
    }

    /// The full resolver reference string.
    pub fn resolver(&self) -> &str {
        &self.resolver
    }
}

impl fmt::Display for ResolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolver)
    }
}

/// Derives field and type names from a content type.
pub trait Naming: Send + Sync {
    /// Name of the GraphQL type holding the attributes, for example `Restaurant`.
    fn type_name(&self, content_type: &ContentType) -> String;

    /// Singular form of the model name, passed to the resolver factory.
    fn singular_model_name(&self, content_type: &ContentType) -> String;

    /// Plural form of the model name, passed to the resolver factory.
    fn plural_model_name(&self, content_type: &ContentType) -> String;

    /// Field name of the find-one query, for example `restaurant`.
    fn singular_entity_name(&self, content_type: &ContentType) -> String;

    /// Field name of the find-many query, for example `restaurants`.
    fn plural_entity_name(&self, content_type: &ContentType) -> String;

    /// Name of the type wrapping id and attributes, for example `RestaurantEntity`.
    fn entity_name(&self, content_type: &ContentType) -> String {
        format!("{}Entity", self.type_name(content_type))
    }

    /// Name of the find-one response type.
    fn response_type_name(&self, content_type: &ContentType) -> String {
        format!("{}Response", self.entity_name(content_type))
    }

    /// Name of the find-many response type.
    fn response_collection_type_name(&self, content_type: &ContentType) -> String {
        format!("{}ResponseCollection", self.entity_name(content_type))
    }

    /// Name of the input type accepted by the `filters` argument.
    fn filters_input_type_name(&self, content_type: &ContentType) -> String {
        format!("{}FiltersInput", self.type_name(content_type))
    }
}

/// Tells which backend actions exist.
pub trait ActionRegistry: Send + Sync {
    /// Returns true if the referenced action is available.
    fn action_exists(&self, options: &ResolverOptions) -> bool;
}

/// Backend call answering a query for one content type.
#[async_trait]
pub trait QueryResolver: Send + Sync {
    /// Executes the query and returns a record, a list of records or null.
    async fn resolve(&self, query: Value) -> Result<Value>;
}

/// Creates backend resolvers for content type actions.
pub trait ResolverFactory: Send + Sync {
    /// Returns the resolver of the referenced action for the given model name form.
    fn build_query(&self, model_name: &str, options: &ResolverOptions) -> Arc<dyn QueryResolver>;
}

/// Maps attribute types to GraphQL scalars and scalars to filter input types.
pub trait ScalarMapper: Send + Sync {
    /// Returns the GraphQL scalar of an attribute type, `None` if it is unknown.
    fn graphql_scalar(&self, attribute_type: &AttributeType) -> Option<String>;

    /// All scalars this mapper can return, without duplicates.
    fn scalars(&self) -> Vec<String>;

    /// Name of the filter input type for a GraphQL scalar, for example `StringFilterInput`.
    fn filter_input_type_name(&self, scalar: &str) -> String {
        format!("{}{}", scalar, crate::graphql::constants::FILTER_INPUT_SUFFIX)
    }
}

/// Converts GraphQL filter arguments into the filter representation of the backend.
pub trait FilterTranslator: Send + Sync {
    /// Translates `filters` given for `content_type`.
    fn translate(&self, filters: &Value, content_type: &ContentType)
        -> Result<Value, FilterError>;
}

/// Services needed to build query fields for content types.
#[derive(Clone)]
pub struct BuilderContext {
    pub(crate) naming: Arc<dyn Naming>,
    pub(crate) actions: Arc<dyn ActionRegistry>,
    pub(crate) resolvers: Arc<dyn ResolverFactory>,
    pub(crate) scalars: Arc<dyn ScalarMapper>,
    pub(crate) filters: Arc<dyn FilterTranslator>,
}

impl BuilderContext {
    /// Returns a context using `backend` for action lookups and resolvers and the default naming,
    /// scalar table and filter translator.
    pub fn new<B>(backend: Arc<B>) -> Self
    where
        B: ActionRegistry + ResolverFactory + 'static,
    {
        Self {
            naming: Arc::new(DefaultNaming),
            actions: backend.clone(),
            resolvers: backend,
            scalars: Arc::new(ScalarTable::default()),
            filters: Arc::new(DefaultFilterTranslator),
        }
    }

    /// Replaces the naming service.
    pub fn with_naming(mut self, naming: Arc<dyn Naming>) -> Self {
        self.naming = naming;
        self
    }

    /// Replaces the scalar mapper.
    pub fn with_scalars(mut self, scalars: Arc<dyn ScalarMapper>) -> Self {
        self.scalars = scalars;
        self
    }

    /// Replaces the filter translator.
    pub fn with_filter_translator(mut self, filters: Arc<dyn FilterTranslator>) -> Self {
        self.filters = filters;
        self
    }
}

impl fmt::Debug for BuilderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Trait objects don't implement `Debug`, we can at least print the known scalars
        f.debug_struct("BuilderContext")
            .field("scalars", &self.scalars.scalars())
            .finish()
    }
}
