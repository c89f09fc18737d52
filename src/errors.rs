// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

/// Errors which can occur when constructing a content type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentTypeError {
    /// Uid is empty or contains whitespace.
    #[error("invalid content type uid '{0}'")]
    InvalidUid(String),

    /// Model name is empty.
    #[error("content type '{0}' has an empty model name")]
    EmptyModelName(String),
}

/// Filter arguments which can not be translated into a backend query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Filter references a field which is neither an attribute nor a logical operator.
    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    /// Operator object contains an unsupported operator.
    #[error("unknown filter operator '{0}'")]
    UnknownOperator(String),

    /// A value was given where an object of operators was expected.
    #[error("expected filter operators for '{0}'")]
    ExpectedOperators(String),
}

/// Backend results which can not be shaped into a response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// Find-many resolvers have to return a list of records.
    #[error("expected a list of records from resolver '{0}'")]
    ExpectedList(String),
}

/// Errors from assembling the root GraphQL schema.
#[derive(Error, Debug)]
pub enum SchemaBuildError {
    /// The dynamic schema failed validation.
    #[error(transparent)]
    Schema(#[from] async_graphql::dynamic::SchemaError),
}
