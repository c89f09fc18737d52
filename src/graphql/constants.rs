// SPDX-License-Identifier: AGPL-3.0-or-later

//! String identifiers for GraphQL types registered to the root schema as well as fixed query,
//! field and argument names.

// Type identifiers.

/// Name of the root query object.
pub const QUERY: &str = "Query";

/// GraphQL scalar used for entity ids.
pub const ID_SCALAR: &str = "ID";

/// GraphQL object holding pagination details of a collection response.
pub const PAGINATION: &str = "Pagination";

/// GraphQL object holding meta data of a collection response.
pub const RESPONSE_COLLECTION_META: &str = "ResponseCollectionMeta";

/// GraphQL enum selecting published or draft entries.
pub const PUBLICATION_STATE: &str = "PublicationState";

/// Suffix of a per-scalar filter input type, for example `StringFilterInput`.
pub const FILTER_INPUT_SUFFIX: &str = "FilterInput";

// Backend action names.

/// Action resolving a single entity.
pub const FIND_ONE_ACTION: &str = "findOne";

/// Action resolving a list of entities.
pub const FIND_ACTION: &str = "find";

// Argument names.

/// Argument filtering a find-one query by id.
pub const ID_ARG: &str = "id";

/// Argument selecting the publication state of a find-many query.
pub const PUBLICATION_STATE_ARG: &str = "publicationState";

/// Argument selecting the locale of a find-many query.
pub const LOCALE_ARG: &str = "locale";

/// Argument passing sort instructions to a find-many query.
pub const SORT_ARG: &str = "sort";

/// Argument passing filters to a find-many query.
pub const FILTERS_ARG: &str = "filters";

/// Publication state used when none was passed.
pub const DEFAULT_PUBLICATION_STATE: &str = "LIVE";

// Field names of response envelopes.

/// Field holding the payload of a response.
pub const DATA_FIELD: &str = "data";

/// Field holding meta data of a collection response.
pub const META_FIELD: &str = "meta";

/// Field holding pagination details.
pub const PAGINATION_FIELD: &str = "pagination";

/// Field holding the id of an entity.
pub const ID_FIELD: &str = "id";

/// Field holding the attributes of an entity.
pub const ATTRIBUTES_FIELD: &str = "attributes";

/// Fields of the pagination object.
pub const PAGINATION_FIELDS: [&str; 4] = ["total", "page", "pageSize", "pageCount"];

// Filter operators.

/// Logical operators combining filters.
pub const LOGICAL_OPERATORS: [&str; 3] = ["and", "or", "not"];

/// Comparison operators taking a single scalar value.
pub const SCALAR_OPERATORS: [&str; 13] = [
    "eq",
    "eqi",
    "ne",
    "startsWith",
    "endsWith",
    "contains",
    "notContains",
    "containsi",
    "notContainsi",
    "gt",
    "gte",
    "lt",
    "lte",
];

/// Comparison operators taking a boolean flag.
pub const FLAG_OPERATORS: [&str; 2] = ["null", "notNull"];

/// Comparison operators taking a list of scalar values.
pub const LIST_OPERATORS: [&str; 3] = ["in", "notIn", "between"];
