// SPDX-License-Identifier: AGPL-3.0-or-later

//! # content_graphql
//!
//! Generates "find one" and "find many" GraphQL query fields for content types at runtime and
//! wires them to a backend query layer.
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod config;
pub mod content_type;
mod errors;
pub mod graphql;

#[cfg(test)]
mod test_utils;

pub use crate::config::{AllowList, Configuration};
pub use crate::errors::{ContentTypeError, FilterError, ResponseError, SchemaBuildError};
