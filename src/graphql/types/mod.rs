// SPDX-License-Identifier: AGPL-3.0-or-later

//! Output types of the query fields: entities and the response envelopes wrapping them.
mod entity;
mod pagination;
mod response;

pub use entity::{build_attributes_object, build_entity_object};
pub use pagination::{build_pagination_object, build_response_collection_meta_object};
pub use response::{build_entity_response_collection_object, build_entity_response_object};
