// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::{Field, FieldFuture, Object, TypeRef};

use crate::graphql::constants::{
    PAGINATION, PAGINATION_FIELD, PAGINATION_FIELDS, RESPONSE_COLLECTION_META,
};
use crate::graphql::utils::resolve_from_parent;

/// Build the object describing the page of a collection response.
///
/// All fields are nullable, they resolve to null as long as the backend doesn't report pagination
/// details.
pub fn build_pagination_object() -> Object {
    PAGINATION_FIELDS
        .iter()
        .fold(Object::new(PAGINATION), |object, name| {
            object.field(Field::new(*name, TypeRef::named(TypeRef::INT), |ctx| {
                FieldFuture::new(async move { Ok(resolve_from_parent(&ctx)) })
            }))
        })
}

/// Build the meta object of collection responses.
pub fn build_response_collection_meta_object() -> Object {
    Object::new(RESPONSE_COLLECTION_META).field(Field::new(
        PAGINATION_FIELD,
        TypeRef::named_nn(PAGINATION),
        |ctx| FieldFuture::new(async move { Ok(resolve_from_parent(&ctx)) }),
    ))
}
