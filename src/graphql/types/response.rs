// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::{Field, FieldFuture, Object, TypeRef};

use crate::content_type::ContentType;
use crate::graphql::collaborators::BuilderContext;
use crate::graphql::constants::{DATA_FIELD, META_FIELD, RESPONSE_COLLECTION_META};
use crate::graphql::utils::resolve_from_parent;

/// Build the response object of find-one queries, for example `RestaurantEntityResponse`.
pub fn build_entity_response_object(content_type: &ContentType, ctx: &BuilderContext) -> Object {
    Object::new(ctx.naming.response_type_name(content_type)).field(Field::new(
        DATA_FIELD,
        TypeRef::named(ctx.naming.entity_name(content_type)),
        |ctx| FieldFuture::new(async move { Ok(resolve_from_parent(&ctx)) }),
    ))
}

/// Build the response object of find-many queries, for example
/// `RestaurantEntityResponseCollection`.
pub fn build_entity_response_collection_object(
    content_type: &ContentType,
    ctx: &BuilderContext,
) -> Object {
    Object::new(ctx.naming.response_collection_type_name(content_type))
        .field(Field::new(
            DATA_FIELD,
            TypeRef::named_nn_list_nn(ctx.naming.entity_name(content_type)),
            |ctx| FieldFuture::new(async move { Ok(resolve_from_parent(&ctx)) }),
        ))
        .field(Field::new(
            META_FIELD,
            TypeRef::named_nn(RESPONSE_COLLECTION_META),
            |ctx| FieldFuture::new(async move { Ok(resolve_from_parent(&ctx)) }),
        ))
}
