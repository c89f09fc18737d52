// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::{Field, FieldFuture, Object, TypeRef};
use log::trace;

use crate::content_type::ContentType;
use crate::graphql::collaborators::BuilderContext;
use crate::graphql::constants::{ATTRIBUTES_FIELD, ID_FIELD, ID_SCALAR};
use crate::graphql::utils::resolve_from_parent;

fn parent_value_field(name: &str, type_ref: TypeRef) -> Field {
    Field::new(name, type_ref, |ctx| {
        FieldFuture::new(async move { Ok(resolve_from_parent(&ctx)) })
    })
}

/// Build the object holding the attribute values of an entry, named after the content type (for
/// example `Restaurant`).
///
/// Next to the `id` it contains a field for every scalar attribute with a known GraphQL scalar.
/// Values are read from the backend record passed down as parent value.
pub fn build_attributes_object(content_type: &ContentType, ctx: &BuilderContext) -> Object {
    let mut object = Object::new(ctx.naming.type_name(content_type))
        .field(parent_value_field(ID_FIELD, TypeRef::named(ID_SCALAR)));

    for (name, attribute) in content_type.attributes() {
        if !attribute.is_scalar() {
            continue;
        }

        // `id` is always present and can't be redefined by an attribute
        if name == ID_FIELD {
            trace!("Attribute {} of {} shadowed by entry id", name, content_type.uid());
            continue;
        }

        if let Some(scalar) = ctx.scalars.graphql_scalar(attribute.attribute_type()) {
            object = object.field(parent_value_field(name, TypeRef::named(scalar)));
        }
    }

    object.description(format!("Attributes of a `{}` entry.", content_type.model_name()))
}

/// Build the object separating the identity of an entry from its attributes, for example
/// `RestaurantEntity`.
pub fn build_entity_object(content_type: &ContentType, ctx: &BuilderContext) -> Object {
    Object::new(ctx.naming.entity_name(content_type))
        .field(parent_value_field(ID_FIELD, TypeRef::named(ID_SCALAR)))
        .field(parent_value_field(
            ATTRIBUTES_FIELD,
            TypeRef::named(ctx.naming.type_name(content_type)),
        ))
}
