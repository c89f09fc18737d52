// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::dynamic::{InputObject, InputValue, TypeRef};
use log::trace;

use crate::content_type::ContentType;
use crate::graphql::collaborators::BuilderContext;
use crate::graphql::constants::{ID_ARG, ID_SCALAR, LOGICAL_OPERATORS};

/// Build the filter input object for a content type. It is accepted by the `filters` argument of
/// find-many queries.
///
/// Every scalar attribute with a known GraphQL scalar can be filtered with the filter input of
/// that scalar, `and`, `or` and `not` combine filters of the same content type. Attributes without
/// a known scalar and attributes named like one of the fixed fields are left out.
pub fn build_filters_input_object(content_type: &ContentType, ctx: &BuilderContext) -> InputObject {
    let filters_name = ctx.naming.filters_input_type_name(content_type);

    let mut filters_input = InputObject::new(&filters_name).field(InputValue::new(
        ID_ARG,
        TypeRef::named(ctx.scalars.filter_input_type_name(ID_SCALAR)),
    ));

    for (name, attribute) in content_type.attributes() {
        if !attribute.is_scalar() {
            continue;
        }

        if name == ID_ARG || LOGICAL_OPERATORS.contains(&name.as_str()) {
            trace!(
                "Attribute {} of {} collides with a reserved filter",
                name,
                content_type.uid()
            );
            continue;
        }

        match ctx.scalars.graphql_scalar(attribute.attribute_type()) {
            Some(scalar) => {
                filters_input = filters_input.field(InputValue::new(
                    name,
                    TypeRef::named(ctx.scalars.filter_input_type_name(&scalar)),
                ));
            }
            None => trace!(
                "No filter for attribute {} of type {}",
                name,
                attribute.attribute_type()
            ),
        }
    }

    filters_input
        .field(InputValue::new("and", TypeRef::named_list(&filters_name)))
        .field(InputValue::new("or", TypeRef::named_list(&filters_name)))
        .field(InputValue::new("not", TypeRef::named(&filters_name)))
        .description(format!(
            "Filters applicable to a collection of `{}` entries.",
            content_type.model_name()
        ))
}
