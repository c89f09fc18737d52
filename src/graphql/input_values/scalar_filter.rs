// SPDX-License-Identifier: AGPL-3.0-or-later

//! GraphQL input objects used to filter by the value of a single scalar attribute.
use async_graphql::dynamic::{InputObject, InputValue, TypeRef};

use crate::graphql::constants::{FLAG_OPERATORS, LIST_OPERATORS, SCALAR_OPERATORS};

/// Build the filter input object for a GraphQL scalar.
///
/// The object is named `filter_input_name` (for example `StringFilterInput`) and contains every
/// comparison operator for values of `scalar` as well as `and`, `or` and `not` to combine them.
pub fn build_scalar_filter_input(filter_input_name: &str, scalar: &str) -> InputObject {
    let mut filter_input = InputObject::new(filter_input_name)
        .field(InputValue::new("and", TypeRef::named_list(filter_input_name)))
        .field(InputValue::new("or", TypeRef::named_list(filter_input_name)))
        .field(InputValue::new("not", TypeRef::named(filter_input_name)));

    for operator in SCALAR_OPERATORS {
        filter_input = filter_input.field(InputValue::new(operator, TypeRef::named(scalar)));
    }

    for operator in FLAG_OPERATORS {
        filter_input =
            filter_input.field(InputValue::new(operator, TypeRef::named(TypeRef::BOOLEAN)));
    }

    for operator in LIST_OPERATORS {
        filter_input = filter_input.field(InputValue::new(operator, TypeRef::named_list(scalar)));
    }

    filter_input.description(format!("Filter operators for `{}` values.", scalar))
}
