// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::indexmap::IndexMap;
use log::trace;

use crate::content_type::Attribute;
use crate::graphql::collaborators::ScalarMapper;

/// Select the attributes which can identify a single entry and map each to its filter input type.
///
/// Only scalar attributes marked unique are kept, in declaration order. Attributes whose type has
/// no GraphQL scalar are left out.
pub fn unique_attribute_filters(
    attributes: &IndexMap<String, Attribute>,
    scalars: &dyn ScalarMapper,
) -> IndexMap<String, String> {
    attributes
        .iter()
        .filter(|(_, attribute)| attribute.is_scalar() && attribute.is_unique())
        .filter_map(|(name, attribute)| {
            match scalars.graphql_scalar(attribute.attribute_type()) {
                Some(scalar) => Some((name.to_owned(), scalars.filter_input_type_name(&scalar))),
                None => {
                    trace!(
                        "Unique attribute {} of type {} has no GraphQL scalar",
                        name,
                        attribute.attribute_type()
                    );
                    None
                }
            }
        })
        .collect()
}
