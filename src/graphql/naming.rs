// SPDX-License-Identifier: AGPL-3.0-or-later

use inflector::Inflector;

use crate::content_type::ContentType;
use crate::graphql::collaborators::Naming;

/// Derives names from the model name of a content type.
///
/// A model `restaurant` results in the type `Restaurant`, the find-one field `restaurant` and the
/// find-many field `restaurants`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNaming;

impl Naming for DefaultNaming {
    fn type_name(&self, content_type: &ContentType) -> String {
        self.singular_model_name(content_type).to_pascal_case()
    }

    fn singular_model_name(&self, content_type: &ContentType) -> String {
        content_type.model_name().to_singular()
    }

    fn plural_model_name(&self, content_type: &ContentType) -> String {
        content_type.model_name().to_singular().to_plural()
    }

    fn singular_entity_name(&self, content_type: &ContentType) -> String {
        self.singular_model_name(content_type).to_camel_case()
    }

    fn plural_entity_name(&self, content_type: &ContentType) -> String {
        self.plural_model_name(content_type).to_camel_case()
    }
}
