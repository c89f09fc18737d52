// SPDX-License-Identifier: AGPL-3.0-or-later

//! Content types describe entity kinds, their attributes and the uid under which backend actions
//! for them are registered.
mod attribute;
#[allow(clippy::module_inception)]
mod content_type;
mod provider;

pub use attribute::{Attribute, AttributeType};
pub use content_type::ContentType;
pub use provider::ContentTypeProvider;
