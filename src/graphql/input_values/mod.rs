// SPDX-License-Identifier: AGPL-3.0-or-later

//! Input types accepted by the arguments of query fields.
mod filters_input;
mod publication_state;
mod scalar_filter;

pub use filters_input::build_filters_input_object;
pub use publication_state::PublicationState;
pub use scalar_filter::build_scalar_filter_input;
