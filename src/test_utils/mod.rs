// SPDX-License-Identifier: AGPL-3.0-or-later

mod backend;
mod client;
mod helpers;

pub use backend::MockBackend;
pub use client::{execute, query_field_names};
pub use helpers::{args, dish, restaurant};
