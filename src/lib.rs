// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(clippy::unreadable_literal)]
#![warn(
  bad_style,
  dead_code,
  future_incompatible,
  improper_ctypes,
  late_bound_lifetime_arguments,
  missing_copy_implementations,
  missing_debug_implementations,
  missing_docs,
  no_mangle_generic_items,
  non_shorthand_field_patterns,
  nonstandard_style,
  overflowing_literals,
  path_statements,
  patterns_in_fns_without_body,
  proc_macro_derive_resolution_fallback,
  renamed_and_removed_lints,
  rust_2018_compatibility,
  rust_2018_idioms,
  stable_features,
  trivial_bounds,
  trivial_numeric_casts,
  type_alias_bounds,
  tyvar_behind_raw_pointer,
  unconditional_recursion,
  unreachable_code,
  unreachable_patterns,
  unstable_features,
  unstable_name_collisions,
  unused,
  unused_comparisons,
  unused_import_braces,
  unused_lifetimes,
  unused_qualifications,
  unused_results,
  while_true,
  rustdoc::broken_intra_doc_links
)]

//! A crate for interacting with the Robinhood REST API.
//!
//! All remote operations are modeled as [`Endpoint`] types that are
//! issued through a [`Client`]. Authenticated endpoints live in the
//! [`api`] module, public market data endpoints in [`data`].

#[macro_use]
mod endpoint;

/// A module comprising the functionality backing interactions with the
/// trading and account parts of the API.
pub mod api;

/// A module for retrieving publicly available market data.
pub mod data;

mod api_info;
mod client;
mod credentials;
mod error;
mod transport;
mod util;

#[cfg(test)]
mod mock;

use std::borrow::Cow;

pub use crate::api_info::ApiInfo;
pub use crate::client::Builder;
pub use crate::client::Client;
pub use crate::credentials::Credentials;
pub use crate::credentials::Fixed;
pub use crate::credentials::Prompt;
pub use crate::endpoint::ApiError;
pub use crate::endpoint::ConversionError;
pub use crate::endpoint::Endpoint;
pub use crate::error::Error;
pub use crate::error::HttpBody;
pub use crate::error::RequestError;
pub use crate::transport::HyperTransport;
pub use crate::transport::Transport;
pub use crate::transport::TransportError;

type Str = Cow<'static, str>;
