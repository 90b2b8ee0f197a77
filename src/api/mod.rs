// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

/// Definitions pertaining the user's accounts.
pub mod account;
/// Definitions surrounding authentication.
pub mod auth;
/// Definitions surrounding orders.
pub mod order;
/// Functionality for listing recent orders.
pub mod orders;
/// Definitions pertaining the account portfolio.
pub mod portfolio;
/// Definitions surrounding a single position.
pub mod position;
/// Functionality for listing positions.
pub mod positions;
/// Definitions pertaining the user's profile.
pub mod user;

/// The base URL of the API.
pub(crate) const API_BASE_URL: &str = "https://api.robinhood.com";


/// A list of objects as returned by listing endpoints.
///
/// `next` and `previous` are cursor URLs for adjacent pages, if any.
/// Following them is left to the user.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Page<T> {
  /// The URL of the next page.
  #[serde(rename = "next", default)]
  pub next: Option<String>,
  /// The URL of the previous page.
  #[serde(rename = "previous", default)]
  pub previous: Option<String>,
  /// The objects on this page.
  #[serde(rename = "results")]
  pub results: Vec<T>,
}
