// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

use crate::api::account;
use crate::Str;


/// A response as returned by the /accounts/<account-number>/portfolio/
/// endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Portfolio {
  /// The URL of the account the portfolio belongs to.
  #[serde(rename = "account")]
  pub account: String,
  /// The date the account was opened.
  #[serde(rename = "start_date")]
  pub start_date: String,
  /// The current equity.
  #[serde(rename = "equity")]
  pub equity: String,
  /// The equity as of the previous close.
  #[serde(rename = "equity_previous_close")]
  pub equity_previous_close: String,
  /// The combined market value of all positions.
  #[serde(rename = "market_value")]
  pub market_value: String,
  /// The equity including after-hours price movements.
  #[serde(rename = "extended_hours_equity", default)]
  pub extended_hours_equity: Option<String>,
  /// The market value including after-hours price movements.
  #[serde(rename = "extended_hours_market_value", default)]
  pub extended_hours_market_value: Option<String>,
  /// Funds available for withdrawal.
  #[serde(rename = "withdrawable_amount", default)]
  pub withdrawable_amount: Option<String>,
  /// Funds excluded from withdrawal.
  #[serde(rename = "excess_margin", default)]
  pub excess_margin: Option<String>,
}


Endpoint! {
  /// The representation of a GET request to the
  /// /accounts/<account-number>/portfolio/ endpoint.
  pub Get(account::Number),
  Ok => Portfolio, [
    /// The portfolio was retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, [
    /// The account does not exist.
    /* 404 */ NOT_FOUND => NotFound,
  ]

  fn path(input: &Self::Input) -> Str {
    format!("/accounts/{}/portfolio/", input).into()
  }
}
