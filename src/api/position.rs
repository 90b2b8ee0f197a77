// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::DateTime;
use chrono::Utc;

use serde::Deserialize;

use crate::api::account;
use crate::data::instruments;
use crate::Str;


/// A single position in an instrument.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Position {
  /// The URL of the account holding the position.
  #[serde(rename = "account")]
  pub account: String,
  /// The URL of the instrument the position is in.
  #[serde(rename = "instrument")]
  pub instrument: String,
  /// The URL of the position itself.
  #[serde(rename = "url")]
  pub url: String,
  /// The number of shares held.
  #[serde(rename = "quantity")]
  pub quantity: String,
  /// The average price shares were bought at.
  #[serde(rename = "average_buy_price")]
  pub average_buy_price: String,
  /// Shares reserved for pending sell orders.
  #[serde(rename = "shares_held_for_sells", default)]
  pub shares_held_for_sells: Option<String>,
  /// Shares reserved for pending buy orders.
  #[serde(rename = "shares_held_for_buys", default)]
  pub shares_held_for_buys: Option<String>,
  /// Number of shares bought today.
  #[serde(rename = "intraday_quantity", default)]
  pub intraday_quantity: Option<String>,
  /// The average price of today's buys.
  #[serde(rename = "intraday_average_buy_price", default)]
  pub intraday_average_buy_price: Option<String>,
  /// Timestamp this position was created at.
  #[serde(rename = "created_at")]
  pub created_at: DateTime<Utc>,
  /// Timestamp this position was updated at last.
  #[serde(rename = "updated_at")]
  pub updated_at: DateTime<Utc>,
}


Endpoint! {
  /// The representation of a GET request to the
  /// /accounts/<account-number>/positions/<instrument-id>/ endpoint.
  pub Get((account::Number, instruments::Id)),
  Ok => Position, [
    /// The position was retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, [
    /// No position exists for the given account and instrument.
    /* 404 */ NOT_FOUND => NotFound,
  ]

  fn path(input: &Self::Input) -> Str {
    let (account, instrument) = input;
    format!("/accounts/{}/positions/{}/", account, instrument.as_hyphenated()).into()
  }
}
