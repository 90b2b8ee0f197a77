// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::DateTime;
use chrono::Utc;

use serde::Deserialize;

use crate::api::Page;
use crate::endpoint::ConversionError;
use crate::util::comma_separated_query;
use crate::Str;


/// A GET request to be made to the /quotes/ endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetReq {
  /// The symbols to retrieve quotes for.
  pub symbols: Vec<String>,
}

impl GetReq {
  /// Create a request for quotes of the given symbols.
  pub fn new<I, S>(symbols: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      symbols: symbols.into_iter().map(S::into).collect(),
    }
  }
}


/// A quote as returned by the /quotes/ endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Quote {
  /// The symbol the quote is for.
  #[serde(rename = "symbol")]
  pub symbol: String,
  /// The ask price.
  #[serde(rename = "ask_price")]
  pub ask_price: String,
  /// The ask size.
  #[serde(rename = "ask_size")]
  pub ask_size: u64,
  /// The bid price.
  #[serde(rename = "bid_price")]
  pub bid_price: String,
  /// The bid size.
  #[serde(rename = "bid_size")]
  pub bid_size: u64,
  /// The price of the last trade.
  #[serde(rename = "last_trade_price")]
  pub last_trade_price: String,
  /// The price of the last trade outside of regular trading hours.
  #[serde(rename = "last_extended_hours_trade_price", default)]
  pub last_extended_hours_trade_price: Option<String>,
  /// The closing price of the previous trading day.
  #[serde(rename = "previous_close")]
  pub previous_close: String,
  /// The date of the previous close.
  #[serde(rename = "previous_close_date", default)]
  pub previous_close_date: Option<String>,
  /// Whether trading in the symbol is halted.
  #[serde(rename = "trading_halted", default)]
  pub trading_halted: bool,
  /// The URL of the instrument.
  #[serde(rename = "instrument", default)]
  pub instrument: Option<String>,
  /// Time stamp of the last update.
  #[serde(rename = "updated_at")]
  pub updated_at: DateTime<Utc>,
}


Endpoint! {
  /// The representation of a GET request to the /quotes/ endpoint.
  ///
  /// Unknown symbols are reported as `None` in the result list.
  pub Get(GetReq),
  Ok => Page<Option<Quote>>, [
    /// The quotes were retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, [
    /// None of the provided symbols could be resolved.
    /* 400 */ BAD_REQUEST => InvalidInput,
  ]

  fn path(_input: &Self::Input) -> Str {
    "/quotes/".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, ConversionError> {
    Ok(Some(comma_separated_query("symbols", &input.symbols)))
  }

  fn requires_token() -> bool {
    false
  }
}
