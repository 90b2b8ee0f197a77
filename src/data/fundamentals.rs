// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

use crate::api::Page;
use crate::endpoint::ConversionError;
use crate::util::comma_separated_query;
use crate::Str;


/// A GET request to be made to the /fundamentals/ endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetReq {
  /// The symbols to retrieve fundamentals for.
  pub symbols: Vec<String>,
}

impl GetReq {
  /// Create a request for fundamentals of the given symbols.
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


/// Fundamental data about a company.
///
/// Prices and volumes may be absent outside of trading hours.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Fundamentals {
  /// The opening price of the day.
  #[serde(rename = "open", default)]
  pub open: Option<String>,
  /// The highest price of the day.
  #[serde(rename = "high", default)]
  pub high: Option<String>,
  /// The lowest price of the day.
  #[serde(rename = "low", default)]
  pub low: Option<String>,
  /// The traded volume of the day.
  #[serde(rename = "volume", default)]
  pub volume: Option<String>,
  /// The average volume.
  #[serde(rename = "average_volume", default)]
  pub average_volume: Option<String>,
  /// The highest price in the past 52 weeks.
  #[serde(rename = "high_52_weeks", default)]
  pub high_52_weeks: Option<String>,
  /// The lowest price in the past 52 weeks.
  #[serde(rename = "low_52_weeks", default)]
  pub low_52_weeks: Option<String>,
  /// The market capitalization.
  #[serde(rename = "market_cap", default)]
  pub market_cap: Option<String>,
  /// The dividend yield.
  #[serde(rename = "dividend_yield", default)]
  pub dividend_yield: Option<String>,
  /// The price to earnings ratio.
  #[serde(rename = "pe_ratio", default)]
  pub pe_ratio: Option<String>,
  /// A description of the company.
  #[serde(rename = "description", default)]
  pub description: Option<String>,
  /// The URL of the instrument.
  #[serde(rename = "instrument")]
  pub instrument: String,
}


Endpoint! {
  /// The representation of a GET request to the /fundamentals/
  /// endpoint.
  ///
  /// Unknown symbols are reported as `None` in the result list.
  pub Get(GetReq),
  Ok => Page<Option<Fundamentals>>, [
    /// The fundamentals were retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, [
    /// None of the provided symbols could be resolved.
    /* 400 */ BAD_REQUEST => InvalidInput,
  ]

  fn path(_input: &Self::Input) -> Str {
    "/fundamentals/".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, ConversionError> {
    Ok(Some(comma_separated_query("symbols", &input.symbols)))
  }

  fn requires_token() -> bool {
    false
  }
}
