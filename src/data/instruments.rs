// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ops::Deref;

use serde::Deserialize;
use serde::Serialize;
use serde_urlencoded::to_string as to_query;

use uuid::Uuid;

use crate::api::Page;
use crate::endpoint::ConversionError;
use crate::Str;


/// An ID uniquely identifying an instrument.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Id(pub Uuid);

impl Deref for Id {
  type Target = Uuid;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}


/// A GET request to be made to the /instruments/ endpoint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GetReq {
  /// The ticker symbol to look up.
  #[serde(rename = "symbol")]
  pub symbol: String,
}

impl GetReq {
  /// Create a request for looking up the instrument with the given
  /// ticker symbol.
  pub fn new<S>(symbol: S) -> Self
  where
    S: Into<String>,
  {
    Self {
      symbol: symbol.into(),
    }
  }
}


/// A tradable security.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Instrument {
  /// The instrument's ID.
  #[serde(rename = "id")]
  pub id: Id,
  /// The URL identifying the instrument. This is what order and
  /// position requests refer to.
  #[serde(rename = "url")]
  pub url: String,
  /// The instrument's ticker symbol.
  #[serde(rename = "symbol")]
  pub symbol: String,
  /// The full name of the instrument.
  #[serde(rename = "name")]
  pub name: String,
  /// A shorter name for the instrument, if any.
  #[serde(rename = "simple_name", default)]
  pub simple_name: Option<String>,
  /// The URL of the instrument's quote.
  #[serde(rename = "quote")]
  pub quote: String,
  /// The URL of the instrument's fundamentals.
  #[serde(rename = "fundamentals")]
  pub fundamentals: String,
  /// Whether the instrument can be traded.
  #[serde(rename = "tradeable", default)]
  pub tradeable: bool,
  /// The instrument's trading state, e.g., "active".
  #[serde(rename = "state", default)]
  pub state: Option<String>,
  /// The instrument's type, e.g., "stock" or "etp".
  #[serde(rename = "type", default)]
  pub type_: Option<String>,
}


Endpoint! {
  /// The representation of a GET request to the /instruments/ endpoint.
  pub Get(GetReq),
  Ok => Page<Instrument>, [
    /// The instrument lookup succeeded. The result may be empty.
    /* 200 */ OK,
  ],
  Err => GetError, [
    /// The provided symbol was invalid.
    /* 400 */ BAD_REQUEST => InvalidInput,
  ]

  fn path(_input: &Self::Input) -> Str {
    "/instruments/".into()
  }

  fn query(input: &Self::Input) -> Result<Option<Str>, ConversionError> {
    Ok(Some(to_query(input)?.into()))
  }

  fn requires_token() -> bool {
    false
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use http::header::AUTHORIZATION;
  use http::StatusCode;

  use test_log::test;

  use crate::mock::client;


  const INSTRUMENTS: &str = r#"{
  "previous": null,
  "results": [
    {
      "min_tick_size": null,
      "splits": "https://api.robinhood.com/instruments/450dfc6d-5510-4d40-abfb-f633b7d9be3e/splits/",
      "margin_initial_ratio": "0.5000",
      "url": "https://api.robinhood.com/instruments/450dfc6d-5510-4d40-abfb-f633b7d9be3e/",
      "quote": "https://api.robinhood.com/quotes/AAPL/",
      "symbol": "AAPL",
      "bloomberg_unique": "EQ0010169500001000",
      "list_date": "1990-01-02",
      "fundamentals": "https://api.robinhood.com/fundamentals/AAPL/",
      "state": "active",
      "day_trade_ratio": "0.2500",
      "tradeable": true,
      "maintenance_ratio": "0.2500",
      "id": "450dfc6d-5510-4d40-abfb-f633b7d9be3e",
      "market": "https://api.robinhood.com/markets/XNAS/",
      "name": "Apple Inc. - Common Stock",
      "simple_name": "Apple",
      "type": "stock"
    }
  ],
  "next": null
}"#;


  /// Look up an instrument by its symbol without being logged in.
  #[test(tokio::test)]
  async fn lookup_instrument() {
    let (client, transport) = client(None);
    transport.respond(StatusCode::OK, INSTRUMENTS);

    let page = client.issue::<Get>(&GetReq::new("AAPL")).await.unwrap();
    let instrument = &page.results[0];
    let id = Uuid::parse_str("450dfc6d-5510-4d40-abfb-f633b7d9be3e").unwrap();
    assert_eq!(instrument.id, Id(id));
    assert_eq!(instrument.symbol, "AAPL");
    assert_eq!(instrument.name, "Apple Inc. - Common Stock");
    assert_eq!(instrument.simple_name.as_deref(), Some("Apple"));
    assert!(instrument.tradeable);
    assert_eq!(
      instrument.url,
      "https://api.robinhood.com/instruments/450dfc6d-5510-4d40-abfb-f633b7d9be3e/"
    );

    let requests = transport.requests();
    assert_eq!(requests[0].uri.path(), "/instruments/");
    assert_eq!(requests[0].uri.query(), Some("symbol=AAPL"));
    assert_eq!(requests[0].headers.get(AUTHORIZATION), None);
  }

  /// Check that an unknown symbol results in an empty list.
  #[test(tokio::test)]
  async fn lookup_unknown_instrument() {
    let (client, transport) = client(None);
    transport.respond(
      StatusCode::OK,
      r#"{"previous": null, "results": [], "next": null}"#,
    );

    let page = client.issue::<Get>(&GetReq::new("ZZZZZ")).await.unwrap();
    assert!(page.results.is_empty());
  }
}
