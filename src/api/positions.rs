// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::api::account;
use crate::api::position::Position;
use crate::api::Page;
use crate::Str;


Endpoint! {
  /// The representation of a GET request to the
  /// /accounts/<account-number>/positions/ endpoint.
  pub Get(account::Number),
  Ok => Page<Position>, [
    /// The positions were retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, [
    /// The account does not exist.
    /* 404 */ NOT_FOUND => NotFound,
  ]

  fn path(input: &Self::Input) -> Str {
    format!("/accounts/{}/positions/", input).into()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use http::StatusCode;

  use test_log::test;

  use crate::mock::client;


  /// Check that we can list positions, including closed ones.
  #[test(tokio::test)]
  async fn list_positions() {
    let response = r#"{
  "next": null,
  "previous": null,
  "results": [
    {
      "account": "https://api.robinhood.com/accounts/5PY78241/",
      "url": "https://api.robinhood.com/positions/5PY78241/450dfc6d-5510-4d40-abfb-f633b7d9be3e/",
      "created_at": "2017-02-01T19:43:33.264000Z",
      "updated_at": "2017-02-01T19:43:33.581937Z",
      "average_buy_price": "128.5100",
      "instrument": "https://api.robinhood.com/instruments/450dfc6d-5510-4d40-abfb-f633b7d9be3e/",
      "quantity": "10.0000"
    },
    {
      "account": "https://api.robinhood.com/accounts/5PY78241/",
      "url": "https://api.robinhood.com/positions/5PY78241/e39ed23a-7bd1-4587-b060-71988d9ef483/",
      "created_at": "2016-11-02T14:02:11.000000Z",
      "updated_at": "2016-12-12T17:11:45.000000Z",
      "average_buy_price": "0.0000",
      "instrument": "https://api.robinhood.com/instruments/e39ed23a-7bd1-4587-b060-71988d9ef483/",
      "quantity": "0.0000"
    }
  ]
}"#;

    let (client, transport) = client(Some("T"));
    transport.respond(StatusCode::OK, response);

    let number = account::Number::from("5PY78241");
    let page = client.issue::<Get>(&number).await.unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].quantity, "10.0000");
    assert_eq!(page.results[1].quantity, "0.0000");

    let requests = transport.requests();
    assert_eq!(requests[0].uri.path(), "/accounts/5PY78241/positions/");
  }
}
