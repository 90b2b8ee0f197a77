// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::ops::Deref;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use http::Method;

use num_decimal::Num;

use serde::Deserialize;
use serde::Serialize;
use serde_urlencoded::to_string as to_form;

use uuid::Uuid;

use crate::endpoint::ConversionError;
use crate::util::fmt_variant;
use crate::util::parse_variant;
use crate::Error;
use crate::Str;


/// An ID uniquely identifying an order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Id(pub Uuid);

impl Deref for Id {
  type Target = Uuid;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}


/// Implement `Display` and `FromStr` for a unit enum in terms of its
/// serialized variant names.
macro_rules! impl_variant_str {
  ($ty:ty, $what:expr) => {
    impl Display for $ty {
      fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt_variant(self, fmt)
      }
    }

    impl FromStr for $ty {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant($what, s)
      }
    }
  };
}


/// The state an order can be in.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum State {
  /// The order was received but not yet processed.
  #[serde(rename = "queued")]
  Queued,
  /// The order is awaiting confirmation.
  #[serde(rename = "unconfirmed")]
  Unconfirmed,
  /// The order was confirmed and is live.
  #[serde(rename = "confirmed")]
  Confirmed,
  /// Part of the order's quantity has been executed.
  #[serde(rename = "partially_filled")]
  PartiallyFilled,
  /// The order has been executed in full.
  #[serde(rename = "filled")]
  Filled,
  /// The order was rejected.
  #[serde(rename = "rejected")]
  Rejected,
  /// The order was canceled.
  #[serde(rename = "canceled")]
  Canceled,
  /// The order failed.
  #[serde(rename = "failed")]
  Failed,
}

impl_variant_str!(State, "order state");


/// The side an order is on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Side {
  /// Buy an instrument.
  #[serde(rename = "buy")]
  Buy,
  /// Sell an instrument.
  #[serde(rename = "sell")]
  Sell,
}

impl_variant_str!(Side, "order side");


/// The type of an order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Type {
  /// A market order.
  #[serde(rename = "market")]
  Market,
  /// A limit order.
  #[serde(rename = "limit")]
  Limit,
}

impl_variant_str!(Type, "order type");


/// A description of the time for which an order is valid.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TimeInForce {
  /// The order is good for the day.
  #[serde(rename = "gfd")]
  GoodForDay,
  /// The order is good until canceled.
  #[serde(rename = "gtc")]
  GoodTillCanceled,
  /// The order executes immediately, in part or in full, with the
  /// remainder being canceled.
  #[serde(rename = "ioc")]
  ImmediateOrCancel,
  /// The order executes immediately and in full or is canceled.
  #[serde(rename = "fok")]
  FillOrKill,
  /// The order is only eligible for execution at the market opening.
  #[serde(rename = "opg")]
  AtTheOpening,
}

impl_variant_str!(TimeInForce, "time in force");


/// The condition under which an order gets executed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Trigger {
  /// The order is eligible for execution right away.
  #[serde(rename = "immediate")]
  Immediate,
  /// The order becomes eligible once the stop price is reached.
  #[serde(rename = "stop")]
  Stop,
}

impl_variant_str!(Trigger, "order trigger");


/// A POST request to be made to the /orders/ endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderReq {
  /// The URL of the account to place the order for.
  pub account: String,
  /// The URL of the instrument to trade.
  pub instrument: String,
  /// The ticker symbol of the instrument.
  pub symbol: String,
  /// `market` or `limit`.
  pub type_: Type,
  /// How long the order will be valid.
  pub time_in_force: TimeInForce,
  /// `immediate` or `stop`.
  pub trigger: Trigger,
  /// Number of shares to trade.
  pub quantity: u64,
  /// The side the order is on.
  pub side: Side,
  /// The limit price. Only sent for limit orders, for which it is
  /// required.
  pub price: Option<Num>,
  /// The stop price. Only sent for stop orders, for which it is
  /// required.
  pub stop_price: Option<Num>,
  /// Whether or not the order may execute while exchanges are closed.
  /// Only sent when set.
  pub extended_hours: bool,
}


/// The wire representation of an [`OrderReq`].
#[derive(Serialize)]
struct OrderForm<'r> {
  #[serde(rename = "account")]
  account: &'r str,
  #[serde(rename = "instrument")]
  instrument: &'r str,
  #[serde(rename = "symbol")]
  symbol: &'r str,
  #[serde(rename = "type")]
  type_: Type,
  #[serde(rename = "time_in_force")]
  time_in_force: TimeInForce,
  #[serde(rename = "trigger")]
  trigger: Trigger,
  #[serde(rename = "quantity")]
  quantity: u64,
  #[serde(rename = "side")]
  side: Side,
  #[serde(rename = "price", skip_serializing_if = "Option::is_none")]
  price: Option<String>,
  #[serde(rename = "stop_price", skip_serializing_if = "Option::is_none")]
  stop_price: Option<String>,
  #[serde(rename = "extended_hours", skip_serializing_if = "Option::is_none")]
  extended_hours: Option<bool>,
}

impl<'r> TryFrom<&'r OrderReq> for OrderForm<'r> {
  type Error = ConversionError;

  fn try_from(request: &'r OrderReq) -> Result<Self, Self::Error> {
    let price = match request.type_ {
      Type::Limit => {
        let price = request
          .price
          .as_ref()
          .ok_or(ConversionError::MissingField("price"))?;
        Some(price.to_string())
      },
      Type::Market => None,
    };
    let stop_price = match request.trigger {
      Trigger::Stop => {
        let stop_price = request
          .stop_price
          .as_ref()
          .ok_or(ConversionError::MissingField("stop_price"))?;
        Some(stop_price.to_string())
      },
      Trigger::Immediate => None,
    };

    Ok(Self {
      account: &request.account,
      instrument: &request.instrument,
      symbol: &request.symbol,
      type_: request.type_,
      time_in_force: request.time_in_force,
      trigger: request.trigger,
      quantity: request.quantity,
      side: request.side,
      price,
      stop_price,
      extended_hours: request.extended_hours.then_some(true),
    })
  }
}


/// An execution, i.e., a (partial) fill of an order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Execution {
  /// The execution's ID.
  #[serde(rename = "id")]
  pub id: String,
  /// The price the shares were executed at.
  #[serde(rename = "price")]
  pub price: String,
  /// The number of shares executed.
  #[serde(rename = "quantity")]
  pub quantity: String,
  /// The date the execution settles on.
  #[serde(rename = "settlement_date", default)]
  pub settlement_date: Option<String>,
  /// Timestamp of the execution.
  #[serde(rename = "timestamp")]
  pub timestamp: DateTime<Utc>,
}


/// A single order as returned by the /orders/ endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Order {
  /// The order's ID.
  #[serde(rename = "id")]
  pub id: Id,
  /// Timestamp this order was created at.
  #[serde(rename = "created_at")]
  pub created_at: DateTime<Utc>,
  /// Timestamp this order was updated at last.
  #[serde(rename = "updated_at")]
  pub updated_at: DateTime<Utc>,
  /// Timestamp of the last transaction affecting this order.
  #[serde(rename = "last_transaction_at", default)]
  pub last_transaction_at: Option<DateTime<Utc>>,
  /// The list of executions that happened so far.
  #[serde(rename = "executions", default)]
  pub executions: Vec<Execution>,
  /// The number of shares the order is for.
  #[serde(rename = "quantity")]
  pub quantity: String,
  /// The number of shares executed so far.
  #[serde(rename = "cumulative_quantity")]
  pub cumulative_quantity: String,
  /// The limit price, if this is a limit order.
  #[serde(rename = "price", default)]
  pub price: Option<String>,
  /// The stop price, if this is a stop order.
  #[serde(rename = "stop_price", default)]
  pub stop_price: Option<String>,
  /// The average price of executed shares.
  #[serde(rename = "average_price", default)]
  pub average_price: Option<String>,
  /// The side the order is on.
  #[serde(rename = "side")]
  pub side: Side,
  /// The state the order is in.
  #[serde(rename = "state")]
  pub state: State,
  /// The type of order.
  #[serde(rename = "type")]
  pub type_: Type,
  /// How long the order is valid.
  #[serde(rename = "time_in_force")]
  pub time_in_force: TimeInForce,
  /// The condition the order is executed under.
  #[serde(rename = "trigger")]
  pub trigger: Trigger,
  /// Whether the order may execute while exchanges are closed.
  #[serde(rename = "extended_hours", default)]
  pub extended_hours: bool,
  /// The URL of the order itself.
  #[serde(rename = "url")]
  pub url: String,
  /// The URL to post to in order to cancel the order. Not set when
  /// the order can no longer be canceled.
  #[serde(rename = "cancel", default)]
  pub cancel: Option<String>,
  /// The URL of the instrument being traded.
  #[serde(rename = "instrument")]
  pub instrument: String,
  /// The URL of the account the order belongs to.
  #[serde(rename = "account")]
  pub account: String,
}


Endpoint! {
  /// The representation of a GET request to the /orders/<order-id>/
  /// endpoint.
  pub Get(Id),
  Ok => Order, [
    /// The order object for the given ID was retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, [
    /// No order was found with the given ID.
    /* 404 */ NOT_FOUND => NotFound,
  ]

  fn path(input: &Self::Input) -> Str {
    format!("/orders/{}/", input.as_hyphenated()).into()
  }
}


Endpoint! {
  /// The representation of a POST request to the /orders/ endpoint.
  pub Post(OrderReq),
  Ok => Order, [
    /// The order was submitted successfully.
    /* 200 */ OK,
    /// The order was created.
    /* 201 */ CREATED,
  ],
  Err => PostError, [
    /// Some data in the request was invalid or the order could not be
    /// placed.
    /* 400 */ BAD_REQUEST => InvalidInput,
    /// The account is not permitted to place the order.
    /* 403 */ FORBIDDEN => NotPermitted,
  ]

  fn method() -> Method {
    Method::POST
  }

  fn path(_input: &Self::Input) -> Str {
    "/orders/".into()
  }

  fn body(input: &Self::Input) -> Result<Option<Str>, ConversionError> {
    let form = OrderForm::try_from(input)?;
    Ok(Some(to_form(&form)?.into()))
  }
}


Endpoint! {
  /// The representation of a POST request to the
  /// /orders/<order-id>/cancel/ endpoint.
  pub Cancel(Id),
  Ok => (), [
    /// The cancellation request was accepted.
    /* 200 */ OK,
  ],
  Err => CancelError, [
    /// The order can no longer be canceled.
    /* 400 */ BAD_REQUEST => NotCancelable,
    /// No order was found with the given ID.
    /* 404 */ NOT_FOUND => NotFound,
  ]

  fn method() -> Method {
    Method::POST
  }

  fn path(input: &Self::Input) -> Str {
    format!("/orders/{}/cancel/", input.as_hyphenated()).into()
  }

  fn parse(_body: &[u8]) -> Result<Self::Output, ConversionError> {
    // The body is an empty object on success. There is nothing in
    // there for us.
    Ok(())
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use http::StatusCode;

  use serde_json::from_str as from_json;
  use serde_urlencoded::from_str as from_form;

  use test_log::test;

  use crate::endpoint::Endpoint;
  use crate::mock::client;
  use crate::RequestError;


  /// Create an order request for AAPL of the given kind.
  fn order_req(type_: Type, trigger: Trigger) -> OrderReq {
    OrderReq {
      account: "https://api.robinhood.com/accounts/5PY78241/".to_string(),
      instrument: "https://api.robinhood.com/instruments/450dfc6d-5510-4d40-abfb-f633b7d9be3e/"
        .to_string(),
      symbol: "AAPL".to_string(),
      type_,
      time_in_force: TimeInForce::GoodForDay,
      trigger,
      quantity: 10,
      side: Side::Buy,
      price: Some(Num::from(150)),
      stop_price: Some(Num::from(140)),
      extended_hours: false,
    }
  }

  /// Encode the body of a POST request and decode it into a list of
  /// key-value pairs.
  fn form(request: &OrderReq) -> Vec<(String, String)> {
    let body = Post::body(request).unwrap().unwrap();
    from_form::<Vec<(String, String)>>(&body).unwrap()
  }

  /// Look up a value in a decoded form.
  fn value<'f>(form: &'f [(String, String)], key: &str) -> Option<&'f str> {
    form
      .iter()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
  }


  #[test]
  fn emit_side() {
    assert_eq!(Side::Buy.to_string(), "buy");
    assert_eq!(Side::Sell.to_string(), "sell");
  }

  #[test]
  fn emit_time_in_force() {
    assert_eq!(TimeInForce::GoodForDay.to_string(), "gfd");
    assert_eq!(TimeInForce::GoodTillCanceled.to_string(), "gtc");
    assert_eq!(TimeInForce::ImmediateOrCancel.to_string(), "ioc");
    assert_eq!(TimeInForce::FillOrKill.to_string(), "fok");
    assert_eq!(TimeInForce::AtTheOpening.to_string(), "opg");
  }

  /// Check that known values are parsed and unknown ones rejected.
  #[test]
  fn parse_enums() {
    assert_eq!("limit".parse::<Type>().unwrap(), Type::Limit);
    assert_eq!("stop".parse::<Trigger>().unwrap(), Trigger::Stop);
    assert_eq!("partially_filled".parse::<State>().unwrap(), State::PartiallyFilled);
    assert_eq!("opg".parse::<TimeInForce>().unwrap(), TimeInForce::AtTheOpening);

    let err = "stop_limit".parse::<Type>().unwrap_err();
    assert_eq!(err.to_string(), "invalid order type: stop_limit");
    assert!("hold".parse::<Side>().is_err());
    assert!("day".parse::<TimeInForce>().is_err());
  }

  /// Check the encoding of a plain market order.
  #[test]
  fn emit_market_order() {
    let form = form(&order_req(Type::Market, Trigger::Immediate));
    assert_eq!(
      value(&form, "account"),
      Some("https://api.robinhood.com/accounts/5PY78241/")
    );
    assert_eq!(value(&form, "symbol"), Some("AAPL"));
    assert_eq!(value(&form, "type"), Some("market"));
    assert_eq!(value(&form, "time_in_force"), Some("gfd"));
    assert_eq!(value(&form, "trigger"), Some("immediate"));
    assert_eq!(value(&form, "quantity"), Some("10"));
    assert_eq!(value(&form, "side"), Some("buy"));
    assert_eq!(value(&form, "price"), None);
    assert_eq!(value(&form, "stop_price"), None);
    assert_eq!(value(&form, "extended_hours"), None);
  }

  /// Check that a limit order carries its price.
  #[test]
  fn emit_limit_order() {
    let form = form(&order_req(Type::Limit, Trigger::Immediate));
    assert_eq!(value(&form, "type"), Some("limit"));

    let price = value(&form, "price").unwrap();
    assert_eq!(Num::from_str(price).unwrap(), Num::from(150));
    assert_eq!(value(&form, "stop_price"), None);
  }

  /// Check that a fractional price is sent exactly as given.
  #[test]
  fn emit_fractional_limit_price() {
    let mut request = order_req(Type::Limit, Trigger::Stop);
    request.price = Some(Num::from_str("150.25").unwrap());
    request.stop_price = Some(Num::from_str("149.5").unwrap());

    let body = Post::body(&request).unwrap().unwrap();
    assert!(body.contains("&price=150.25&"), "{body}");
    assert!(body.contains("&stop_price=149.5"), "{body}");
  }

  /// Check that a limit order without a price is rejected.
  #[test]
  fn emit_limit_order_without_price() {
    let mut request = order_req(Type::Limit, Trigger::Immediate);
    request.price = None;

    let err = Post::body(&request).unwrap_err();
    assert!(
      matches!(err, ConversionError::MissingField("price")),
      "{err:?}"
    );
  }

  /// Check that a stop order without a stop price is rejected.
  #[test]
  fn emit_stop_order_without_stop_price() {
    let mut request = order_req(Type::Market, Trigger::Stop);
    request.stop_price = None;

    let err = Post::body(&request).unwrap_err();
    assert!(
      matches!(err, ConversionError::MissingField("stop_price")),
      "{err:?}"
    );
  }

  /// Check that a stop order carries its stop price.
  #[test]
  fn emit_stop_order() {
    let form = form(&order_req(Type::Market, Trigger::Stop));
    assert_eq!(value(&form, "trigger"), Some("stop"));
    assert_eq!(value(&form, "price"), None);

    let stop_price = value(&form, "stop_price").unwrap();
    assert_eq!(Num::from_str(stop_price).unwrap(), Num::from(140));

    let form = self::form(&order_req(Type::Limit, Trigger::Stop));
    assert!(value(&form, "price").is_some());
    assert!(value(&form, "stop_price").is_some());
  }

  /// Check that the extended hours flag is only sent when set.
  #[test]
  fn emit_extended_hours() {
    let mut request = order_req(Type::Limit, Trigger::Immediate);
    let form = form(&request);
    assert_eq!(value(&form, "extended_hours"), None);

    request.extended_hours = true;
    let form = self::form(&request);
    assert_eq!(value(&form, "extended_hours"), Some("true"));
  }

  #[test]
  fn parse_reference_order() {
    let response = r#"{
    "updated_at": "2017-02-01T19:43:33.545012Z",
    "ref_id": null,
    "time_in_force": "gfd",
    "fees": "0.00",
    "cancel": null,
    "id": "e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b",
    "cumulative_quantity": "10.00000",
    "stop_price": null,
    "reject_reason": null,
    "instrument": "https://api.robinhood.com/instruments/450dfc6d-5510-4d40-abfb-f633b7d9be3e/",
    "state": "filled",
    "trigger": "immediate",
    "type": "market",
    "last_transaction_at": "2017-02-01T19:43:33.264000Z",
    "price": null,
    "executions": [
      {
        "timestamp": "2017-02-01T19:43:33.264000Z",
        "price": "128.51000000",
        "settlement_date": "2017-02-06",
        "id": "d1d7b8e1-13bb-4e94-a4d2-a2d0f2fb0d3b",
        "quantity": "10.00000"
      }
    ],
    "extended_hours": false,
    "account": "https://api.robinhood.com/accounts/5PY78241/",
    "url": "https://api.robinhood.com/orders/e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b/",
    "created_at": "2017-02-01T19:43:33.120135Z",
    "side": "buy",
    "position": "https://api.robinhood.com/positions/5PY78241/450dfc6d-5510-4d40-abfb-f633b7d9be3e/",
    "average_price": "128.51000000",
    "quantity": "10.00000"
}"#;

    let id = Id(Uuid::parse_str("e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b").unwrap());
    let order = from_json::<Order>(response).unwrap();
    assert_eq!(order.id, id);
    assert_eq!(order.state, State::Filled);
    assert_eq!(order.type_, Type::Market);
    assert_eq!(order.trigger, Trigger::Immediate);
    assert_eq!(order.time_in_force, TimeInForce::GoodForDay);
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.quantity, "10.00000");
    assert_eq!(order.cumulative_quantity, "10.00000");
    assert_eq!(order.price, None);
    assert_eq!(order.average_price.as_deref(), Some("128.51000000"));
    assert_eq!(order.cancel, None);
    assert_eq!(order.executions.len(), 1);
    assert_eq!(order.executions[0].price, "128.51000000");
    assert_eq!(
      order.executions[0].settlement_date.as_deref(),
      Some("2017-02-06")
    );
  }

  /// Check that an order in an unknown state is rejected.
  #[test]
  fn parse_order_with_unknown_state() {
    let body = br#"{"state": "pending_review"}"#;
    let err = Get::evaluate(StatusCode::OK, body).unwrap_err();
    assert!(matches!(err, GetError::Conversion(_)), "{err:?}");
  }

  /// Check that paths are formed correctly.
  #[test]
  fn order_paths() {
    let id = Id(Uuid::parse_str("e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b").unwrap());
    assert_eq!(Get::path(&id), "/orders/e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b/");
    assert_eq!(
      Cancel::path(&id),
      "/orders/e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b/cancel/"
    );
  }

  /// Check that submitting an order posts the form body with the token.
  #[test(tokio::test)]
  async fn submit_limit_order() {
    let (client, transport) = client(Some("T"));
    let response = r#"{
      "id": "e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b",
      "created_at": "2017-02-01T19:43:33.120135Z",
      "updated_at": "2017-02-01T19:43:33.545012Z",
      "last_transaction_at": null,
      "executions": [],
      "quantity": "10.00000",
      "cumulative_quantity": "0.00000",
      "price": "150.00000000",
      "stop_price": null,
      "side": "buy",
      "state": "queued",
      "type": "limit",
      "time_in_force": "gfd",
      "trigger": "immediate",
      "url": "https://api.robinhood.com/orders/e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b/",
      "cancel": "https://api.robinhood.com/orders/e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b/cancel/",
      "instrument": "https://api.robinhood.com/instruments/450dfc6d-5510-4d40-abfb-f633b7d9be3e/",
      "account": "https://api.robinhood.com/accounts/5PY78241/"
    }"#;
    transport.respond(StatusCode::CREATED, response);

    let request = order_req(Type::Limit, Trigger::Immediate);
    let order = client.issue::<Post>(&request).await.unwrap();
    assert_eq!(order.state, State::Queued);
    assert_eq!(order.price.as_deref(), Some("150.00000000"));
    assert!(order.cancel.is_some());

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].uri.path(), "/orders/");
    assert_eq!(
      requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
      "application/x-www-form-urlencoded"
    );
    let price = requests[0].form_value("price").unwrap();
    assert_eq!(Num::from_str(&price).unwrap(), Num::from(150));
  }

  /// Check that an incomplete limit order never reaches the server.
  #[test(tokio::test)]
  async fn submit_limit_order_without_price() {
    let (client, transport) = client(Some("T"));

    let mut request = order_req(Type::Limit, Trigger::Immediate);
    request.price = None;
    let err = client.issue::<Post>(&request).await.unwrap_err();
    match err {
      RequestError::Endpoint(PostError::Conversion(ConversionError::MissingField(field))) => {
        assert_eq!(field, "price")
      },
      _ => panic!("Received unexpected error: {err:?}"),
    }
    assert!(transport.requests().is_empty());
  }

  /// Check that a rejected order surfaces the decoded error body.
  #[test(tokio::test)]
  async fn submit_invalid_order() {
    let (client, transport) = client(Some("T"));
    transport.respond(
      StatusCode::BAD_REQUEST,
      r#"{"detail": "Not enough shares to sell."}"#,
    );

    let mut request = order_req(Type::Market, Trigger::Immediate);
    request.side = Side::Sell;
    let err = client.issue::<Post>(&request).await.unwrap_err();
    match err {
      RequestError::Endpoint(PostError::InvalidInput(Ok(error))) => {
        assert_eq!(error.detail.as_deref(), Some("Not enough shares to sell."));
      },
      _ => panic!("Received unexpected error: {err:?}"),
    }
  }

  /// Check that canceling an order posts to the cancel URL.
  #[test(tokio::test)]
  async fn cancel_order() {
    let (client, transport) = client(Some("T"));
    transport.respond(StatusCode::OK, "{}");

    let id = Id(Uuid::parse_str("e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b").unwrap());
    client.issue::<Cancel>(&id).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(
      requests[0].uri.path(),
      "/orders/e9b5a5a3-7bd8-4ae2-b2a5-a1e1d8a54b4b/cancel/"
    );
  }

  /// Check that retrieving a non-existent order is reported as such.
  #[test(tokio::test)]
  async fn retrieve_non_existent_order() {
    let (client, transport) = client(Some("T"));
    transport.respond(StatusCode::NOT_FOUND, r#"{"detail": "Not found."}"#);

    let id = Id(Uuid::new_v4());
    let err = client.issue::<Get>(&id).await.unwrap_err();
    match err {
      RequestError::Endpoint(GetError::NotFound(_)) => (),
      _ => panic!("Received unexpected error: {err:?}"),
    };
  }
}
