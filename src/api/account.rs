// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::ops::Deref;

use chrono::DateTime;
use chrono::Utc;

use serde::Deserialize;
use serde::Serialize;

use crate::api::Page;
use crate::Error;
use crate::Str;


/// A number uniquely identifying a brokerage account.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Number(pub String);

impl Deref for Number {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Number {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    fmt.write_str(&self.0)
  }
}

impl From<&str> for Number {
  fn from(number: &str) -> Self {
    Self(number.to_string())
  }
}


/// Cash related balances of a cash account.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CashBalances {
  /// The amount available for buying securities.
  #[serde(rename = "buying_power")]
  pub buying_power: String,
  /// Settled cash.
  #[serde(rename = "cash")]
  pub cash: String,
  /// Cash reserved for pending orders.
  #[serde(rename = "cash_held_for_orders")]
  pub cash_held_for_orders: String,
  /// Cash that is available for withdrawal.
  #[serde(rename = "cash_available_for_withdrawal", default)]
  pub cash_available_for_withdrawal: Option<String>,
  /// Funds from sales that did not settle yet.
  #[serde(rename = "unsettled_funds")]
  pub unsettled_funds: String,
}


/// Balances of a margin account.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MarginBalances {
  /// Cash available for trading on margin.
  #[serde(rename = "day_trade_buying_power")]
  pub day_trade_buying_power: String,
  /// Settled cash.
  #[serde(rename = "cash")]
  pub cash: String,
  /// Cash reserved for pending orders.
  #[serde(rename = "cash_held_for_orders")]
  pub cash_held_for_orders: String,
  /// The margin limit of the account.
  #[serde(rename = "margin_limit")]
  pub margin_limit: String,
  /// Funds from sales that did not settle yet.
  #[serde(rename = "unsettled_funds")]
  pub unsettled_funds: String,
  /// Unallocated margin cash.
  #[serde(rename = "unallocated_margin_cash", default)]
  pub unallocated_margin_cash: Option<String>,
}


/// A response as returned by the /accounts/ endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Account {
  /// The account's number.
  #[serde(rename = "account_number")]
  pub account_number: Number,
  /// The account's URL.
  #[serde(rename = "url")]
  pub url: String,
  /// The URL to list the account's positions at.
  #[serde(rename = "positions")]
  pub positions: String,
  /// The URL of the account's portfolio.
  #[serde(rename = "portfolio")]
  pub portfolio: String,
  /// The account type, e.g., "cash" or "margin".
  #[serde(rename = "type", default)]
  pub type_: Option<String>,
  /// The amount available for buying securities.
  #[serde(rename = "buying_power")]
  pub buying_power: String,
  /// Settled cash.
  #[serde(rename = "cash")]
  pub cash: String,
  /// Cash reserved for pending orders.
  #[serde(rename = "cash_held_for_orders")]
  pub cash_held_for_orders: String,
  /// Funds from sales that did not settle yet.
  #[serde(rename = "unsettled_funds")]
  pub unsettled_funds: String,
  /// Cash balances, present for cash accounts.
  #[serde(rename = "cash_balances", default)]
  pub cash_balances: Option<CashBalances>,
  /// Margin balances, present for margin accounts.
  #[serde(rename = "margin_balances", default)]
  pub margin_balances: Option<MarginBalances>,
  /// Whether the account is deactivated.
  #[serde(rename = "deactivated", default)]
  pub deactivated: bool,
  /// Timestamp this account was created at.
  #[serde(rename = "created_at", default)]
  pub created_at: Option<DateTime<Utc>>,
  /// Timestamp this account was updated at last.
  #[serde(rename = "updated_at")]
  pub updated_at: DateTime<Utc>,
}


impl Page<Account> {
  /// Retrieve the primary account, i.e., the first one listed.
  pub fn primary(&self) -> Result<&Account, Error> {
    self.results.first().ok_or(Error::NoAccount)
  }
}


Endpoint! {
  /// The representation of a GET request to the /accounts/ endpoint.
  pub Get(()),
  Ok => Page<Account>, [
    /// The accounts were retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, []

  fn path(_input: &Self::Input) -> Str {
    "/accounts/".into()
  }
}
