// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::api::order::Order;
use crate::api::Page;
use crate::Str;


Endpoint! {
  /// The representation of a GET request to the /orders/ endpoint,
  /// listing the most recent orders.
  pub Get(()),
  Ok => Page<Order>, [
    /// The list of orders was retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, []

  fn path(_input: &Self::Input) -> Str {
    "/orders/".into()
  }
}
