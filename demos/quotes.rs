// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use rhood::data::fundamentals;
use rhood::data::quotes;
use rhood::ApiInfo;
use rhood::Client;

#[tokio::main]
async fn main() {
  // Market data does not require logging in. Optionally, the following
  // variable is honored:
  // - RHOOD_API_BASE_URL -> the API base URL to use
  let api_info = ApiInfo::from_env().unwrap();
  let client = Client::new(api_info);

  let quote_req = quotes::GetReq::new(["AAPL", "TSLA"]);
  let quotes = client.issue::<quotes::Get>(&quote_req).await.unwrap();
  quotes.results.iter().flatten().for_each(|q| {
    println!(
      "Latest quote for {}: Ask {}/{} Bid {}/{} Last {}",
      q.symbol, q.ask_price, q.ask_size, q.bid_price, q.bid_size, q.last_trade_price
    )
  });

  let fundamentals_req = fundamentals::GetReq::new(["AAPL"]);
  let fundamentals = client
    .issue::<fundamentals::Get>(&fundamentals_req)
    .await
    .unwrap();
  fundamentals.results.iter().flatten().for_each(|f| {
    println!(
      "Fundamentals for {}: open {:?} high {:?} low {:?}",
      f.instrument, f.open, f.high, f.low
    )
  });
}
