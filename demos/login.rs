// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use rhood::api::account;
use rhood::api::portfolio;
use rhood::api::positions;
use rhood::ApiInfo;
use rhood::Client;
use rhood::Prompt;

#[tokio::main]
async fn main() {
  // Optionally, the following variables are honored:
  // - RHOOD_API_BASE_URL -> the API base URL to use
  // - RHOOD_API_TOKEN -> a token of an existing session, skipping the
  //   interactive login
  let api_info = ApiInfo::from_env().unwrap();
  let mut client = Client::new(api_info);

  if !client.is_authenticated() {
    let username = client.login(&mut Prompt).await.unwrap();
    println!("Logged in as {username}");
  }

  let accounts = client.issue::<account::Get>(&()).await.unwrap();
  let account = accounts.primary().unwrap();
  println!(
    "Account {}: buying power {}, cash {}",
    account.account_number, account.buying_power, account.cash
  );

  let number = &account.account_number;
  let portfolio = client.issue::<portfolio::Get>(number).await.unwrap();
  println!("Equity: {}", portfolio.equity);

  let positions = client.issue::<positions::Get>(number).await.unwrap();
  positions.results.iter().for_each(|p| {
    println!("{} shares of {} @ {}", p.quantity, p.instrument, p.average_buy_price)
  });

  client.logout().await.unwrap();
}
