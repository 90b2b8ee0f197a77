// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

use crate::Str;


/// Basic information about the authenticated user.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct User {
  /// The user's login name.
  #[serde(rename = "username")]
  pub username: String,
  /// The user's first name.
  #[serde(rename = "first_name")]
  pub first_name: String,
  /// The user's last name.
  #[serde(rename = "last_name")]
  pub last_name: String,
  /// The user's email address.
  #[serde(rename = "email", default)]
  pub email: Option<String>,
  /// The user's ID.
  #[serde(rename = "id", default)]
  pub id: Option<String>,
}


Endpoint! {
  /// The representation of a GET request to the /user/ endpoint.
  pub Get(()),
  Ok => User, [
    /// The user information was retrieved successfully.
    /* 200 */ OK,
  ],
  Err => GetError, []

  fn path(_input: &Self::Input) -> Str {
    "/user/".into()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use http::StatusCode;

  use test_log::test;

  use crate::mock::client;


  #[test(tokio::test)]
  async fn request_user() {
    let response = r#"{
  "username": "alice",
  "first_name": "Alice",
  "last_name": "Smith",
  "id_info": "https://api.robinhood.com/user/id/",
  "url": "https://api.robinhood.com/user/",
  "email_verified": true,
  "created_at": "2016-01-08T22:39:03.099012Z",
  "email": "alice@example.com"
}"#;

    let (client, transport) = client(Some("T"));
    transport.respond(StatusCode::OK, response);

    let user = client.issue::<Get>(&()).await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.last_name, "Smith");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user.id, None);
    assert_eq!(transport.requests()[0].uri.path(), "/user/");
  }
}
