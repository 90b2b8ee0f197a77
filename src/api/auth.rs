// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use http::Method;

use serde::Deserialize;
use serde::Serialize;
use serde_urlencoded::to_string as to_form;

use crate::endpoint::ConversionError;
use crate::Str;


/// A POST request to be made to the /api-token-auth/ endpoint.
#[derive(Clone, PartialEq, Serialize)]
pub struct LoginReq {
  /// The name of the user to log in as.
  #[serde(rename = "username")]
  pub username: String,
  /// The user's password.
  #[serde(rename = "password")]
  pub password: String,
  /// A one-time code answering a multi-factor challenge.
  #[serde(rename = "mfa_code", skip_serializing_if = "Option::is_none")]
  pub mfa_code: Option<String>,
}

impl Debug for LoginReq {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    fmt
      .debug_struct("LoginReq")
      .field("username", &self.username)
      .field("password", &"<masked>")
      .field("mfa_code", &self.mfa_code.as_ref().map(|_| "<masked>"))
      .finish()
  }
}


/// The outcome of a login attempt as reported by the
/// /api-token-auth/ endpoint.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Authentication {
  /// The server requires a one-time code before issuing a token.
  Challenge {
    /// The flag indicating that a second factor is required.
    #[serde(rename = "mfa_required")]
    mfa_required: bool,
    /// The way the code is delivered, e.g., "sms" or "app".
    #[serde(rename = "mfa_type", default)]
    mfa_type: Option<String>,
  },
  /// The login succeeded and a token was issued.
  Token {
    /// The token to authorize subsequent requests with.
    #[serde(rename = "token")]
    token: String,
  },
}

impl Debug for Authentication {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    match self {
      Self::Challenge {
        mfa_required,
        mfa_type,
      } => fmt
        .debug_struct("Challenge")
        .field("mfa_required", mfa_required)
        .field("mfa_type", mfa_type)
        .finish(),
      Self::Token { .. } => fmt.debug_struct("Token").field("token", &"<masked>").finish(),
    }
  }
}


Endpoint! {
  /// The representation of a POST request to the /api-token-auth/
  /// endpoint.
  pub Login(LoginReq),
  Ok => Authentication, [
    /* 200 */ OK,
  ],
  Err => LoginError, [
    /// The credentials were rejected or the request was malformed.
    /* 400 */ BAD_REQUEST => InvalidCredentials,
  ]

  fn method() -> Method {
    Method::POST
  }

  fn path(_input: &Self::Input) -> Str {
    "/api-token-auth/".into()
  }

  fn body(input: &Self::Input) -> Result<Option<Str>, ConversionError> {
    Ok(Some(to_form(input)?.into()))
  }

  fn requires_token() -> bool {
    false
  }

  fn sensitive() -> bool {
    true
  }
}


Endpoint! {
  /// The representation of a POST request to the /api-token-logout/
  /// endpoint.
  pub Logout(()),
  Ok => (), [
    /// The token was invalidated.
    /* 200 */ OK,
  ],
  Err => LogoutError, []

  fn method() -> Method {
    Method::POST
  }

  fn path(_input: &Self::Input) -> Str {
    "/api-token-logout/".into()
  }

  fn parse(_body: &[u8]) -> Result<Self::Output, ConversionError> {
    Ok(())
  }
}
