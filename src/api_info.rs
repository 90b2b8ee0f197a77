// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::env::var_os;
use std::ffi::OsString;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use url::Url;

use crate::api::API_BASE_URL;
use crate::Error;

/// The base URL to the API to use.
const ENV_API_URL: &str = "RHOOD_API_BASE_URL";
/// The environment variable representing a pre-existing token.
const ENV_TOKEN: &str = "RHOOD_API_TOKEN";


/// An object encapsulating the information used for working with the
/// Robinhood API.
#[derive(Clone, PartialEq)]
pub struct ApiInfo {
  /// The base URL for the API.
  pub(crate) base_url: Url,
  /// A token of an already authenticated session, if any.
  pub(crate) token: Option<String>,
}

impl ApiInfo {
  /// Create an `ApiInfo` from the required data.
  ///
  /// Supplying a `token` allows for skipping the login for a session
  /// that was established earlier.
  ///
  /// # Errors
  /// - [`Error::Url`](crate::Error::Url) If `base_url` cannot be parsed
  ///   into a [`url::Url`](url::Url).
  pub fn from_parts(base_url: impl AsRef<str>, token: Option<String>) -> Result<Self, Error> {
    Ok(Self {
      base_url: Url::parse(base_url.as_ref())?,
      token,
    })
  }

  /// Create an `ApiInfo` object with information from the environment.
  ///
  /// The following information is used:
  /// - the API base URL is retrieved from the RHOOD_API_BASE_URL
  ///   variable, falling back to the public API endpoint
  /// - an optional token is retrieved from the RHOOD_API_TOKEN
  ///   variable
  pub fn from_env() -> Result<Self, Error> {
    let base_url = var_os(ENV_API_URL)
      .unwrap_or_else(|| OsString::from(API_BASE_URL))
      .into_string()
      .map_err(|_| {
        Error::Str(format!("{} environment variable is not a valid string", ENV_API_URL).into())
      })?;
    let base_url = Url::parse(&base_url)?;

    let token = var_os(ENV_TOKEN)
      .map(|token| {
        token.into_string().map_err(|_| {
          Error::Str(format!("{} environment variable is not a valid string", ENV_TOKEN).into())
        })
      })
      .transpose()?
      .filter(|token| !token.is_empty());

    Ok(Self { base_url, token })
  }

  /// Retrieve the base URL of the API.
  #[inline]
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }
}

impl Debug for ApiInfo {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    fmt
      .debug_struct("ApiInfo")
      .field("base_url", &self.base_url.as_str())
      .field("token", &self.token.as_ref().map(|_| "<masked>"))
      .finish()
  }
}
