// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use http::Method;
use http::StatusCode;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::from_slice as from_json;
use serde_json::Error as JsonError;
use serde_json::Value;
use serde_urlencoded::ser::Error as UrlEncodeError;

use thiserror::Error;

use crate::Str;


/// An error reported when converting between request/response data
/// and their wire representation.
#[derive(Debug, Error)]
pub enum ConversionError {
  /// A JSON conversion error.
  #[error("a JSON conversion failed")]
  Json(
    #[from]
    #[source]
    JsonError,
  ),
  /// Encoding a form body or query string failed.
  #[error("failed to URL-encode request data")]
  UrlEncode(
    #[from]
    #[source]
    UrlEncodeError,
  ),
  /// A field required by the request's other settings was not set.
  #[error("the request field `{0}` is required but not set")]
  MissingField(&'static str),
}


/// An error body as reported by the API.
///
/// The API reports failures in a couple of shapes: a `detail` string,
/// a list of `non_field_errors`, or a mapping from request field names
/// to complaints about them. All of them are captured here.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ApiError {
  /// A human readable description of the problem.
  #[serde(rename = "detail", default, skip_serializing_if = "Option::is_none")]
  pub detail: Option<String>,
  /// Errors not attributable to a specific request field.
  #[serde(rename = "non_field_errors", default, skip_serializing_if = "Vec::is_empty")]
  pub non_field_errors: Vec<String>,
  /// Any other reported data, typically keyed by request field.
  #[serde(flatten)]
  pub fields: BTreeMap<String, Value>,
}

impl ApiError {
  /// Attempt to decode an error body, handing back the raw bytes if it
  /// is not an API error object.
  pub(crate) fn parse(body: &[u8]) -> Result<Self, Vec<u8>> {
    from_json::<Self>(body).map_err(|_| body.to_vec())
  }
}

impl Display for ApiError {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    if let Some(detail) = &self.detail {
      return fmt.write_str(detail)
    }

    if !self.non_field_errors.is_empty() {
      return fmt.write_str(&self.non_field_errors.join("; "))
    }

    let mut first = true;
    for (field, value) in &self.fields {
      if !first {
        fmt.write_str("; ")?;
      }
      write!(fmt, "{field}: {value}")?;
      first = false;
    }
    Ok(())
  }
}


/// Format an error message as carried by an endpoint error.
pub(crate) fn fmt_message(message: &Result<ApiError, Vec<u8>>) -> String {
  match message {
    Ok(error) => error.to_string(),
    Err(body) => match std::str::from_utf8(body) {
      Ok(body) => body.to_string(),
      Err(err) => err.to_string(),
    },
  }
}


/// A trait describing an HTTP endpoint.
///
/// An endpoint for our intents and purposes is basically a path and an
/// HTTP request method (e.g., GET or POST). The path will be combined
/// with an "authority" (scheme, host, and port) into a full URL. Query
/// parameters as well as form encoded bodies are supported.
pub trait Endpoint {
  /// The type of data being passed in as part of a request to this
  /// endpoint.
  type Input;
  /// The type of data being returned in the response from this
  /// endpoint.
  type Output;
  /// The type of error this endpoint can report.
  type Error: From<ConversionError> + 'static;

  /// Retrieve the HTTP method to use.
  ///
  /// The default method being used is GET.
  fn method() -> Method {
    Method::GET
  }

  /// Inquire the path the request should go to.
  fn path(input: &Self::Input) -> Str;

  /// Inquire the query the request should use.
  ///
  /// By default no query is emitted.
  #[allow(unused)]
  fn query(input: &Self::Input) -> Result<Option<Str>, ConversionError> {
    Ok(None)
  }

  /// Retrieve the request's form encoded body.
  ///
  /// By default no body is sent.
  #[allow(unused)]
  fn body(input: &Self::Input) -> Result<Option<Str>, ConversionError> {
    Ok(None)
  }

  /// Check whether the endpoint can only be used with an
  /// authentication token.
  fn requires_token() -> bool {
    true
  }

  /// Check whether request and response bodies carry secrets that
  /// must not show up in traces.
  fn sensitive() -> bool {
    false
  }

  /// Parse the body into the final result.
  ///
  /// By default this method directly parses the body as JSON.
  fn parse(body: &[u8]) -> Result<Self::Output, ConversionError>
  where
    Self::Output: DeserializeOwned,
  {
    from_json::<Self::Output>(body).map_err(ConversionError::from)
  }

  /// Evaluate an HTTP status and body, converting them into an output
  /// value or an error.
  fn evaluate(status: StatusCode, body: &[u8]) -> Result<Self::Output, Self::Error>;
}


/// A macro used for defining the properties for a request to a
/// particular HTTP endpoint.
macro_rules! Endpoint {
  ( $(#[$docs:meta])* $pub:vis $name:ident($in:ty),
    // We just ignore any documentation for success cases: there is
    // nowhere we can put it.
    Ok => $out:ty, [$($(#[$ok_docs:meta])* $ok_status:ident,)*],
    Err => $err:ident, [$($(#[$err_docs:meta])* $err_status:ident => $variant:ident,)*]
    $($defs:tt)* ) => {

    $(#[$docs])*
    #[derive(Clone, Copy, Debug)]
    $pub struct $name;

    EndpointImpl! {
      $pub $name($in),
      Ok => $out, [$($ok_status,)*],
      Err => $err, [
        // Every request can result in an authentication failure and so
        // we include this variant into all our error definitions.
        /// Authentication failed for the request.
        /* 401 */ UNAUTHORIZED => AuthenticationFailed,
        $($(#[$err_docs])* $err_status => $variant,)*
      ]
      $($defs)*
    }
  };
}

macro_rules! EndpointImpl {
  ( $pub:vis $name:ident($in:ty),
    Ok => $out:ty, [$($ok_status:ident,)*],
    Err => $err:ident, [$($(#[$err_docs:meta])* $err_status:ident => $variant:ident,)*]
    $($defs:tt)* ) => {

    /// An enum representing the various errors this endpoint may
    /// encounter.
    #[allow(unused_qualifications)]
    #[derive(Debug)]
    $pub enum $err {
      $(
        $(#[$err_docs])*
        $variant(Result<crate::endpoint::ApiError, Vec<u8>>),
      )*
      /// An HTTP status not present in the endpoint's definition was
      /// encountered.
      UnexpectedStatus(::http::StatusCode, Result<crate::endpoint::ApiError, Vec<u8>>),
      /// A conversion of request or response data failed.
      Conversion(crate::endpoint::ConversionError),
    }

    #[allow(unused_qualifications)]
    impl ::std::fmt::Display for $err {
      fn fmt(&self, fmt: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
          $(
            $err::$variant(message) => {
              let status = ::http::StatusCode::$err_status;
              let message = crate::endpoint::fmt_message(message);
              write!(fmt, "HTTP status {}: {}", status, message)
            },
          )*
          $err::UnexpectedStatus(status, message) => {
            let message = crate::endpoint::fmt_message(message);
            write!(fmt, "Unexpected HTTP status {}: {}", status, message)
          },
          $err::Conversion(err) => write!(fmt, "{}", err),
        }
      }
    }

    #[allow(unused_qualifications)]
    impl ::std::error::Error for $err {
      fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match self {
          $err::Conversion(err) => Some(err),
          _ => None,
        }
      }
    }

    #[allow(unused_qualifications)]
    impl ::std::convert::From<crate::endpoint::ConversionError> for $err {
      fn from(src: crate::endpoint::ConversionError) -> Self {
        $err::Conversion(src)
      }
    }

    #[allow(unused_qualifications)]
    impl ::std::convert::From<$err> for crate::Error {
      fn from(src: $err) -> Self {
        match src {
          $(
            $err::$variant(message) => {
              crate::Error::HttpStatus(::http::StatusCode::$err_status, message.into())
            },
          )*
          $err::UnexpectedStatus(status, message) => {
            crate::Error::HttpStatus(status, message.into())
          },
          $err::Conversion(crate::endpoint::ConversionError::Json(err)) => crate::Error::Json(err),
          $err::Conversion(err) => crate::Error::Str(err.to_string().into()),
        }
      }
    }

    #[allow(unused_qualifications)]
    impl crate::endpoint::Endpoint for $name {
      type Input = $in;
      type Output = $out;
      type Error = $err;

      $($defs)*

      fn evaluate(status: ::http::StatusCode, body: &[u8]) -> Result<Self::Output, Self::Error> {
        match status {
          $(
            ::http::StatusCode::$ok_status => {
              <Self as crate::endpoint::Endpoint>::parse(body).map_err($err::from)
            },
          )*
          status => {
            let message = crate::endpoint::ApiError::parse(body);
            match status {
              $(
                ::http::StatusCode::$err_status => Err($err::$variant(message)),
              )*
              _ => Err($err::UnexpectedStatus(status, message)),
            }
          },
        }
      }
    }
  };
}
