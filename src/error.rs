// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;
use std::str::from_utf8;

use http::Error as HttpError;
use http::StatusCode as HttpStatusCode;
use serde_json::to_vec as to_json;
use serde_json::Error as JsonError;
use thiserror::Error;
use url::ParseError;

use crate::endpoint::ApiError;
use crate::transport::TransportError;
use crate::Str;


/// An error encountered while issuing a request.
#[derive(Debug, Error)]
pub enum RequestError<E> {
  /// An endpoint reported error.
  #[error("the endpoint reported an error")]
  Endpoint(#[source] E),
  /// The request could not be assembled.
  #[error("failed to create the HTTP request")]
  Http(
    #[from]
    #[source]
    HttpError,
  ),
  /// The transport failed to deliver the request or receive the
  /// response.
  #[error("the transport reported an error")]
  Transport(#[source] TransportError),
  /// The endpoint requires authorization but the client does not hold
  /// a token. No request was sent.
  #[error("the client is not authenticated")]
  NotAuthenticated,
}


/// The body of an HTTP response reporting a failure.
#[derive(Clone, Debug, Error, PartialEq)]
pub struct HttpBody(pub Vec<u8>);

impl From<Result<ApiError, Vec<u8>>> for HttpBody {
  fn from(message: Result<ApiError, Vec<u8>>) -> Self {
    match message {
      // Serializing a value we deserialized ourselves does not fail
      // in practice; fall back to an empty body if it ever does.
      Ok(error) => Self(to_json(&error).unwrap_or_default()),
      Err(body) => Self(body),
    }
  }
}

impl Display for HttpBody {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    match from_utf8(&self.0) {
      Ok(s) => fmt.write_str(s)?,
      Err(b) => write!(fmt, "{:?}", b)?,
    }
    Ok(())
  }
}


/// The error type as used by this crate.
#[derive(Debug, Error)]
pub enum Error {
  /// An HTTP related error.
  #[error("encountered an HTTP related error")]
  Http(
    #[from]
    #[source]
    HttpError,
  ),
  /// We encountered an HTTP status code that either represents a
  /// failure or is not supported.
  #[error("encountered an unexpected HTTP status: {0}")]
  HttpStatus(HttpStatusCode, #[source] HttpBody),
  /// An I/O error, e.g., while prompting for credentials.
  #[error("an I/O operation failed")]
  Io(
    #[from]
    #[source]
    IoError,
  ),
  /// A JSON conversion error.
  #[error("a JSON conversion failed")]
  Json(
    #[from]
    #[source]
    JsonError,
  ),
  /// The server answered a multi-factor code with yet another
  /// challenge instead of issuing a token.
  #[error("the server did not issue an authentication token")]
  MissingToken,
  /// The account list was empty.
  #[error("no account found")]
  NoAccount,
  /// An operation requiring authorization was attempted without a
  /// token.
  #[error("the client is not authenticated")]
  NotAuthenticated,
  /// An error directly originating in this crate.
  #[error("{0}")]
  Str(Str),
  /// The transport failed to deliver a request.
  #[error("the transport reported an error")]
  Transport(#[source] TransportError),
  /// An URL parsing error.
  #[error("failed to parse the URL")]
  Url(
    #[from]
    #[source]
    ParseError,
  ),
}

impl<E> From<RequestError<E>> for Error
where
  E: Into<Error>,
{
  fn from(src: RequestError<E>) -> Self {
    match src {
      RequestError::Endpoint(err) => err.into(),
      RequestError::Http(err) => Error::Http(err),
      RequestError::Transport(err) => Error::Transport(err),
      RequestError::NotAuthenticated => Error::NotAuthenticated,
    }
  }
}
