// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::future::Future;
use std::str::from_utf8;

use http::header::ACCEPT;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::request::Builder as HttpRequestBuilder;
use http::HeaderMap;
use http::HeaderValue;
use http::Request;
use http_body_util::Full;

use hyper::body::Bytes;
use hyper_util::client::legacy::Builder as HttpClientBuilder;
use hyper_util::client::legacy::Client as HttpClient;
use hyper_util::rt::TokioExecutor;

use tracing::debug;
use tracing::field::debug;
use tracing::field::DebugValue;
use tracing::info;
use tracing::instrument;
use tracing::span;
use tracing::trace;
use tracing::Level;
use tracing_futures::Instrument;

use crate::api::auth;
use crate::api_info::ApiInfo;
use crate::credentials::Credentials;
use crate::endpoint::Endpoint;
use crate::error::RequestError;
use crate::transport::HyperTransport;
use crate::transport::Transport;
use crate::Error;

/// The value of the `Accept` header sent along with every request.
const ACCEPT_JSON: &str = "application/json; charset=utf-8";
/// The content type of request bodies.
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";


/// A type providing a debug representation of HTTP headers, with
/// sensitive data being masked out.
struct DebugHeaders<'h> {
  headers: &'h HeaderMap<HeaderValue>,
}

impl Debug for DebugHeaders<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    static MASKED: HeaderValue = HeaderValue::from_static("<masked>");

    f.debug_map()
      .entries(self.headers.iter().map(|(k, v)| {
        if k == AUTHORIZATION {
          (k, &MASKED)
        } else {
          (k, v)
        }
      }))
      .finish()
  }
}


/// A type providing a debug representation of an HTTP request, with
/// sensitive data being masked out.
struct DebugRequest<'r> {
  request: &'r Request<Full<Bytes>>,
  mask_body: bool,
}

impl Debug for DebugRequest<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    // Note that we do not print URL and method, because we assume they
    // are already included as identifiers in the span of the usage
    // site.
    let mut s = f.debug_struct("Request");
    let _ = s.field("version", &self.request.version()).field(
      "headers",
      &DebugHeaders {
        headers: self.request.headers(),
      },
    );

    if self.mask_body {
      let _ = s.field("body", &"<masked>");
    } else {
      let _ = s.field("body", self.request.body());
    }
    s.finish()
  }
}


/// Emit a debug representation of an HTTP request.
fn debug_request(request: &Request<Full<Bytes>>, mask_body: bool) -> DebugValue<DebugRequest<'_>> {
  debug(DebugRequest { request, mask_body })
}


/// A builder for creating customized `Client` objects.
#[derive(Debug)]
pub struct Builder {
  builder: HttpClientBuilder,
}

impl Builder {
  /// Adjust the maximum number of idle connections per host.
  #[inline]
  pub fn max_idle_per_host(&mut self, max_idle: usize) -> &mut Self {
    let _ = self.builder.pool_max_idle_per_host(max_idle);
    self
  }

  /// Build the final `Client` object.
  pub fn build(&self, api_info: ApiInfo) -> Client {
    let transport = HyperTransport::new(&self.builder);
    Client::with_transport(api_info, transport)
  }
}

impl Default for Builder {
  #[cfg(test)]
  fn default() -> Self {
    // Tests spin up a fresh runtime per test case. Idle connections
    // would be bound to a runtime that is gone by the time the next
    // test reuses them, so we do not keep any around.
    let mut builder = HttpClient::builder(TokioExecutor::new());
    let _ = builder.pool_max_idle_per_host(0);

    Self { builder }
  }

  #[cfg(not(test))]
  #[inline]
  fn default() -> Self {
    Self {
      builder: HttpClient::builder(TokioExecutor::new()),
    }
  }
}


/// A `Client` is the entity used by clients of this module for
/// interacting with the Robinhood API.
///
/// A client starts out anonymous, unless the [`ApiInfo`] it was
/// created with carries a token. It becomes authenticated through
/// [`Client::login`]. Endpoints requiring authorization are refused
/// locally while no token is held.
pub struct Client {
  api_info: ApiInfo,
  token: Option<String>,
  transport: Box<dyn Transport>,
}

impl Debug for Client {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    fmt
      .debug_struct("Client")
      .field("api_info", &self.api_info)
      .field("token", &self.token.as_ref().map(|_| "<masked>"))
      .field("transport", &self.transport)
      .finish()
  }
}

impl Client {
  /// Instantiate a new `Builder` which allows for creating a customized `Client`.
  #[inline]
  pub fn builder() -> Builder {
    Builder::default()
  }

  /// Create a new `Client` using the given API information.
  #[inline]
  pub fn new(api_info: ApiInfo) -> Self {
    Builder::default().build(api_info)
  }

  /// Create a new `Client` sending its requests through the provided
  /// [`Transport`].
  pub fn with_transport<T>(api_info: ApiInfo, transport: T) -> Self
  where
    T: Transport + 'static,
  {
    let token = api_info.token.clone();
    Self {
      api_info,
      token,
      transport: Box::new(transport),
    }
  }

  /// Create a `Request` to the endpoint.
  fn request<R>(&self, input: &R::Input) -> Result<Request<Full<Bytes>>, RequestError<R::Error>>
  where
    R: Endpoint,
  {
    if R::requires_token() && self.token.is_none() {
      return Err(RequestError::NotAuthenticated)
    }

    let mut url = self.api_info.base_url.clone();
    url.set_path(&R::path(input));

    let query = R::query(input).map_err(|err| RequestError::Endpoint(R::Error::from(err)))?;
    url.set_query(query.as_deref());

    let body = R::body(input).map_err(|err| RequestError::Endpoint(R::Error::from(err)))?;

    let mut builder = HttpRequestBuilder::new()
      .method(R::method())
      .uri(url.as_str())
      .header(ACCEPT, ACCEPT_JSON);

    if let Some(token) = &self.token {
      builder = builder.header(AUTHORIZATION, format!("Token {token}"));
    }

    let body = match body {
      None => Bytes::new(),
      Some(body) => {
        builder = builder.header(CONTENT_TYPE, CONTENT_TYPE_FORM);
        match body {
          Cow::Borrowed(s) => Bytes::from_static(s.as_bytes()),
          Cow::Owned(s) => Bytes::from(s),
        }
      },
    };

    let request = builder.body(Full::new(body))?;
    Ok(request)
  }

  /// Create and issue a request and decode the response.
  pub fn issue<R>(
    &self,
    input: &R::Input,
  ) -> impl Future<Output = Result<R::Output, RequestError<R::Error>>> + '_
  where
    R: Endpoint,
  {
    let result = self.request::<R>(input);
    async move {
      let request = result?;
      let span = span!(
        Level::INFO,
        "issue",
        method = %request.method(),
        uri = %request.uri()
      );
      self.issue_::<R>(request).instrument(span).await
    }
  }

  /// Issue a request.
  async fn issue_<R>(
    &self,
    request: Request<Full<Bytes>>,
  ) -> Result<R::Output, RequestError<R::Error>>
  where
    R: Endpoint,
  {
    debug!("requesting");
    trace!(request = debug_request(&request, R::sensitive()));

    let response = self
      .transport
      .send(request)
      .await
      .map_err(RequestError::Transport)?;
    let status = response.status();
    debug!(status = debug(&status));

    let body = response.body().as_ref();
    if R::sensitive() {
      trace!(body = "<masked>");
    } else {
      match from_utf8(body) {
        Ok(s) => trace!(body = %s),
        Err(b) => trace!(body = %b),
      }
    }

    R::evaluate(status, body).map_err(RequestError::Endpoint)
  }

  /// Log in, retrieving user name, password, and, if requested by the
  /// server, a one-time code from the provided [`Credentials`].
  ///
  /// On success the client holds the issued token and the user name
  /// that was logged in as is returned. On failure the client's token
  /// is left untouched. An HTTP failure status is reported as
  /// [`Error::HttpStatus`]; it is not worth retrying with the same
  /// credentials.
  #[instrument(level = "debug", skip(self, credentials))]
  pub async fn login<C>(&mut self, credentials: &mut C) -> Result<String, Error>
  where
    C: Credentials + ?Sized,
  {
    let username = credentials.username()?;
    let password = credentials.password()?;
    let mut request = auth::LoginReq {
      username,
      password,
      mfa_code: None,
    };

    let mut authentication = self.issue::<auth::Login>(&request).await?;
    if let auth::Authentication::Challenge { .. } = authentication {
      debug!("server requested a second factor");
      request.mfa_code = Some(credentials.mfa_code()?);
      // We answer a challenge exactly once. Being challenged again is
      // treated as a failure.
      authentication = self.issue::<auth::Login>(&request).await?;
    }

    match authentication {
      auth::Authentication::Token { token } => {
        self.token = Some(token);
        info!(username = %request.username, "successfully logged in");
        Ok(request.username)
      },
      auth::Authentication::Challenge { .. } => Err(Error::MissingToken),
    }
  }

  /// Log out, invalidating the token held server side.
  ///
  /// The client drops its token once the server acknowledged the
  /// request, turning it back into an anonymous one.
  #[instrument(level = "debug", skip(self))]
  pub async fn logout(&mut self) -> Result<(), RequestError<auth::LogoutError>> {
    self.issue::<auth::Logout>(&()).await?;
    self.token = None;
    Ok(())
  }

  /// Retrieve the token currently held by the client, if any.
  #[inline]
  pub fn token(&self) -> Option<&str> {
    self.token.as_deref()
  }

  /// Check whether the client holds a token.
  #[inline]
  pub fn is_authenticated(&self) -> bool {
    self.token.is_some()
  }

  /// Retrieve the `ApiInfo` object used by this `Client` instance.
  #[inline]
  pub fn api_info(&self) -> &ApiInfo {
    &self.api_info
  }
}
