// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use http::HeaderMap;
use http::Method;
use http::Request;
use http::Response;
use http::StatusCode;
use http::Uri;
use http_body_util::BodyExt;
use http_body_util::Full;

use hyper::body::Bytes;

use serde_urlencoded::from_bytes as from_form;

use crate::api_info::ApiInfo;
use crate::transport::Transport;
use crate::transport::TransportError;
use crate::Client;


/// A request as captured by the [`MockTransport`].
#[derive(Clone, Debug)]
pub(crate) struct Recorded {
  pub method: Method,
  pub uri: Uri,
  pub headers: HeaderMap,
  pub body: Bytes,
}

impl Recorded {
  /// Decode the form encoded body of the request.
  pub fn form(&self) -> Vec<(String, String)> {
    from_form(&self.body).unwrap()
  }

  /// Look up a single field of the form encoded body.
  pub fn form_value(&self, key: &str) -> Option<String> {
    self
      .form()
      .into_iter()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v)
  }
}


/// A [`Transport`] handing out canned responses in order and recording
/// all requests it was asked to send.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockTransport {
  responses: Arc<Mutex<VecDeque<(StatusCode, Vec<u8>)>>>,
  requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockTransport {
  /// Queue up a response.
  pub fn respond(&self, status: StatusCode, body: impl Into<Vec<u8>>) {
    self
      .responses
      .lock()
      .unwrap()
      .push_back((status, body.into()));
  }

  /// Retrieve all requests sent so far.
  pub fn requests(&self) -> Vec<Recorded> {
    self.requests.lock().unwrap().clone()
  }
}

#[async_trait]
impl Transport for MockTransport {
  async fn send(&self, request: Request<Full<Bytes>>) -> Result<Response<Bytes>, TransportError> {
    let (parts, body) = request.into_parts();
    let body = body.collect().await?.to_bytes();

    self.requests.lock().unwrap().push(Recorded {
      method: parts.method,
      uri: parts.uri,
      headers: parts.headers,
      body,
    });

    let next = self.responses.lock().unwrap().pop_front();
    let (status, body) = next.ok_or("no response queued")?;
    let response = Response::builder().status(status).body(Bytes::from(body))?;
    Ok(response)
  }
}


/// Create a `Client` backed by a `MockTransport`, optionally holding a
/// token already.
pub(crate) fn client(token: Option<&str>) -> (Client, MockTransport) {
  let api_info = ApiInfo::from_parts("https://api.example.com", token.map(str::to_string)).unwrap();
  let transport = MockTransport::default();
  let client = Client::with_transport(api_info, transport.clone());
  (client, transport)
}
