// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error as StdError;
use std::fmt::Debug;

use async_trait::async_trait;

use http::Request;
use http::Response;
use http_body_util::BodyExt;
use http_body_util::Full;

use hyper::body::Bytes;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Builder as HttpClientBuilder;
use hyper_util::client::legacy::Client as HttpClient;


/// The error type reported by a [`Transport`].
pub type TransportError = Box<dyn StdError + Send + Sync + 'static>;


/// A trait abstracting over the delivery of HTTP requests.
///
/// A transport sends a fully assembled request and hands back the
/// response with its body collected in full.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
  /// Send a request and wait for the complete response.
  async fn send(&self, request: Request<Full<Bytes>>) -> Result<Response<Bytes>, TransportError>;
}


/// The default [`Transport`], backed by `hyper`.
#[derive(Debug)]
pub struct HyperTransport {
  client: HttpClient<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HyperTransport {
  /// Create a `HyperTransport` from a pre-configured client builder.
  pub(crate) fn new(builder: &HttpClientBuilder) -> Self {
    let https = HttpsConnector::new();
    let client = builder.build(https);

    Self { client }
  }

  /// Add "gzip" as an accepted encoding to the request.
  #[cfg(feature = "gzip")]
  fn maybe_add_gzip_header(request: &mut Request<Full<Bytes>>) {
    use http::header::ACCEPT_ENCODING;
    use http::HeaderValue;

    let _ = request
      .headers_mut()
      .insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
  }

  /// An implementation stub not actually doing anything.
  #[cfg(not(feature = "gzip"))]
  fn maybe_add_gzip_header(_request: &mut Request<Full<Bytes>>) {}

  /// Uncompress the body if it was gzip encoded.
  #[cfg(feature = "gzip")]
  async fn decode_body(headers: &http::HeaderMap, bytes: Bytes) -> Result<Bytes, TransportError> {
    use async_compression::futures::bufread::GzipDecoder;
    use futures::AsyncReadExt as _;
    use http::header::CONTENT_ENCODING;
    use http::HeaderValue;

    match headers.get(CONTENT_ENCODING) {
      Some(value) if value == HeaderValue::from_static("gzip") => {
        let mut buffer = Vec::new();
        let _count = GzipDecoder::new(&*bytes).read_to_end(&mut buffer).await?;
        Ok(buffer.into())
      },
      _ => Ok(bytes),
    }
  }

  /// Hand back the body as is.
  #[cfg(not(feature = "gzip"))]
  async fn decode_body(_headers: &http::HeaderMap, bytes: Bytes) -> Result<Bytes, TransportError> {
    Ok(bytes)
  }
}

#[async_trait]
impl Transport for HyperTransport {
  async fn send(
    &self,
    mut request: Request<Full<Bytes>>,
  ) -> Result<Response<Bytes>, TransportError> {
    Self::maybe_add_gzip_header(&mut request);

    let response = self.client.request(request).await?;
    let (parts, body) = response.into_parts();
    // We unconditionally wait for the full body to be received before
    // even evaluating the status. Responses of this API are small and
    // every endpoint evaluates the body in one way or another.
    let bytes = body.collect().await?.to_bytes();
    let bytes = Self::decode_body(&parts.headers, bytes).await?;

    Ok(Response::from_parts(parts, bytes))
  }
}
