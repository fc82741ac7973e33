//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! ```no_run
//! use paymenthighway_core::Context;
//! use paymenthighway_http_send_reqwest::ReqwestHttpSend;
//!
//! let client = reqwest::Client::builder()
//!     .timeout(std::time::Duration::from_secs(30))
//!     .build()
//!     .expect("client must build");
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use paymenthighway_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// ReqwestHttpSend sends requests with a shared [`reqwest::Client`].
///
/// Connection pooling, TLS and timeouts are whatever the client is configured with.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        debug!("sending request: {} {}", req.method(), req.uri());

        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("request can't be converted for reqwest").with_source(e)
        })?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to read response body").with_source(e))?;

        debug!("got response: {} with {} bytes", parts.status, bs.len());
        Ok(http::Response::from_parts(parts, bs))
    }
}
