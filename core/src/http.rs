use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend delivers a finished request to the remote service.
///
/// This trait is the transport seam of the client: the signing pipeline
/// produces an `http::Request<Bytes>` and hands it over unchanged. Please
/// don't use it as a general purpose http client.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// The transport a fresh [`Context`](crate::Context) starts with: every
/// send fails, until a real implementation is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}
