//! Client for the Alibaba Cloud IoT management RPC API.
//!
//! This crate builds signed requests for product, device, device-group,
//! rule and topic management and for device messaging, and returns the
//! raw HTTP response. Signing uses the RPC-style HMAC-SHA1 scheme: the
//! request parameters are canonicalized into a deterministic query
//! string, hashed with the access key secret, and the signature travels
//! as one more parameter.
//!
//! ## Quick Start
//!
//! ```no_run
//! use aliyun_iot::{Client, Config, ParameterSet, Region};
//! use aliyun_iot_core::Context;
//! use aliyun_iot_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> aliyun_iot_core::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!
//!     let config = Config {
//!         access_key_id: Some("your-access-key-id".to_string()),
//!         access_key_secret: Some("your-access-key-secret".to_string()),
//!         region_id: Some(Region::CnShanghai),
//!         ..Default::default()
//!     };
//!
//!     let client = Client::new(ctx, config)?;
//!
//!     let resp = client
//!         .pub_message(
//!             ParameterSet::new()
//!                 .with("ProductKey", "a1b2c3d4")
//!                 .with("TopicFullName", "/a1b2c3d4/device1/user/get")
//!                 .with("MessageContent", "aGVsbG8gd29ybGQ="),
//!         )
//!         .await?;
//!
//!     println!("status: {}", resp.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! Credentials are a static access key pair. Pass them in the [`Config`],
//! or leave the config fields unset and export:
//!
//! ```bash
//! export ALIBABA_CLOUD_ACCESS_KEY_ID=your-access-key-id
//! export ALIBABA_CLOUD_ACCESS_KEY_SECRET=your-access-key-secret
//! ```
//!
//! Custom resolution orders can be built from
//! [`StaticCredentialProvider`], [`EnvCredentialProvider`] and
//! [`DefaultCredentialProvider`].
//!
//! ## Transport profiles
//!
//! The service accepts two request shapes and verifies signatures
//! byte-for-byte, so the two are modeled as distinct profiles rather than
//! options to combine: [`Profile::PostForm`] (form-encoded POST body, the
//! default) and [`Profile::GetQuery`] (hand-assembled query string with
//! the GET-specific timestamp and signature encodings). Pick one per
//! deployment in the [`Config`].
//!
//! ## Actions
//!
//! Every operation is a thin wrapper over [`Client::request`]: the action
//! tag is attached centrally and the caller-supplied [`ParameterSet`] is
//! forwarded verbatim. The full catalog, with the documented field lists,
//! lives in [`action`].

mod constants;

mod config;
pub use config::Config;

mod region;
pub use region::Region;

mod credential;
pub use credential::Credential;

mod params;
pub use params::{CommonParameters, ParameterSet};

mod sign_request;
pub use sign_request::{canonical_query_string, string_to_sign, Profile, RequestSigner};

pub mod action;

mod client;
pub use client::Client;

mod provide_credential;
pub use provide_credential::*;
