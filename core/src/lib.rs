//! Core components for the Alibaba Cloud IoT RPC client.
//!
//! This crate provides the foundational types and traits shared by the
//! workspace. It carries no IoT knowledge of its own.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: a container holding the pluggable collaborators of a
//!   client: HTTP sending and environment access
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and credential validity ([`SigningCredential`])
//! - **Utilities**: hashing ([`hash`]), time formatting ([`time`]) and
//!   secret redaction ([`utils`])
//!
//! ## Example
//!
//! ```no_run
//! use aliyun_iot_core::{Context, OsEnv, ProvideCredential, Result, SigningCredential};
//! use async_trait::async_trait;
//!
//! #[derive(Clone)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let cred = MyProvider.provide_credential(&ctx).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod http;
pub use http::{HttpSend, NoopHttpSend};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
