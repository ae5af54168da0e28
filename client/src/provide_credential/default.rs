use crate::provide_credential::EnvCredentialProvider;
use crate::Credential;
use aliyun_iot_core::{Context, ProvideCredential, ProvideCredentialChain, Result};
use async_trait::async_trait;

/// The resolution order used when no provider is configured explicitly.
///
/// The chain consults, in order:
///
/// 1. Environment variables
///
/// The IoT API takes a static access key pair for the lifetime of a
/// client, so there is no token-exchange provider in the chain.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create the default chain.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Wrap a hand-built chain instead of the default one.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Put a provider in front of the chain, so it is consulted before
    /// every other source.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aliyun_iot::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("access_key", "secret_key"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
