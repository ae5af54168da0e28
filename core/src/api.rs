use crate::{Context, Result};
use std::fmt::Debug;
use std::sync::Arc;

/// SigningCredential is implemented by credential types that can key a
/// signature.
pub trait SigningCredential: Clone + Send + Sync + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used to load a credential from the
/// environment the client runs in.
///
/// Different deployments resolve credentials differently: passed in
/// statically at construction, read from environment variables, and so on.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load the credential, returning `None` when this source has nothing
    /// to offer so the next provider in a chain can be consulted.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// ProvideCredentialChain consults a list of providers in order and returns
/// the first credential found.
pub struct ProvideCredentialChain<C: SigningCredential> {
    providers: Vec<Arc<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Insert a provider at the front of the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = C> + 'static,
    ) -> Self {
        self.providers.insert(0, Arc::new(provider));
        self
    }
}

#[async_trait::async_trait]
impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider {provider:?}");
            if let Some(cred) = provider.provide_credential(ctx).await? {
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}
