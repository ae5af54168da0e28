use crate::constants::{ALIBABA_CLOUD_ACCESS_KEY_ID, ALIBABA_CLOUD_ACCESS_KEY_SECRET};
use crate::Credential;
use aliyun_iot_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;

/// Loads the access key pair from `ALIBABA_CLOUD_ACCESS_KEY_ID` and
/// `ALIBABA_CLOUD_ACCESS_KEY_SECRET`.
///
/// Yields nothing unless both variables are set; a lone id or a lone
/// secret cannot sign anything.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let pair = (
            ctx.env_var(ALIBABA_CLOUD_ACCESS_KEY_ID),
            ctx.env_var(ALIBABA_CLOUD_ACCESS_KEY_SECRET),
        );
        let (Some(access_key_id), Some(access_key_secret)) = pair else {
            return Ok(None);
        };

        Ok(Some(Credential {
            access_key_id,
            access_key_secret,
        }))
    }
}
