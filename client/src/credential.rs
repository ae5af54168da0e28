use aliyun_iot_core::utils::Redact;
use aliyun_iot_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key pair.
///
/// The secret is only ever used as an HMAC key; it never appears in a
/// canonical string or in logs.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for aliyun services.
    pub access_key_id: String,
    /// Access key secret for aliyun services.
    pub access_key_secret: String,
}

impl Credential {
    /// Create a new credential from an access key pair.
    pub fn new(access_key_id: &str, access_key_secret: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            access_key_secret: access_key_secret.to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("access_key_secret", &Redact::from(&self.access_key_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.access_key_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("id", "secret").is_valid());
        assert!(!Credential::new("", "secret").is_valid());
        assert!(!Credential::new("id", "").is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let cred = Credential::new("LTAIZBLddGWi57kW", "very-secret-value");
        let printed = format!("{cred:?}");
        assert!(!printed.contains("very-secret-value"));
        assert!(printed.contains("LTA***7kW"));
    }
}
