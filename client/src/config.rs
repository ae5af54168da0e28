use crate::constants::*;
use crate::region::Region;
use crate::sign_request::Profile;
use aliyun_iot_core::Context;

/// Config carries all the configuration for the IoT client.
///
/// Fields left unset can be filled from the process environment with
/// [`from_env`](Config::from_env); explicit values always win.
#[derive(Clone, Debug)]
pub struct Config {
    /// Access key id. Env fallback: `ALIBABA_CLOUD_ACCESS_KEY_ID`.
    pub access_key_id: Option<String>,
    /// Access key secret. Env fallback: `ALIBABA_CLOUD_ACCESS_KEY_SECRET`.
    pub access_key_secret: Option<String>,
    /// Region the client talks to. Env fallback: `ALIBABA_CLOUD_REGION_ID`.
    pub region_id: Option<Region>,
    /// API version date-string, default `2018-01-20`. Env override:
    /// `ALIBABA_CLOUD_IOT_API_VERSION`.
    pub version: String,
    /// The transport profile requests are signed and sent with.
    ///
    /// Defaults to the form-encoded POST profile.
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key_id: None,
            access_key_secret: None,
            region_id: None,
            version: DEFAULT_VERSION.to_string(),
            profile: Profile::default(),
        }
    }
}

impl Config {
    /// Fill unset fields from the environment of `ctx`.
    ///
    /// An unparseable region id in the environment is logged and skipped
    /// rather than failing construction of an otherwise usable config.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_ACCESS_KEY_SECRET) {
            self.access_key_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_REGION_ID) {
            match v.parse::<Region>() {
                Ok(region) => {
                    self.region_id.get_or_insert(region);
                }
                Err(_) => {
                    log::warn!("ignoring unsupported region id from env: {v}");
                }
            }
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_IOT_API_VERSION) {
            self.version = v;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliyun_iot_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (
                    ALIBABA_CLOUD_ACCESS_KEY_ID.to_string(),
                    "access_key_id".to_string(),
                ),
                (
                    ALIBABA_CLOUD_ACCESS_KEY_SECRET.to_string(),
                    "access_key_secret".to_string(),
                ),
                (
                    ALIBABA_CLOUD_REGION_ID.to_string(),
                    "ap-northeast-1".to_string(),
                ),
            ]),
        });

        let config = Config::default().from_env(&ctx);

        assert_eq!(config.access_key_id.as_deref(), Some("access_key_id"));
        assert_eq!(
            config.access_key_secret.as_deref(),
            Some("access_key_secret")
        );
        assert_eq!(config.region_id, Some(Region::ApNortheast1));
        assert_eq!(config.version, DEFAULT_VERSION);
    }

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([(
                ALIBABA_CLOUD_ACCESS_KEY_ID.to_string(),
                "from_env".to_string(),
            )]),
        });

        let config = Config {
            access_key_id: Some("explicit".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        assert_eq!(config.access_key_id.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_from_env_skips_bad_region() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([(
                ALIBABA_CLOUD_REGION_ID.to_string(),
                "cn-mars".to_string(),
            )]),
        });

        let config = Config::default().from_env(&ctx);
        assert_eq!(config.region_id, None);
    }
}
