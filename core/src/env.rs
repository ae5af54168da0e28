use std::collections::HashMap;
use std::fmt::Debug;

/// Env provides environment variable access for configuration loading.
pub trait Env: Debug + Send + Sync + 'static {
    /// Read one environment variable.
    ///
    /// Returns `None` when the variable is unset or not valid utf-8.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// A fixed set of variables, independent of the process environment.
///
/// Mostly used in tests, where leaking real credentials into assertions
/// would be unfortunate.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The variables this environment serves.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// The environment a fresh context starts with: empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}
