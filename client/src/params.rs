use crate::constants::{FORMAT_JSON, SIGNATURE_METHOD, SIGNATURE_VERSION};
use crate::region::Region;
use std::collections::BTreeMap;

/// A flat mapping of request parameter names to string values.
///
/// Keys are unique and iteration is ordered by key, which is the order
/// canonicalization requires. Values are coerced to strings at insert
/// time; the wire protocol knows nothing but strings.
///
/// A set lives for one request. The composer and the signer both return
/// new sets instead of writing through the one they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    inner: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.inner.insert(key.into(), value.to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a parameter value by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(|v| v.as_str())
    }

    /// Number of parameters in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// The protocol-mandated fields present on every request.
///
/// `Format`, `SignatureMethod` and `SignatureVersion` are fixed by the
/// protocol; the rest vary per client or per request.
#[derive(Debug, Clone)]
pub struct CommonParameters {
    /// The client's credential identifier.
    pub access_key_id: String,
    /// The client's region.
    pub region_id: Region,
    /// The API version date-string.
    pub version: String,
    /// Request issuance time, ISO 8601 UTC with milliseconds.
    pub timestamp: String,
    /// Fresh per-request replay token.
    pub nonce: String,
}

impl CommonParameters {
    /// Merge the common parameters with caller-supplied action fields into
    /// a new set, attaching the action tag.
    ///
    /// Caller values take precedence on key collision. The caller's set is
    /// left untouched.
    pub fn merge(&self, action: &str, user: &ParameterSet) -> ParameterSet {
        let mut out = ParameterSet::new();
        out.insert("Format", FORMAT_JSON);
        out.insert("Version", &self.version);
        out.insert("AccessKeyId", &self.access_key_id);
        out.insert("SignatureMethod", SIGNATURE_METHOD);
        out.insert("SignatureVersion", SIGNATURE_VERSION);
        out.insert("Timestamp", &self.timestamp);
        out.insert("SignatureNonce", &self.nonce);
        out.insert("RegionId", self.region_id.as_str());
        out.insert("Action", action);

        for (k, v) in user.iter() {
            out.insert(k, v);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> CommonParameters {
        CommonParameters {
            access_key_id: "id1".to_string(),
            region_id: Region::CnShanghai,
            version: "2018-01-20".to_string(),
            timestamp: "2019-05-31T06:09:39.912Z".to_string(),
            nonce: "1559282979912".to_string(),
        }
    }

    #[test]
    fn test_merge_adds_all_common_parameters() {
        let user = ParameterSet::new()
            .with("ProductName", "thermostat")
            .with("NodeType", 0);

        let merged = common().merge("CreateProduct", &user);

        assert_eq!(merged.get("Format"), Some("JSON"));
        assert_eq!(merged.get("Version"), Some("2018-01-20"));
        assert_eq!(merged.get("AccessKeyId"), Some("id1"));
        assert_eq!(merged.get("SignatureMethod"), Some("HMAC-SHA1"));
        assert_eq!(merged.get("SignatureVersion"), Some("1.0"));
        assert_eq!(merged.get("Timestamp"), Some("2019-05-31T06:09:39.912Z"));
        assert_eq!(merged.get("SignatureNonce"), Some("1559282979912"));
        assert_eq!(merged.get("RegionId"), Some("cn-shanghai"));
        assert_eq!(merged.get("Action"), Some("CreateProduct"));
        assert_eq!(merged.get("ProductName"), Some("thermostat"));
        assert_eq!(merged.get("NodeType"), Some("0"));
        assert_eq!(merged.len(), 11);
    }

    #[test]
    fn test_merge_caller_wins_on_collision() {
        let user = ParameterSet::new().with("RegionId", "us-west-1");

        let merged = common().merge("QueryProductList", &user);

        assert_eq!(merged.get("RegionId"), Some("us-west-1"));
    }

    #[test]
    fn test_merge_leaves_input_untouched() {
        let user = ParameterSet::new().with("ProductKey", "a1b2c3");
        let before = user.clone();

        let _ = common().merge("QueryProduct", &user);

        assert_eq!(user, before);
    }

    #[test]
    fn test_value_coercion() {
        let set = ParameterSet::new()
            .with("Qos", 1)
            .with("Id2", false)
            .with("Timeout", 5000u32);

        assert_eq!(set.get("Qos"), Some("1"));
        assert_eq!(set.get("Id2"), Some("false"));
        assert_eq!(set.get("Timeout"), Some("5000"));
    }
}
