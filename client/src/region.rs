use crate::constants::ALIYUN_DOMAIN;
use aliyun_iot_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Regions the IoT service is deployed in.
///
/// The region selects the endpoint host; a device lives in exactly one
/// region and requests for it must be sent there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// China (Shanghai), `cn-shanghai`.
    CnShanghai,
    /// Singapore, `ap-southeast-1`.
    ApSoutheast1,
    /// US (Silicon Valley), `us-west-1`.
    UsWest1,
    /// Japan (Tokyo), `ap-northeast-1`.
    ApNortheast1,
    /// Germany (Frankfurt), `eu-central-1`.
    EuCentral1,
}

impl Region {
    /// All supported regions.
    pub const ALL: &'static [Region] = &[
        Region::CnShanghai,
        Region::ApSoutheast1,
        Region::UsWest1,
        Region::ApNortheast1,
        Region::EuCentral1,
    ];

    /// The region code as sent in the `RegionId` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::CnShanghai => "cn-shanghai",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::UsWest1 => "us-west-1",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::EuCentral1 => "eu-central-1",
        }
    }

    /// Host serving the IoT API in this region.
    pub fn host(&self) -> String {
        format!("iot.{}.{}", self.as_str(), ALIYUN_DOMAIN)
    }

    /// Endpoint URL for this region.
    pub fn endpoint(&self) -> String {
        format!("https://{}", self.host())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cn-shanghai" => Ok(Region::CnShanghai),
            "ap-southeast-1" => Ok(Region::ApSoutheast1),
            "us-west-1" => Ok(Region::UsWest1),
            "ap-northeast-1" => Ok(Region::ApNortheast1),
            "eu-central-1" => Ok(Region::EuCentral1),
            _ => Err(Error::config_invalid(format!(
                "unsupported region id: {s}"
            ))),
        }
    }
}
