//! The catalog of RPC actions.
//!
//! The original console API enumerates one record type per action; here
//! the enumeration is data. Descriptors carry the wire name and the
//! documented field lists so tooling can introspect them; the client
//! itself forwards parameters without checking.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One documented field of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Parameter name as sent on the wire.
    pub name: &'static str,
    /// Whether the service requires the field.
    pub required: bool,
}

const fn req(name: &'static str) -> Field {
    Field {
        name,
        required: true,
    }
}

const fn opt(name: &'static str) -> Field {
    Field {
        name,
        required: false,
    }
}

/// Describes one RPC action: its wire name and its documented fields.
///
/// The descriptors are reference data, not a validation gate: the client
/// forwards whatever parameters the caller supplies and lets the service
/// do the checking.
#[derive(Debug, Clone, Copy)]
pub struct ActionDescriptor {
    /// Wire name, e.g. `CreateProduct`.
    pub name: &'static str,
    /// The documented action fields. Empty when the upstream docs leave
    /// the field set open.
    pub fields: &'static [Field],
}

const fn action(name: &'static str) -> ActionDescriptor {
    ActionDescriptor { name, fields: &[] }
}

/// Every action of the IoT RPC API, grouped the way the console groups
/// them.
pub const ACTIONS: &[ActionDescriptor] = &[
    // Product management.
    ActionDescriptor {
        name: "CreateProduct",
        fields: &[
            req("ProductName"),
            req("NodeType"),
            req("DataFormat"),
            opt("AliyunCommodityCode"),
            opt("Description"),
            opt("Id2"),
            opt("ProtocolType"),
            opt("NetType"),
            opt("JoinPermissionId"),
        ],
    },
    action("UpdateProduct"),
    action("QueryProductList"),
    action("QueryProduct"),
    action("DeleteProduct"),
    action("CreateProductTags"),
    action("UpdateProductTags"),
    action("DeleteProductTags"),
    action("ListProductTags"),
    action("ListProductByTags"),
    // Device management.
    action("RegisterDevice"),
    action("QueryDeviceDetail"),
    action("QueryDevice"),
    action("DeleteDevice"),
    action("GetDeviceStatus"),
    action("BatchGetDeviceState"),
    action("DisableThing"),
    action("EnableThing"),
    action("BatchCheckDeviceNames"),
    action("BatchRegisterDeviceWithApplyId"),
    action("BatchRegisterDevice"),
    action("QueryBatchRegisterDeviceStatus"),
    action("QueryPageByApplyId"),
    action("QueryDeviceEventData"),
    action("QueryDevicePropertyData"),
    action("QueryDevicePropertiesData"),
    action("QueryDeviceServiceData"),
    action("InvokeThingService"),
    action("InvokeThingsService"),
    action("QueryDevicePropertyStatus"),
    action("SetDeviceProperty"),
    action("SetDevicesProperty"),
    action("SaveDeviceProp"),
    action("QueryDeviceProp"),
    action("DeleteDeviceProp"),
    action("GetThingTopo"),
    action("NotifyAddThingTopo"),
    action("RemoveThingTopo"),
    action("QueryDeviceStatistics"),
    action("GetGatewayBySubDevice"),
    action("QueryDeviceByTags"),
    action("SetDeviceDesiredProperty"),
    action("QueryDeviceDesiredProperty"),
    action("QueryDeviceFileList"),
    action("QueryDeviceFile"),
    action("DeleteDeviceFile"),
    action("BatchUpdateDeviceNickname"),
    action("QueryLoRaJoinPermissions"),
    action("CreateLoRaNodesTask"),
    action("GetLoraNodesTask"),
    // Device groups.
    action("CreateDeviceGroup"),
    action("DeleteDeviceGroup"),
    action("UpdateDeviceGroup"),
    action("QueryDeviceGroupInfo"),
    action("QueryDeviceGroupList"),
    action("BatchAddDeviceGroupRelations"),
    action("BatchDeleteDeviceGroupRelations"),
    action("SetDeviceGroupTags"),
    action("QueryDeviceGroupTagList"),
    action("QueryDeviceGroupByDevice"),
    action("QuerySuperDeviceGroup"),
    action("QueryDeviceListByDeviceGroup"),
    action("QueryDeviceGroupByTags"),
    // Rule engine.
    action("ListRule"),
    action("CreateRule"),
    action("GetRule"),
    action("UpdateRule"),
    action("DeleteRule"),
    action("ListRuleActions"),
    action("GetRuleAction"),
    action("CreateRuleAction"),
    action("UpdateRuleAction"),
    action("DeleteRuleAction"),
    action("StartRule"),
    action("StopRule"),
    // Topics and routing.
    action("QueryProductTopic"),
    action("CreateProductTopic"),
    action("UpdateProductTopic"),
    action("DeleteProductTopic"),
    action("CreateTopicRouteTable"),
    action("QueryTopicRouteTable"),
    action("QueryTopicReverseRouteTable"),
    action("DeleteTopicRouteTable"),
    // Messaging.
    ActionDescriptor {
        name: "Pub",
        fields: &[
            req("ProductKey"),
            req("TopicFullName"),
            req("MessageContent"),
            opt("Qos"),
        ],
    },
    ActionDescriptor {
        name: "RRpc",
        fields: &[
            req("ProductKey"),
            req("DeviceName"),
            req("RequestBase64Byte"),
            req("Timeout"),
            opt("Topic"),
        ],
    },
    ActionDescriptor {
        name: "PubBroadcast",
        fields: &[
            req("ProductKey"),
            req("TopicFullName"),
            req("MessageContent"),
        ],
    },
    // Device shadow.
    ActionDescriptor {
        name: "GetDeviceShadow",
        fields: &[req("ProductKey"), req("DeviceName")],
    },
    ActionDescriptor {
        name: "UpdateDeviceShadow",
        fields: &[req("ProductKey"), req("DeviceName"), req("ShadowMessage")],
    },
];

static ACTION_INDEX: Lazy<HashMap<&'static str, &'static ActionDescriptor>> =
    Lazy::new(|| ACTIONS.iter().map(|a| (a.name, a)).collect());

/// Look up an action descriptor by wire name.
pub fn lookup(name: &str) -> Option<&'static ActionDescriptor> {
    ACTION_INDEX.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let pub_action = lookup("Pub").expect("Pub must exist");
        assert_eq!(pub_action.name, "Pub");
        assert!(pub_action
            .fields
            .iter()
            .any(|f| f.name == "MessageContent" && f.required));

        assert!(lookup("SelfDestruct").is_none());
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        assert_eq!(ACTION_INDEX.len(), ACTIONS.len());
    }
}
