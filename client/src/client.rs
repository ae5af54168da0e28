use crate::action;
use crate::config::Config;
use crate::credential::Credential;
use crate::params::{CommonParameters, ParameterSet};
use crate::provide_credential::{DefaultCredentialProvider, StaticCredentialProvider};
use crate::region::Region;
use crate::sign_request::{form_body, get_query, Profile, RequestSigner};
use aliyun_iot_core::{Context, Error, ProvideCredential, Result, SigningCredential};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use std::sync::{Arc, Mutex};

/// Generates the per-action convenience methods. Each one attaches the
/// action tag and forwards through [`Client::request`]; nothing else
/// differs between them.
macro_rules! action_methods {
    ($($(#[$meta:meta])* $method:ident => $action:literal;)+) => {
        $(
            $(#[$meta])*
            pub async fn $method(&self, params: ParameterSet) -> Result<http::Response<Bytes>> {
                self.request($action, params).await
            }
        )+
    };
}

/// Client for the IoT management RPC API.
///
/// A client holds an immutable configuration block (credentials, region,
/// API version, transport profile) and is safe to share across tasks:
/// every call builds its own parameter set with a fresh timestamp and
/// nonce.
///
/// Responses are returned unopened; the client never parses a body.
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    region: Region,
    version: String,
    signer: RequestSigner,
    provider: Arc<dyn ProvideCredential<Credential = Credential>>,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl Client {
    /// Create a new client.
    ///
    /// The region is required. A static access key pair in the config is
    /// used when present; otherwise the default credential chain is
    /// consulted on first use. A half-configured key pair is rejected
    /// here instead of failing on every request.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let region = config
            .region_id
            .ok_or_else(|| Error::config_invalid("region id is required"))?;

        let provider = match (&config.access_key_id, &config.access_key_secret) {
            (Some(id), Some(secret)) => {
                DefaultCredentialProvider::new().push_front(StaticCredentialProvider::new(id, secret))
            }
            (None, None) => DefaultCredentialProvider::new(),
            _ => {
                return Err(Error::config_invalid(
                    "access_key_id and access_key_secret must be set together",
                ))
            }
        };

        Ok(Self {
            ctx,
            region,
            version: config.version,
            signer: RequestSigner::new(config.profile),
            provider: Arc::new(provider),
            credential: Arc::new(Mutex::new(None)),
        })
    }

    /// Replace the credential provider.
    ///
    /// Clears any cached credential so the new provider is consulted on
    /// the next request.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.provider = Arc::new(provider);
        self.credential = Arc::new(Mutex::new(None));
        self
    }

    #[cfg(test)]
    pub(crate) fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    async fn credential(&self) -> Result<Credential> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached {
            if cred.is_valid() {
                return Ok(cred);
            }
        }

        let loaded = self.provider.provide_credential(&self.ctx).await?;
        match loaded {
            Some(cred) if cred.is_valid() => {
                *self.credential.lock().expect("lock poisoned") = Some(cred.clone());
                Ok(cred)
            }
            _ => Err(Error::credential_invalid(
                "no usable access key pair found; pass one in the config or \
                 set the ALIBABA_CLOUD_* environment variables",
            )),
        }
    }

    /// Send one API call: compose, sign, serialize per the transport
    /// profile, and hand the request to the transport.
    ///
    /// `action` is the wire name of the operation, `params` its
    /// action-specific fields. The response comes back exactly as the
    /// transport produced it, authentication failures included.
    pub async fn request(
        &self,
        action: &str,
        params: ParameterSet,
    ) -> Result<http::Response<Bytes>> {
        let cred = self.credential().await?;
        let req = self.build_request(action, &params, &cred)?;
        self.ctx.http_send(req).await
    }

    fn build_request(
        &self,
        action: &str,
        params: &ParameterSet,
        cred: &Credential,
    ) -> Result<http::Request<Bytes>> {
        if action::lookup(action).is_none() {
            // Not a gate: unknown actions are forwarded untouched.
            log::debug!("action {action} is not in the catalog");
        }

        let common = CommonParameters {
            access_key_id: cred.access_key_id.clone(),
            region_id: self.region,
            version: self.version.clone(),
            timestamp: self.signer.fresh_timestamp(),
            nonce: self.signer.fresh_nonce(),
        };
        let signed = self
            .signer
            .sign(common.merge(action, params), &cred.access_key_secret);

        log::debug!(
            "signed {action} request, nonce {}",
            signed.get("SignatureNonce").unwrap_or_default()
        );

        let endpoint = self.region.endpoint();
        let req = match self.signer.profile() {
            Profile::PostForm => http::Request::post(format!("{endpoint}/"))
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Bytes::from(form_body(&signed)))?,
            Profile::GetQuery => {
                http::Request::get(format!("{endpoint}/?{}", get_query(&signed)))
                    .body(Bytes::new())?
            }
        };

        Ok(req)
    }
}

impl Client {
    action_methods! {
        /// Create a product.
        create_product => "CreateProduct";
        /// Update the information of a product.
        update_product => "UpdateProduct";
        /// List all products.
        query_product_list => "QueryProductList";
        /// Query the details of a product.
        query_product => "QueryProduct";
        /// Delete a product.
        delete_product => "DeleteProduct";
        /// Create tags for a product.
        create_product_tags => "CreateProductTags";
        /// Update the tags of a product.
        update_product_tags => "UpdateProductTags";
        /// Delete tags from a product.
        delete_product_tags => "DeleteProductTags";
        /// List all tags of a product.
        list_product_tags => "ListProductTags";
        /// List products by tags, paginated.
        list_product_by_tags => "ListProductByTags";
        /// Register a device under a product.
        register_device => "RegisterDevice";
        /// Query the details of a device.
        query_device_detail => "QueryDeviceDetail";
        /// List the devices of a product.
        query_device => "QueryDevice";
        /// Delete a device.
        delete_device => "DeleteDevice";
        /// Query the running state of a device.
        get_device_status => "GetDeviceStatus";
        /// Query the running state of multiple devices of one product.
        batch_get_device_state => "BatchGetDeviceState";
        /// Disable a device.
        disable_thing => "DisableThing";
        /// Re-enable a disabled device.
        enable_thing => "EnableThing";
        /// Check candidate device names for validity.
        batch_check_device_names => "BatchCheckDeviceNames";
        /// Register devices in bulk under a checked apply id.
        batch_register_device_with_apply_id => "BatchRegisterDeviceWithApplyId";
        /// Register devices in bulk with generated names.
        batch_register_device => "BatchRegisterDevice";
        /// Query the state of a bulk registration.
        query_batch_register_device_status => "QueryBatchRegisterDeviceStatus";
        /// Query the devices of a bulk registration.
        query_page_by_apply_id => "QueryPageByApplyId";
        /// Query the event records of a device.
        query_device_event_data => "QueryDeviceEventData";
        /// Query the property records of a device.
        query_device_property_data => "QueryDevicePropertyData";
        /// Query reported property data for several properties at once.
        query_device_properties_data => "QueryDevicePropertiesData";
        /// Query the service invocation records of a device.
        query_device_service_data => "QueryDeviceServiceData";
        /// Invoke a service on one device.
        invoke_thing_service => "InvokeThingService";
        /// Invoke a service on multiple devices.
        invoke_things_service => "InvokeThingsService";
        /// Query the property snapshot of a device.
        query_device_property_status => "QueryDevicePropertyStatus";
        /// Set property values on one device.
        set_device_property => "SetDeviceProperty";
        /// Set property values on multiple devices.
        set_devices_property => "SetDevicesProperty";
        /// Set tags on a device.
        save_device_prop => "SaveDeviceProp";
        /// List the tags of a device.
        query_device_prop => "QueryDeviceProp";
        /// Delete a tag from a device.
        delete_device_prop => "DeleteDeviceProp";
        /// Query the topology of a device.
        get_thing_topo => "GetThingTopo";
        /// Notify a gateway to add a topological relation.
        notify_add_thing_topo => "NotifyAddThingTopo";
        /// Remove the topological relation between a gateway and a sub-device.
        remove_thing_topo => "RemoveThingTopo";
        /// Query device statistics.
        query_device_statistics => "QueryDeviceStatistics";
        /// Query the gateway a sub-device is attached to.
        get_gateway_by_sub_device => "GetGatewayBySubDevice";
        /// Query devices by tags.
        query_device_by_tags => "QueryDeviceByTags";
        /// Set desired property values on a device.
        set_device_desired_property => "SetDeviceDesiredProperty";
        /// Query the desired property values of a device.
        query_device_desired_property => "QueryDeviceDesiredProperty";
        /// List the files a device uploaded to the platform.
        query_device_file_list => "QueryDeviceFileList";
        /// Query one uploaded device file.
        query_device_file => "QueryDeviceFile";
        /// Delete an uploaded device file.
        delete_device_file => "DeleteDeviceFile";
        /// Update device nicknames in bulk.
        batch_update_device_nickname => "BatchUpdateDeviceNickname";
        /// List LoRaWAN join permissions.
        query_lora_join_permissions => "QueryLoRaJoinPermissions";
        /// Create a bulk-registration task for LoRaWAN nodes.
        create_lora_nodes_task => "CreateLoRaNodesTask";
        /// Query the state of a LoRaWAN bulk-registration task.
        get_lora_nodes_task => "GetLoraNodesTask";
        /// Create a device group.
        create_device_group => "CreateDeviceGroup";
        /// Delete a device group.
        delete_device_group => "DeleteDeviceGroup";
        /// Update a device group.
        update_device_group => "UpdateDeviceGroup";
        /// Query the details of a device group.
        query_device_group_info => "QueryDeviceGroupInfo";
        /// List device groups, paginated.
        query_device_group_list => "QueryDeviceGroupList";
        /// Add devices to a group.
        batch_add_device_group_relations => "BatchAddDeviceGroupRelations";
        /// Remove devices from a group, keeping the devices themselves.
        batch_delete_device_group_relations => "BatchDeleteDeviceGroupRelations";
        /// Add, update or delete the tags of a device group.
        set_device_group_tags => "SetDeviceGroupTags";
        /// List the tags of a device group.
        query_device_group_tag_list => "QueryDeviceGroupTagList";
        /// List the groups a device belongs to.
        query_device_group_by_device => "QueryDeviceGroupByDevice";
        /// Query the parent group of a group.
        query_super_device_group => "QuerySuperDeviceGroup";
        /// List the devices in a group.
        query_device_list_by_device_group => "QueryDeviceListByDeviceGroup";
        /// Query device groups by tags.
        query_device_group_by_tags => "QueryDeviceGroupByTags";
        /// List rules, paginated.
        list_rule => "ListRule";
        /// Create a rule on a topic.
        create_rule => "CreateRule";
        /// Query the details of a rule.
        get_rule => "GetRule";
        /// Update a rule.
        update_rule => "UpdateRule";
        /// Delete a rule.
        delete_rule => "DeleteRule";
        /// List the actions of a rule.
        list_rule_actions => "ListRuleActions";
        /// Query the details of a rule action.
        get_rule_action => "GetRuleAction";
        /// Create an action under a rule.
        create_rule_action => "CreateRuleAction";
        /// Update a rule action.
        update_rule_action => "UpdateRuleAction";
        /// Delete a rule action.
        delete_rule_action => "DeleteRuleAction";
        /// Start a rule.
        start_rule => "StartRule";
        /// Stop a rule.
        stop_rule => "StopRule";
        /// List the topic categories of a product.
        query_product_topic => "QueryProductTopic";
        /// Create a topic category for a product.
        create_product_topic => "CreateProductTopic";
        /// Update a topic category.
        update_product_topic => "UpdateProductTopic";
        /// Delete a topic category.
        delete_product_topic => "DeleteProductTopic";
        /// Create a message route between topics.
        create_topic_route_table => "CreateTopicRouteTable";
        /// Query the route table of a topic.
        query_topic_route_table => "QueryTopicRouteTable";
        /// Query the reverse route table of a topic.
        query_topic_reverse_route_table => "QueryTopicReverseRouteTable";
        /// Delete a message route between topics.
        delete_topic_route_table => "DeleteTopicRouteTable";
        /// Publish a message to a topic.
        pub_message => "Pub";
        /// Send a request to a device and wait for its reply.
        r_rpc => "RRpc";
        /// Publish a broadcast message to all subscribed devices.
        pub_broadcast => "PubBroadcast";
        /// Query the shadow of a device.
        get_device_shadow => "GetDeviceShadow";
        /// Update the shadow of a device.
        update_device_shadow => "UpdateDeviceShadow";
    }
}
