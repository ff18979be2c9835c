use crate::api::client::BillingClient;
use crate::domain::plugin::{Plugin, PluginType, PluginTypeCategory};
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn get_plugin_type_category(&self, category_id: i32) -> Result<PluginTypeCategory> {
        self.call("getPluginTypeCategory", json!({ "categoryId": category_id }))
            .await
    }

    pub async fn get_plugin_type_category_by_interface_name(
        &self,
        interface_name: &str,
    ) -> Result<PluginTypeCategory> {
        self.call(
            "getPluginTypeCategoryByInterfaceName",
            json!({ "interfaceName": interface_name }),
        )
        .await
    }

    pub async fn get_plugin_type_by_class_name(&self, class_name: &str) -> Result<PluginType> {
        self.call(
            "getPluginTypeWSByClassName",
            json!({ "className": class_name }),
        )
        .await
    }

    pub async fn get_plugin_type(&self, plugin_type_id: i32) -> Result<PluginType> {
        self.call("getPluginTypeWS", json!({ "pluginTypeId": plugin_type_id }))
            .await
    }

    pub async fn create_plugin(&self, plugin: &Plugin) -> Result<i32> {
        self.call("createPlugin", json!({ "plugin": plugin })).await
    }

    pub async fn get_plugin(&self, plugin_id: i32) -> Result<Plugin> {
        self.call("getPluginWS", json!({ "pluginId": plugin_id }))
            .await
    }

    pub async fn update_plugin(&self, plugin: &Plugin) -> Result<()> {
        self.call_void("updatePlugin", json!({ "plugin": plugin }))
            .await
    }

    pub async fn delete_plugin(&self, plugin_id: i32) -> Result<()> {
        self.call_void("deletePlugin", json!({ "pluginId": plugin_id }))
            .await
    }

    pub async fn get_plugins(&self, entity_id: i32, class_name: &str) -> Result<Vec<Plugin>> {
        self.call(
            "getPluginsWS",
            json!({ "entityId": entity_id, "className": class_name }),
        )
        .await
    }

    /// 只在該類型僅有一個插件時可用
    pub async fn get_plugin_by_type_id(&self, plugin_type_id: i32) -> Result<Plugin> {
        self.call(
            "getPluginWSByTypeId",
            json!({ "pluginTypeId": plugin_type_id }),
        )
        .await
    }
}
