use crate::api::BillingClient;
use crate::app::sequence::Chapter;
use crate::domain::plugin::Plugin;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub struct PluginsChapter;

const GENERIC_CATEGORY_ID: i32 = 17;
const GENERIC_INTERFACE_NAME: &str = "billing.server.system.event.task.InternalEventsTask";
const ORDER_STATUS_TASK_CLASS_NAME: &str = "billing.server.order.task.OrderChangeApplyOrderStatusTask";

#[async_trait]
impl Chapter for PluginsChapter {
    fn name(&self) -> &str {
        "plugins"
    }

    fn description(&self) -> &str {
        "Plugin types, plugin categories and plugin instances"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    // 插件分類可以用 id 或介面名稱查
    let category = api.get_plugin_type_category(GENERIC_CATEGORY_ID).await?;
    tracing::info!("Plugin category with id {}: {:?}", GENERIC_CATEGORY_ID, category);

    let _category = api
        .get_plugin_type_category_by_interface_name(GENERIC_INTERFACE_NAME)
        .await?;

    // 插件類型可以用類別名稱或 id 查
    let plugin_type = api
        .get_plugin_type_by_class_name(ORDER_STATUS_TASK_CLASS_NAME)
        .await?;
    tracing::info!(
        "Plugin type with class name {}: {:?}",
        ORDER_STATUS_TASK_CLASS_NAME,
        plugin_type
    );

    let plugin_type_id = plugin_type.id;
    let _plugin_type = api.get_plugin_type(plugin_type_id).await?;

    // 由插件類型建立一個插件實例
    let parameters = HashMap::new();
    let plugin = build_plugin(plugin_type_id, 100, company_id, parameters);
    let plugin_id = api.create_plugin(&plugin).await?;

    let mut plugin = api.get_plugin(plugin_id).await?;
    tracing::info!("Plugin with id {}: {:?}", plugin_id, plugin);

    plugin.notes = Some("This plugin has been updated!".to_string());
    api.update_plugin(&plugin).await?;

    api.delete_plugin(plugin_id).await?;

    let plugins = api
        .get_plugins(company_id, ORDER_STATUS_TASK_CLASS_NAME)
        .await?;
    tracing::info!("Company has {} plugins of that class", plugins.len());

    // 只有在該類型僅有一個插件時才查得到
    let _plugin = api.get_plugin_by_type_id(plugin_type_id).await?;

    Ok(())
}

pub fn build_plugin(
    type_id: i32,
    processing_order: i32,
    company_id: i32,
    parameters: HashMap<String, String>,
) -> Plugin {
    Plugin {
        type_id,
        processing_order,
        owning_entity_id: company_id,
        parameters,
        ..Default::default()
    }
}
