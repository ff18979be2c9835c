use crate::api::BillingClient;
use crate::app::sequence::Chapter;
use crate::domain::metafield::{DataType, EntityType, MetaField, MetaFieldGroup, MetaFieldValue};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct MetaFieldsChapter;

#[async_trait]
impl Chapter for MetaFieldsChapter {
    fn name(&self) -> &str {
        "meta-fields"
    }

    fn description(&self) -> &str {
        "Meta fields and meta field groups"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    // 給客戶用的整數動態欄位，預設值 100
    let meta_field = build_meta_field(
        company_id,
        "Salary",
        DataType::Integer,
        EntityType::Customer,
        false,
        false,
        1,
        true,
        serde_json::json!(100),
    );
    let meta_field_id = api.create_meta_field(&meta_field).await?;

    let mut meta_field = api.get_meta_field(meta_field_id).await?;

    if let Some(default_value) = meta_field.default_value.as_mut() {
        default_value.value = serde_json::json!(200);
    }
    api.update_meta_field(&meta_field).await?;

    api.delete_meta_field(meta_field_id).await?;

    let meta_fields = api.get_meta_fields_for_entity(EntityType::Customer).await?;
    tracing::info!("Customer entity has {} meta fields", meta_fields.len());

    // 動態欄位群組
    let meta_field_group =
        build_meta_field_group(company_id, EntityType::Customer, 1, meta_fields);
    let group_id = api.create_meta_field_group(&meta_field_group).await?;

    let mut meta_field_group = api.get_meta_field_group(group_id).await?;

    meta_field_group.name = "Updated Group".to_string();
    api.update_meta_field_group(&meta_field_group).await?;

    api.delete_meta_field_group(group_id).await?;

    let groups = api
        .get_meta_field_groups_for_entity(EntityType::Customer)
        .await?;
    tracing::info!("Customer entity has {} meta field groups", groups.len());

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn build_meta_field(
    company_id: i32,
    name: &str,
    data_type: DataType,
    entity_type: EntityType,
    disabled: bool,
    mandatory: bool,
    display_order: i32,
    primary: bool,
    default_value: serde_json::Value,
) -> MetaField {
    MetaField {
        entity_id: company_id,
        name: name.to_string(),
        data_type,
        entity_type,
        disabled,
        mandatory,
        display_order,
        // 從設定頁建立的動態欄位是 primary，臨時建立的不是
        primary,
        default_value: Some(MetaFieldValue {
            field_name: name.to_string(),
            disabled,
            mandatory,
            display_order,
            data_type,
            value: default_value,
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn build_meta_field_group(
    company_id: i32,
    entity_type: EntityType,
    display_order: i32,
    meta_fields: Vec<MetaField>,
) -> MetaFieldGroup {
    MetaFieldGroup {
        entity_id: company_id,
        name: "Group Name".to_string(),
        entity_type,
        display_order,
        meta_fields,
        ..Default::default()
    }
}

pub fn build_meta_field_value(
    field_name: &str,
    disabled: bool,
    mandatory: bool,
    data_type: DataType,
    display_order: i32,
    value: serde_json::Value,
) -> MetaFieldValue {
    MetaFieldValue {
        field_name: field_name.to_string(),
        disabled,
        mandatory,
        data_type,
        display_order,
        value,
        ..Default::default()
    }
}
