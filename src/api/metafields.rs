use crate::api::client::BillingClient;
use crate::domain::metafield::{EntityType, MetaField, MetaFieldGroup};
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn create_meta_field(&self, meta_field: &MetaField) -> Result<i32> {
        self.call("createMetaField", json!({ "metaField": meta_field }))
            .await
    }

    pub async fn get_meta_field(&self, meta_field_id: i32) -> Result<MetaField> {
        self.call("getMetaField", json!({ "metaFieldId": meta_field_id }))
            .await
    }

    pub async fn update_meta_field(&self, meta_field: &MetaField) -> Result<()> {
        self.call_void("updateMetaField", json!({ "metaField": meta_field }))
            .await
    }

    pub async fn delete_meta_field(&self, meta_field_id: i32) -> Result<()> {
        self.call_void("deleteMetaField", json!({ "metaFieldId": meta_field_id }))
            .await
    }

    pub async fn get_meta_fields_for_entity(
        &self,
        entity_type: EntityType,
    ) -> Result<Vec<MetaField>> {
        self.call("getMetaFieldsForEntity", json!({ "entityType": entity_type }))
            .await
    }

    pub async fn create_meta_field_group(&self, group: &MetaFieldGroup) -> Result<i32> {
        self.call("createMetaFieldGroup", json!({ "metaFieldGroup": group }))
            .await
    }

    pub async fn get_meta_field_group(&self, group_id: i32) -> Result<MetaFieldGroup> {
        self.call("getMetaFieldGroup", json!({ "metaFieldGroupId": group_id }))
            .await
    }

    pub async fn update_meta_field_group(&self, group: &MetaFieldGroup) -> Result<()> {
        self.call_void("updateMetaFieldGroup", json!({ "metaFieldGroup": group }))
            .await
    }

    pub async fn delete_meta_field_group(&self, group_id: i32) -> Result<()> {
        self.call_void(
            "deleteMetaFieldGroup",
            json!({ "metaFieldGroupId": group_id }),
        )
        .await
    }

    pub async fn get_meta_field_groups_for_entity(
        &self,
        entity_type: EntityType,
    ) -> Result<Vec<MetaFieldGroup>> {
        self.call(
            "getMetaFieldGroupsForEntity",
            json!({ "entityType": entity_type }),
        )
        .await
    }
}
