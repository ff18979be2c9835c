use crate::api::client::BillingClient;
use crate::domain::item::{Item, ItemCategory};
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn create_item_category(&self, category: &ItemCategory) -> Result<i32> {
        self.call("createItemCategory", json!({ "itemType": category }))
            .await
    }

    pub async fn get_item_category_by_id(&self, category_id: i32) -> Result<ItemCategory> {
        self.call("getItemCategoryById", json!({ "itemTypeId": category_id }))
            .await
    }

    pub async fn update_item_category(&self, category: &ItemCategory) -> Result<()> {
        self.call_void("updateItemCategory", json!({ "itemType": category }))
            .await
    }

    pub async fn get_all_item_categories(&self) -> Result<Vec<ItemCategory>> {
        self.call("getAllItemCategories", json!({})).await
    }

    pub async fn get_all_item_categories_by_entity_id(
        &self,
        entity_id: i32,
    ) -> Result<Vec<ItemCategory>> {
        self.call(
            "getAllItemCategoriesByEntityId",
            json!({ "entityId": entity_id }),
        )
        .await
    }

    pub async fn delete_item_category(&self, category_id: i32) -> Result<()> {
        self.call_void("deleteItemCategory", json!({ "itemTypeId": category_id }))
            .await
    }

    pub async fn create_item(&self, item: &Item) -> Result<i32> {
        self.call("createItem", json!({ "item": item })).await
    }

    pub async fn get_item_id(&self, product_code: &str) -> Result<i32> {
        self.call("getItemID", json!({ "number": product_code }))
            .await
    }

    /// `user_id` 與 `pricing_fields` 可為 None，此時回傳預設定價。
    pub async fn get_item(
        &self,
        item_id: i32,
        user_id: Option<i32>,
        pricing_fields: Option<&str>,
    ) -> Result<Item> {
        self.call(
            "getItem",
            json!({
                "itemId": item_id,
                "userId": user_id,
                "pricingFields": pricing_fields,
            }),
        )
        .await
    }

    pub async fn update_item(&self, item: &Item) -> Result<()> {
        self.call_void("updateItem", json!({ "item": item })).await
    }

    pub async fn get_all_items(&self) -> Result<Vec<Item>> {
        self.call("getAllItems", json!({})).await
    }

    pub async fn get_item_by_category(&self, category_id: i32) -> Result<Vec<Item>> {
        self.call("getItemByCategory", json!({ "itemTypeId": category_id }))
            .await
    }

    pub async fn get_all_items_by_entity_id(&self, entity_id: i32) -> Result<Vec<Item>> {
        self.call("getAllItemsByEntityId", json!({ "entityId": entity_id }))
            .await
    }

    pub async fn delete_item(&self, item_id: i32) -> Result<()> {
        self.call_void("deleteItem", json!({ "itemId": item_id }))
            .await
    }
}
