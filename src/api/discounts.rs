use crate::api::client::BillingClient;
use crate::domain::discount::Discount;
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn create_or_update_discount(&self, discount: &Discount) -> Result<i32> {
        self.call("createOrUpdateDiscount", json!({ "discount": discount }))
            .await
    }

    pub async fn get_discount(&self, discount_id: i32) -> Result<Discount> {
        self.call("getDiscountWS", json!({ "discountId": discount_id }))
            .await
    }

    pub async fn delete_discount(&self, discount_id: i32) -> Result<()> {
        self.call_void("deleteDiscount", json!({ "discountId": discount_id }))
            .await
    }
}
