use crate::api::client::BillingClient;
use crate::domain::currency::Currency;
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn get_currencies(&self) -> Result<Vec<Currency>> {
        self.call("getCurrencies", json!({})).await
    }

    pub async fn update_currency(&self, currency: &Currency) -> Result<()> {
        self.call_void("updateCurrency", json!({ "currency": currency }))
            .await
    }

    pub async fn update_currencies(&self, currencies: &[Currency]) -> Result<()> {
        self.call_void("updateCurrencies", json!({ "currencies": currencies }))
            .await
    }

    pub async fn create_currency(&self, currency: &Currency) -> Result<i32> {
        self.call("createCurrency", json!({ "currency": currency }))
            .await
    }
}
