use crate::api::client::BillingClient;
use crate::domain::preference::Preference;
use crate::utils::error::Result;
use serde_json::json;

impl BillingClient {
    pub async fn update_preference(&self, preference: &Preference) -> Result<()> {
        self.call_void("updatePreference", json!({ "preference": preference }))
            .await
    }

    pub async fn update_preferences(&self, preferences: &[Preference]) -> Result<()> {
        self.call_void("updatePreferences", json!({ "preferences": preferences }))
            .await
    }

    pub async fn get_preference(&self, preference_type_id: i32) -> Result<Preference> {
        self.call(
            "getPreference",
            json!({ "preferenceTypeId": preference_type_id }),
        )
        .await
    }
}
