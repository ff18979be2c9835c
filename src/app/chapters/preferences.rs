use crate::api::BillingClient;
use crate::app::sequence::Chapter;
use crate::domain::constants;
use crate::domain::preference::{Preference, PreferenceType};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct PreferencesChapter;

#[async_trait]
impl Chapter for PreferencesChapter {
    fn name(&self) -> &str {
        "preferences"
    }

    fn description(&self) -> &str {
        "Read and update company preferences"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    // 更新單一偏好設定
    let create_credentials_by_default = Preference::new(
        PreferenceType::new(constants::PREFERENCE_CREATE_CREDENTIALS_BY_DEFAULT),
        "1",
    );
    api.update_preference(&create_credentials_by_default).await?;

    // 一次更新多個
    let preferences = vec![
        Preference::new(
            PreferenceType::new(constants::PREFERENCE_PARTNER_DEFAULT_COMMISSION_TYPE),
            "INVOICE",
        ),
        Preference::new(
            PreferenceType::new(constants::PREFERENCE_FORGOT_PASSWORD_EXPIRATION),
            "12",
        ),
    ];
    api.update_preferences(&preferences).await?;

    let next_invoice_number = api
        .get_preference(constants::PREFERENCE_INVOICE_NUMBER)
        .await?;
    tracing::info!("Next invoice number: {}", next_invoice_number.value);

    Ok(())
}
