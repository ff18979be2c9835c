use crate::api::BillingClient;
use crate::app::chapters::sample_name;
use crate::app::sequence::Chapter;
use crate::domain::discount::{Discount, DiscountStrategyType};
use crate::utils::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct DiscountsChapter;

#[async_trait]
impl Chapter for DiscountsChapter {
    fn name(&self) -> &str {
        "discounts"
    }

    fn description(&self) -> &str {
        "Create, fetch and delete discounts"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    let discount = build_discount(company_id, Decimal::from(10));
    let discount_id = api.create_or_update_discount(&discount).await?;

    let discount = api.get_discount(discount_id).await?;
    tracing::info!("Discount: {:?}", discount);

    api.delete_discount(discount_id).await?;

    Ok(())
}

pub fn build_discount(company_id: i32, rate: Decimal) -> Discount {
    Discount {
        entity_id: company_id,
        code: sample_name("disc"),
        description: sample_name("discName"),
        strategy: DiscountStrategyType::OneTimePercentage,
        rate,
        ..Default::default()
    }
}
