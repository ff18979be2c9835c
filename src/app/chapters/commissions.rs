use crate::api::BillingClient;
use crate::app::chapters::{account_types, customers, date};
use crate::app::sequence::Chapter;
use crate::domain::constants;
use crate::domain::partner::{CommissionProcessConfiguration, Partner, PartnerType};
use crate::domain::user::User;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct CommissionsChapter;

#[async_trait]
impl Chapter for CommissionsChapter {
    fn name(&self) -> &str {
        "commissions"
    }

    fn description(&self) -> &str {
        "Agents (partners) and the commission process"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let company_id = api.get_caller_company_id().await?;

    let acc_type_id = api
        .create_account_type(&account_types::build_account_type(company_id))
        .await?;

    // 建立兩個代理商
    let user_one = customers::build_user(acc_type_id, constants::PARTNER_ROLE_ID, company_id);
    let partner_one = build_partner(&user_one);
    let partner_one_id = api.create_partner(&user_one, &partner_one).await?;

    let user_two = customers::build_user(acc_type_id, constants::PARTNER_ROLE_ID, company_id);
    let partner_two = build_partner(&user_two);
    let partner_two_id = api.create_partner(&user_two, &partner_two).await?;

    let mut partner_one = api.get_partner(partner_one_id).await?;
    tracing::info!("Partner one: {:?}", partner_one);
    let partner_two = api.get_partner(partner_two_id).await?;
    tracing::info!("Partner two: {:?}", partner_two);

    // 升級成主代理商
    partner_one.partner_type = PartnerType::Master;
    let user_one = api.get_user(partner_one.user_id).await?;
    api.update_partner(&user_one, &partner_one).await?;

    api.delete_partner(partner_two_id).await?;

    // 佣金流程設定與觸發
    let configuration = build_commission_configuration(company_id);
    api.create_update_commission_process_configuration(&configuration)
        .await?;

    api.calculate_partner_commissions().await?;

    let commission_runs = api.get_all_commission_runs().await?;
    let last_run = commission_runs.last();
    tracing::info!("Commission run: {:?}", last_run);

    if let Some(run) = last_run {
        let commissions = api.get_commissions_by_process_run_id(run.id).await?;
        tracing::info!("Run {} produced {} commissions", run.id, commissions.len());
    }

    let running = api.is_partner_commission_running().await?;
    tracing::info!("Commission process running: {}", running);

    Ok(())
}

pub fn build_partner(user: &User) -> Partner {
    Partner {
        user_id: user.user_id,
        partner_type: PartnerType::Standard,
        ..Default::default()
    }
}

pub fn build_commission_configuration(company_id: i32) -> CommissionProcessConfiguration {
    CommissionProcessConfiguration {
        entity_id: company_id,
        next_run_date: Some(date(2000, 2, 1)),
        period_unit_id: constants::PERIOD_UNIT_MONTH,
        period_value: 1,
    }
}
