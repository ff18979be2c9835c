use crate::api::BillingClient;
use crate::app::sequence::Chapter;
use crate::domain::currency::Currency;
use crate::utils::error::{BillingError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct CurrenciesChapter;

#[async_trait]
impl Chapter for CurrenciesChapter {
    fn name(&self) -> &str {
        "currencies"
    }

    fn description(&self) -> &str {
        "List, update and create currencies"
    }

    async fn run(&self, api: &BillingClient) -> Result<()> {
        run(api).await
    }
}

pub async fn run(api: &BillingClient) -> Result<()> {
    let currencies = api.get_currencies().await?;
    tracing::info!("Currencies:");
    for currency in &currencies {
        tracing::info!("{:?}", currency);
    }

    let today = chrono::Utc::now().date_naive();

    // 更新單一幣別
    let mut eur_currency = currency_by_code("EUR", &currencies)?;
    eur_currency.from_date = Some(today);
    eur_currency.rate = Some(Decimal::from(10));
    eur_currency.sys_rate = Some(Decimal::from(10));
    api.update_currency(&eur_currency).await?;

    // 一次更新多個幣別
    let mut cad_currency = currency_by_code("CAD", &currencies)?;
    cad_currency.from_date = Some(today);
    cad_currency.rate = Some(Decimal::ONE);
    cad_currency.sys_rate = Some(Decimal::ONE);
    api.update_currencies(&[eur_currency, cad_currency]).await?;

    let caller_currency_id = api.get_caller_currency_id().await?;
    tracing::info!("Caller currency id: {}", caller_currency_id);

    let new_currency = build_currency(
        "Imaginary Currency",
        "i",
        "IMC",
        "IL",
        None,
        Some(Decimal::ONE),
    );
    let new_currency_id = api.create_currency(&new_currency).await?;
    tracing::info!("Created currency with id: {}", new_currency_id);

    Ok(())
}

pub fn build_currency(
    description: &str,
    symbol: &str,
    code: &str,
    country_code: &str,
    rate: Option<Decimal>,
    sys_rate: Option<Decimal>,
) -> Currency {
    Currency {
        description: description.to_string(),
        symbol: symbol.to_string(),
        code: code.to_string(),
        country_code: country_code.to_string(),
        in_use: true,
        rate,
        sys_rate,
        from_date: None,
        ..Default::default()
    }
}

fn currency_by_code(code: &str, currencies: &[Currency]) -> Result<Currency> {
    currencies
        .iter()
        .find(|currency| currency.code == code)
        .cloned()
        .ok_or_else(|| BillingError::ProcessingError {
            message: format!("currency {} is not configured", code),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_by_code_finds_match() {
        let currencies = vec![
            build_currency("Euro", "€", "EUR", "DE", None, None),
            build_currency("Dollar", "$", "USD", "US", None, None),
        ];

        assert_eq!(currency_by_code("USD", &currencies).unwrap().symbol, "$");
        assert!(currency_by_code("JPY", &currencies).is_err());
    }
}
