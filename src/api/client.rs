use crate::config::ApiConfig;
use crate::utils::error::{BillingError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const MAX_ERROR_BODY: usize = 400;

/// 遠端計費系統的 API 用戶端。
///
/// 每個操作都是 `POST {endpoint}/api/{method}`，參數與回應皆為 JSON。
/// 遠端服務本身是黑盒子，這裡只負責把請求送出去並解讀回應。
pub struct BillingClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
    timeout: Duration,
}

impl BillingClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            token: config.token().map(str::to_string),
            timeout: Duration::from_secs(config.timeout_seconds()),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/api/{}", self.endpoint, method)
    }

    async fn send(&self, method: &str, params: &impl Serialize) -> Result<reqwest::Response> {
        let mut request = self
            .client
            .post(self.method_url(method))
            .timeout(self.timeout)
            .json(params);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} -> {}", method, status);

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            body.truncate(MAX_ERROR_BODY);
            return Err(BillingError::ApiStatusError {
                method: method.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// 呼叫遠端方法並把 JSON 回應解成指定型別。
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: impl Serialize,
    ) -> Result<R> {
        let response = self.send(method, &params).await?;
        Ok(response.json().await?)
    }

    /// 呼叫沒有回傳值的遠端方法。
    pub async fn call_void(&self, method: &str, params: impl Serialize) -> Result<()> {
        self.send(method, &params).await?;
        Ok(())
    }

    /// 呼叫回傳原始位元組的遠端方法（例如發票 PDF）。
    pub async fn call_bytes(&self, method: &str, params: impl Serialize) -> Result<Vec<u8>> {
        let response = self.send(method, &params).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer, token: Option<&str>) -> BillingClient {
        let token_line = token
            .map(|t| format!("token = \"{}\"\n", t))
            .unwrap_or_default();
        let config = ApiConfig::from_toml_str(&format!(
            "[api]\nendpoint = \"{}\"\n{}",
            server.base_url(),
            token_line
        ))
        .unwrap();
        BillingClient::new(&config)
    }

    #[tokio::test]
    async fn test_call_posts_method_envelope_and_decodes_reply() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/getCallerCompanyId")
                .json_body(serde_json::json!({}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!(17));
        });

        let client = client_for(&server, None);
        let company_id: i32 = client
            .call("getCallerCompanyId", serde_json::json!({}))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(company_id, 17);
    }

    #[tokio::test]
    async fn test_call_sends_bearer_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/getCurrencies")
                .header("Authorization", "Bearer secret-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let client = client_for(&server, Some("secret-token"));
        let currencies: Vec<serde_json::Value> = client
            .call("getCurrencies", serde_json::json!({}))
            .await
            .unwrap();

        mock.assert();
        assert!(currencies.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_api_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/deleteOrder");
            then.status(500).body("order is already invoiced");
        });

        let client = client_for(&server, None);
        let err = client
            .call_void("deleteOrder", serde_json::json!({"orderId": 5}))
            .await
            .unwrap_err();

        match err {
            BillingError::ApiStatusError {
                method,
                status,
                body,
            } => {
                assert_eq!(method, "deleteOrder");
                assert_eq!(status, 500);
                assert!(body.contains("already invoiced"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_bytes_returns_raw_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/getPaperInvoicePDF");
            then.status(200).body(&b"%PDF-1.4 fake"[..]);
        });

        let client = client_for(&server, None);
        let bytes = client
            .call_bytes("getPaperInvoicePDF", serde_json::json!({"invoiceId": 1}))
            .await
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
