use crate::utils::error::{BillingError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub api: ApiSection,
    pub assets: Option<AssetsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsSection {
    pub import_file: Option<String>,
    pub error_file: Option<String>,
}

impl ApiConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BillingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BillingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BILLING_API_TOKEN})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn endpoint(&self) -> &str {
        &self.api.endpoint
    }

    pub fn token(&self) -> Option<&str> {
        self.api.token.as_deref()
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(30)
    }

    pub fn asset_import_file(&self) -> &str {
        self.assets
            .as_ref()
            .and_then(|a| a.import_file.as_deref())
            .unwrap_or("data/assets.csv")
    }

    pub fn asset_error_file(&self) -> &str {
        self.assets
            .as_ref()
            .and_then(|a| a.error_file.as_deref())
            .unwrap_or("data/assets-errors.csv")
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("api.endpoint", &self.api.endpoint)?;

        if let Some(token) = &self.api.token {
            crate::utils::validation::validate_non_empty_string("api.token", token)?;
        }

        if let Some(timeout) = self.api.timeout_seconds {
            crate::utils::validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[api]
endpoint = "https://billing.example.com"
token = "secret-token"
timeout_seconds = 10
"#;

        let config = ApiConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://billing.example.com");
        assert_eq!(config.token(), Some("secret-token"));
        assert_eq!(config.timeout_seconds(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_when_sections_missing() {
        let config = ApiConfig::from_toml_str("[api]\nendpoint = \"http://localhost:8080\"\n")
            .unwrap();

        assert_eq!(config.timeout_seconds(), 30);
        assert_eq!(config.asset_import_file(), "data/assets.csv");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_BILLING_ENDPOINT", "https://test.billing.com");

        let toml_content = r#"
[api]
endpoint = "${TEST_BILLING_ENDPOINT}"
"#;

        let config = ApiConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), "https://test.billing.com");

        std::env::remove_var("TEST_BILLING_ENDPOINT");
    }

    #[test]
    fn test_unresolved_env_var_fails_url_validation() {
        let config = ApiConfig::from_toml_str("[api]\nendpoint = \"${NOT_SET_ANYWHERE}\"\n")
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let config = ApiConfig::from_toml_str(
            "[api]\nendpoint = \"not-a-url\"\ntoken = \"t\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = ApiConfig::from_toml_str(
            "[api]\nendpoint = \"http://localhost\"\ntimeout_seconds = 0\n",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
endpoint = "https://billing.example.com"

[assets]
import_file = "fixtures/assets.csv"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ApiConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.asset_import_file(), "fixtures/assets.csv");
    }
}
