use crate::core::ConfigProvider;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CART_API_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.endpoint", &self.api.endpoint)?;
        validation::validate_path("storage.path", &self.storage.path)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for FileConfig {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.api.timeout_seconds
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
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
endpoint = "http://localhost:3333"
timeout_seconds = 10

[storage]
path = "./cart-data"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.endpoint, "http://localhost:3333");
        assert_eq!(config.api.timeout_seconds, Some(10));
        assert_eq!(config.storage.path, "./cart-data");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CART_TEST_ENDPOINT", "https://shop.example.com");

        let toml_content = r#"
[api]
endpoint = "${CART_TEST_ENDPOINT}"

[storage]
path = "./cart-data"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.endpoint, "https://shop.example.com");

        std::env::remove_var("CART_TEST_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[api]
endpoint = "${CART_UNSET_VARIABLE}"

[storage]
path = "./cart-data"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.endpoint, "${CART_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let toml_content = r#"
[api]
endpoint = "not-a-url"

[storage]
path = "./cart-data"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[api]
endpoint = "https://api.example.com"

[storage]
path = "./cart-data"
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.endpoint, "https://api.example.com");
        assert_eq!(config.api.timeout_seconds, None);
    }
}
