use crate::core::chart::Language;
use crate::domain::model::{Gender, Measurement};
use crate::utils::error::{Result, SizerError};
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_USERS_PATH: &str = "./data/body-calculator-users.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackConfig {
    pub enabled: Option<bool>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub users_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SizerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SizerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FEEDBACK_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SizerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Feedback is on only when explicitly enabled or when an endpoint is set.
    pub fn feedback_enabled(&self) -> bool {
        self.feedback
            .enabled
            .unwrap_or(self.feedback.endpoint.is_some())
    }

    pub fn feedback_endpoint(&self) -> Option<&str> {
        self.feedback.endpoint.as_deref()
    }

    pub fn feedback_timeout(&self) -> Duration {
        Duration::from_secs(
            self.feedback
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn users_path(&self) -> &str {
        self.storage
            .users_path
            .as_deref()
            .unwrap_or(DEFAULT_USERS_PATH)
    }

    pub fn default_gender(&self) -> Gender {
        self.defaults.gender.unwrap_or_default()
    }

    pub fn default_measurement(&self) -> Measurement {
        let fallback = Measurement::default();
        Measurement::clamped(
            self.defaults.height_cm.unwrap_or(fallback.height_cm),
            self.defaults.weight_kg.unwrap_or(fallback.weight_kg),
        )
    }

    pub fn language(&self) -> Language {
        self.defaults.language.unwrap_or_default()
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format.unwrap_or_default()
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.feedback_enabled() {
            let endpoint = self.feedback_endpoint().ok_or_else(|| SizerError::MissingConfigError {
                field: "feedback.endpoint".to_string(),
            })?;
            validate_url("feedback.endpoint", endpoint)?;
        }

        if let Some(timeout) = self.feedback.timeout_seconds {
            validate_positive_number("feedback.timeout_seconds", timeout, 1)?;
        }

        validate_path("storage.users_path", self.users_path())?;

        if let Some(height) = self.defaults.height_cm {
            validate_range("defaults.height_cm", height, 120.0, 220.0)?;
        }
        if let Some(weight) = self.defaults.weight_kg {
            validate_range("defaults.weight_kg", weight, 30.0, 200.0)?;
        }

        Ok(())
    }
}

impl Validate for AppConfig {
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
    fn test_parse_full_config() {
        let toml_content = r#"
[feedback]
endpoint = "https://script.example.com/macros/s/abc/exec"
timeout_seconds = 3

[storage]
users_path = "./tmp/users.json"

[defaults]
gender = "female"
height_cm = 160.0
weight_kg = 55.0
language = "ar"

[logging]
format = "json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert!(config.feedback_enabled());
        assert_eq!(config.feedback_timeout(), Duration::from_secs(3));
        assert_eq!(config.users_path(), "./tmp/users.json");
        assert_eq!(config.default_gender(), Gender::Female);
        assert_eq!(config.default_measurement().height_cm, 160.0);
        assert_eq!(config.language(), Language::Ar);
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert!(!config.feedback_enabled());
        assert_eq!(config.users_path(), DEFAULT_USERS_PATH);
        assert_eq!(config.default_measurement(), Measurement::default());
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SCRUB_SIZER_TEST_ENDPOINT", "https://feedback.test/exec");

        let toml_content = r#"
[feedback]
endpoint = "${SCRUB_SIZER_TEST_ENDPOINT}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.feedback_endpoint(), Some("https://feedback.test/exec"));

        std::env::remove_var("SCRUB_SIZER_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str("[feedback]\nenabled = true\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SizerError::MissingConfigError { .. })
        ));

        let config = AppConfig::from_toml_str("[feedback]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[defaults]\nheight_cm = 250.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\ngender = \"male\"\nweight_kg = 90.5\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_gender(), Gender::Male);
        assert_eq!(config.default_measurement().weight_kg, 90.5);
    }
}
