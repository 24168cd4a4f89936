use crate::core::ConfigProvider;
use crate::utils::error::{Result, ViewError};
use crate::utils::validation::{validate_encoding, validate_path, validate_prefix, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub templates: TemplatesConfig,
    pub resolver: Option<ResolverConfig>,
    pub classifier: Option<ClassifierConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    pub dir: String,
    pub suffix: Option<String>,
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub mobile_prefix: Option<String>,
    pub tablet_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub device_header: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ViewError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ViewError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute environment variables of the form ${VAR_NAME}.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn device_header(&self) -> Option<&str> {
        self.classifier
            .as_ref()
            .and_then(|c| c.device_header.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn template_dir(&self) -> &str {
        &self.templates.dir
    }

    fn template_suffix(&self) -> &str {
        self.templates.suffix.as_deref().unwrap_or(".html")
    }

    fn mobile_prefix(&self) -> &str {
        self.resolver
            .as_ref()
            .and_then(|r| r.mobile_prefix.as_deref())
            .unwrap_or("mobile/")
    }

    fn tablet_prefix(&self) -> &str {
        self.resolver
            .as_ref()
            .and_then(|r| r.tablet_prefix.as_deref())
            .unwrap_or("tablet/")
    }

    fn encoding(&self) -> &str {
        self.templates.encoding.as_deref().unwrap_or("UTF-8")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("templates.dir", self.template_dir())?;
        validate_prefix("resolver.mobile_prefix", self.mobile_prefix())?;
        validate_prefix("resolver.tablet_prefix", self.tablet_prefix())?;
        validate_encoding("templates.encoding", self.encoding())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let toml_content = r#"
[templates]
dir = "./templates"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.template_dir(), "./templates");
        assert_eq!(config.template_suffix(), ".html");
        assert_eq!(config.mobile_prefix(), "mobile/");
        assert_eq!(config.tablet_prefix(), "tablet/");
        assert_eq!(config.encoding(), "UTF-8");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_prefixes() {
        let toml_content = r#"
[templates]
dir = "./templates"

[resolver]
mobile_prefix = "m/"
tablet_prefix = "t/"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.mobile_prefix(), "m/");
        assert_eq!(config.tablet_prefix(), "t/");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_TEMPLATE_DIR", "/srv/templates");

        let toml_content = r#"
[templates]
dir = "${TEST_TEMPLATE_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.template_dir(), "/srv/templates");

        std::env::remove_var("TEST_TEMPLATE_DIR");
    }

    #[test]
    fn test_config_validation_rejects_bad_prefix() {
        let toml_content = r#"
[templates]
dir = "./templates"

[resolver]
mobile_prefix = "mobile"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_encoding() {
        let toml_content = r#"
[templates]
dir = "./templates"
encoding = "latin-1"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[templates]
dir = "./templates"

[classifier]
device_header = "x-device"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.device_header(), Some("x-device"));
    }
}
