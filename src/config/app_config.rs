use crate::domain::model::Registration;
use crate::utils::error::{Result, SolverError};
use crate::utils::validation::{
    require_non_empty, validate_path, validate_url, Validate, PLACEHOLDER_PATTERN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// On-disk configuration. Every value is optional here so that command line
/// flags and environment variables can fill the gaps before `resolve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSection {
    pub name: Option<String>,
    #[serde(alias = "regNo")]
    pub reg_no: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "generateWebhookUrl")]
    pub generate_webhook_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub dir: Option<String>,
}

/// Values that take precedence over the file, usually from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub reg_no: Option<String>,
    pub email: Option<String>,
    pub generate_webhook_url: Option<String>,
    pub output_dir: Option<String>,
}

/// Everything one run of the flow needs.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub generate_webhook_url: String,
    pub registration: Registration,
    pub output_dir: PathBuf,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Missing files are not an error; the defaults are returned instead.
    pub fn from_optional_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "No configuration file at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SolverError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written
    /// and are rejected later by `resolve`.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(PLACEHOLDER_PATTERN).map_err(|e| SolverError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        fn set(slot: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set(&mut self.app.name, overrides.name);
        set(&mut self.app.reg_no, overrides.reg_no);
        set(&mut self.app.email, overrides.email);
        set(&mut self.app.generate_webhook_url, overrides.generate_webhook_url);
        set(&mut self.output.dir, overrides.output_dir);
    }

    pub fn resolve(self) -> Result<FlowConfig> {
        let config = FlowConfig {
            generate_webhook_url: require_non_empty(
                "app.generate_webhook_url",
                self.app.generate_webhook_url,
            )?,
            registration: Registration {
                name: require_non_empty("app.name", self.app.name)?,
                reg_no: require_non_empty("app.reg_no", self.app.reg_no)?,
                email: require_non_empty("app.email", self.app.email)?,
            },
            output_dir: PathBuf::from(
                self.output
                    .dir
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Validate for FlowConfig {
    fn validate(&self) -> Result<()> {
        validate_url("app.generate_webhook_url", &self.generate_webhook_url)?;
        validate_path("output.dir", &self.output_dir.to_string_lossy())?;
        Ok(())
    }
}
