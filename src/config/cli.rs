use crate::config::app_config::{AppConfig, ConfigOverrides, FlowConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "webhook-solver")]
#[command(about = "Generate a webhook, pick the SQL answer for a registration number and submit it")]
pub struct CliArgs {
    /// Path to TOML configuration file (optional)
    #[arg(short, long, default_value = "application.toml")]
    pub config: PathBuf,

    #[arg(long, env = "SOLVER_NAME")]
    pub name: Option<String>,

    #[arg(long, env = "SOLVER_REG_NO")]
    pub reg_no: Option<String>,

    #[arg(long, env = "SOLVER_EMAIL")]
    pub email: Option<String>,

    /// Address of the generate webhook endpoint
    #[arg(long, env = "SOLVER_GENERATE_WEBHOOK_URL")]
    pub endpoint: Option<String>,

    /// Directory for final-query.txt and solution.sql
    #[arg(long, env = "SOLVER_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            name: self.name.clone(),
            reg_no: self.reg_no.clone(),
            email: self.email.clone(),
            generate_webhook_url: self.endpoint.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    /// File first, then flags and environment on top.
    pub fn load_config(&self) -> Result<FlowConfig> {
        let mut config = AppConfig::from_optional_file(&self.config)?;
        config.apply_overrides(self.overrides());
        config.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Built by hand so exported SOLVER_* variables cannot leak in.
    fn bare_args(config: PathBuf) -> CliArgs {
        CliArgs {
            config,
            name: None,
            reg_no: None,
            email: None,
            endpoint: None,
            output_dir: None,
            verbose: false,
            json_logs: false,
        }
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[app]
name = "From File"
reg_no = "REG001"
email = "file@example.com"
generate_webhook_url = "https://api.example.com/generateWebhook"
"#,
            )
            .unwrap();

        let args = CliArgs {
            reg_no: Some("REG002".to_string()),
            output_dir: Some("custom".to_string()),
            ..bare_args(temp_file.path().to_path_buf())
        };

        let config = args.load_config().unwrap();
        assert_eq!(config.registration.name, "From File");
        assert_eq!(config.registration.reg_no, "REG002");
        assert_eq!(config.output_dir, PathBuf::from("custom"));
    }

    #[test]
    fn test_flags_alone_are_enough() {
        let dir = tempfile::TempDir::new().unwrap();

        let args = CliArgs {
            name: Some("Jane".to_string()),
            reg_no: Some("REG12347".to_string()),
            email: Some("jane@example.com".to_string()),
            endpoint: Some("http://localhost:9000/generateWebhook".to_string()),
            ..bare_args(dir.path().join("application.toml"))
        };

        let config = args.load_config().unwrap();
        assert_eq!(config.generate_webhook_url, "http://localhost:9000/generateWebhook");
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_command_line_flags_are_parsed() {
        // Every flag is passed explicitly, so environment fallbacks never apply.
        let args = CliArgs::parse_from([
            "webhook-solver",
            "--config",
            "custom.toml",
            "--name",
            "Jane",
            "--reg-no",
            "REG12347",
            "--email",
            "jane@example.com",
            "--endpoint",
            "http://localhost:9000/generateWebhook",
            "--output-dir",
            "answers",
            "--verbose",
        ]);

        assert_eq!(args.config, PathBuf::from("custom.toml"));
        assert_eq!(args.reg_no.as_deref(), Some("REG12347"));
        assert_eq!(args.output_dir.as_deref(), Some("answers"));
        assert!(args.verbose);
        assert!(!args.json_logs);
    }
}
