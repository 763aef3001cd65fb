use crate::utils::error::{Result, SolverError};
use regex::Regex;
use url::Url;

/// `${VAR}` reference to an environment variable.
pub const PLACEHOLDER_PATTERN: &str = r"\$\{([^}]+)\}";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SolverError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Unwraps a required setting. Blank strings and values still holding an
/// unresolved `${VAR}` count as unset.
pub fn require_non_empty(field_name: &str, value: Option<String>) -> Result<String> {
    let missing = || SolverError::MissingConfigError {
        field: field_name.to_string(),
    };

    match value {
        Some(v) if v.trim().is_empty() => Err(missing()),
        Some(v) => {
            let placeholder = Regex::new(PLACEHOLDER_PATTERN).map_err(|e| {
                SolverError::ConfigError {
                    message: format!("Invalid substitution pattern: {}", e),
                }
            })?;
            if let Some(caps) = placeholder.captures(&v) {
                tracing::warn!(
                    "{} references unset environment variable {}",
                    field_name,
                    &caps[1]
                );
                return Err(missing());
            }
            Ok(v)
        }
        None => Err(missing()),
    }
}
