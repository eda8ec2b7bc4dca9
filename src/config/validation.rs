//! Configuration validation.
//!
//! Returns every problem found, not just the first. Runs after command-line
//! flags are merged and before any source is touched.

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("subscription URL {0:?} is not an absolute http(s) URL")]
    InvalidSubscriptionUrl(String),

    #[error("conversion backend {0:?} is not an absolute http(s) URL")]
    InvalidBackendUrl(String),

    #[error("proxy group name is empty")]
    EmptyGroupName,

    #[error("output path is empty")]
    EmptyOutputPath,
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for url in &config.sources.urls {
        if !is_http_url(url) {
            errors.push(ValidationError::InvalidSubscriptionUrl(url.clone()));
        }
    }

    if let Some(backend) = &config.converter.backend {
        if !is_http_url(backend) {
            errors.push(ValidationError::InvalidBackendUrl(backend.clone()));
        }
    }

    if config.document.group_name.trim().is_empty() {
        errors.push(ValidationError::EmptyGroupName);
    }

    if config.output.port == 0 && config.output.path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyOutputPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.sources.urls = vec!["https://ok.example/sub".into(), "ftp://bad".into()];
        config.converter.backend = Some("localhost:25500".into());
        config.document.group_name = "  ".into();
        config.output.path = PathBuf::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidSubscriptionUrl("ftp://bad".into()),
                ValidationError::InvalidBackendUrl("localhost:25500".into()),
                ValidationError::EmptyGroupName,
                ValidationError::EmptyOutputPath,
            ]
        );
    }

    #[test]
    fn test_output_path_not_needed_when_serving() {
        let mut config = AppConfig::default();
        config.output.path = PathBuf::new();
        config.output.port = 8080;
        assert!(validate_config(&config).is_ok());
    }
}
