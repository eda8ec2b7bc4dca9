//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, AppConfig, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "clash-merge")]
#[command(version, about = "Merge proxy files and subscriptions into one proxy-client config", long_about = None)]
pub struct Cli {
    /// Local config file whose `proxies` are merged (repeatable)
    #[arg(short = 'f', value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Subscription URL (repeatable)
    #[arg(short = 'u', value_name = "URL")]
    pub urls: Vec<String>,

    /// Serve the result over HTTP on this port instead of writing a file
    #[arg(short = 'p', value_name = "PORT")]
    pub port: Option<u16>,

    /// Output file name [default: template.yml]
    #[arg(short = 'o', value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Conversion backend address; subscriptions are converted there instead of locally
    #[arg(short = 's', value_name = "URL")]
    pub backend: Option<String>,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Template replacing the built-in one
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file, if any, and layer the flags on top.
    pub fn into_config(self) -> Result<AppConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => AppConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Append list flags to `config` and override scalar settings that were given.
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        config.sources.files.extend(self.files);
        config.sources.urls.extend(self.urls);

        if let Some(port) = self.port {
            config.output.port = port;
        }
        if let Some(out) = self.out {
            config.output.path = out;
        }
        if let Some(backend) = self.backend {
            config.converter.backend = Some(backend).filter(|b| !b.is_empty());
        }
        if let Some(template) = self.template {
            config.document.template = Some(template);
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        config
    }
}
