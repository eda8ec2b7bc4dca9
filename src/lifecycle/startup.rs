//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate the merged configuration
//! - Build the document from every source, in order
//! - Hand the finished document to the file or HTTP sink

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::config::{validate_config, AppConfig, ConfigError, FetchConfig};
use crate::document::{self, ClashDocument, DocumentBuilder, DocumentError, RemoteConverter};
use crate::http::DocumentServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals;
use crate::net::{self, ListenerError};
use crate::subscription::SubscriptionFetcher;

/// Any error that aborts a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("HTTP server failed: {0}")]
    Server(#[source] std::io::Error),
}

/// Build the HTTP client shared by subscription and backend requests.
pub fn http_client(config: &FetchConfig) -> Result<reqwest::Client, AppError> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
    if config.no_proxy {
        builder = builder.no_proxy();
    }
    builder.build().map_err(AppError::Client)
}

/// Build the document: template first, then local files, then subscriptions.
pub async fn build_document(config: &AppConfig) -> Result<ClashDocument, AppError> {
    let template = document::load_template(config.document.template.as_deref())?;
    let mut builder = DocumentBuilder::new(
        template,
        &config.document.group_name,
        &config.document.group_type,
    );

    for file in &config.sources.files {
        document::sources::add_file(&mut builder, file)?;
    }

    if !config.sources.urls.is_empty() {
        let client = http_client(&config.fetch)?;
        match &config.converter.backend {
            Some(backend) => {
                RemoteConverter::new(client, backend.as_str())
                    .add_subscriptions(&mut builder, &config.sources.urls)
                    .await?;
            }
            None => {
                let fetcher = SubscriptionFetcher::new(client);
                document::sources::add_subscriptions(&mut builder, &fetcher, &config.sources.urls)
                    .await?;
            }
        }
    }

    tracing::info!(proxies = builder.proxy_count(), "Document built");
    Ok(builder.finish())
}

/// Serialize the document to `path`, returning the number of bytes written.
pub fn write_document(document: &ClashDocument, path: &Path) -> Result<usize, AppError> {
    let data = document.to_yaml()?;
    fs::write(path, &data).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = data.len(), "Document written");
    Ok(data.len())
}

/// Serve the document on `port` until Ctrl+C.
pub async fn serve_document(document: ClashDocument, port: u16) -> Result<(), AppError> {
    // Serialization is repeated per request; surface failures before binding.
    document.to_yaml()?;

    let listener = net::bind(port).await?;
    tracing::info!(url = %net::subscribe_url(port), "Serving document, subscribe at this address");

    let shutdown = Arc::new(Shutdown::new());
    let receiver = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown));

    DocumentServer::new(document)
        .run(listener, receiver)
        .await
        .map_err(AppError::Server)
}

/// Full run: validate, build, then write or serve.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        files = config.sources.files.len(),
        subscriptions = config.sources.urls.len(),
        backend = config.converter.backend.as_deref().unwrap_or("none"),
        "Configuration loaded"
    );

    let document = build_document(&config).await?;

    if config.output.port != 0 {
        serve_document(document, config.output.port).await
    } else {
        write_document(&document, &config.output.path).map(|_| ())
    }
}
