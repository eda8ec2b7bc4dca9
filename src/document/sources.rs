//! Source ingestion.
//!
//! Each step takes the builder explicitly and appends what it ingests.
//! Sources run one at a time, in the order they were given.

use std::fs;
use std::path::Path;

use url::Url;

use crate::document::builder::DocumentBuilder;
use crate::document::error::{DocumentError, DocumentResult};
use crate::subscription::SubscriptionFetcher;

/// Merge the `proxies` of a local document.
pub fn add_file(builder: &mut DocumentBuilder, path: &Path) -> DocumentResult<usize> {
    let data = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let added = builder.add_yaml(&data)?;
    tracing::info!(path = %path.display(), added, "Merged local file");
    Ok(added)
}

/// Download and decode each subscription locally, in order.
pub async fn add_subscriptions(
    builder: &mut DocumentBuilder,
    fetcher: &SubscriptionFetcher,
    urls: &[String],
) -> DocumentResult<usize> {
    let mut added = 0;
    for url in urls {
        let records = fetcher.fetch(url).await?;
        let count = builder.add_records(&records)?;
        tracing::info!(url = %url, added = count, "Merged subscription");
        added += count;
    }
    Ok(added)
}

/// Client for a third-party subscription conversion backend.
///
/// All subscription URLs go out in one request:
/// `GET {backend}/sub?target=clash&url=<url1|url2|...>`.
#[derive(Debug, Clone)]
pub struct RemoteConverter {
    client: reqwest::Client,
    backend: String,
}

impl RemoteConverter {
    pub fn new(client: reqwest::Client, backend: impl Into<String>) -> Self {
        Self {
            client,
            backend: backend.into(),
        }
    }

    /// Build the conversion request URL for `urls`.
    pub fn request_url(&self, urls: &[String]) -> DocumentResult<Url> {
        let endpoint = format!("{}/sub", self.backend.trim_end_matches('/'));
        let joined = urls.join("|");
        Url::parse_with_params(&endpoint, &[("target", "clash"), ("url", joined.as_str())]).map_err(
            |source| DocumentError::InvalidBackend {
                backend: self.backend.clone(),
                source,
            },
        )
    }

    /// Have the backend convert `urls` and merge the returned proxies.
    pub async fn add_subscriptions(
        &self,
        builder: &mut DocumentBuilder,
        urls: &[String],
    ) -> DocumentResult<usize> {
        let request_url = self.request_url(urls)?;
        tracing::info!(backend = %self.backend, subscriptions = urls.len(), "Requesting conversion");

        let body = self
            .client
            .get(request_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let added = builder.add_yaml(&body)?;
        tracing::info!(backend = %self.backend, added, "Merged converted subscriptions");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::schema::ClashDocument;
    use std::io::Write;

    fn builder() -> DocumentBuilder {
        DocumentBuilder::new(ClashDocument::default(), "PROXY", "select")
    }

    #[test]
    fn test_request_url() {
        let converter = RemoteConverter::new(reqwest::Client::new(), "http://127.0.0.1:25500/");
        let url = converter
            .request_url(&["https://a.example/sub?x=1".into(), "https://b.example/s".into()])
            .unwrap();

        assert_eq!(url.path(), "/sub");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("target".to_string(), "clash".to_string()),
                (
                    "url".to_string(),
                    "https://a.example/sub?x=1|https://b.example/s".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_request_url_invalid_backend() {
        let converter = RemoteConverter::new(reqwest::Client::new(), "not a url");
        let err = converter.request_url(&["https://a.example".into()]).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidBackend { .. }));
    }

    #[test]
    fn test_add_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "proxies:\n  - name: local\n    type: socks5\n    server: 127.0.0.1\n    port: 1080"
        )
        .unwrap();

        let mut builder = builder();
        assert_eq!(add_file(&mut builder, file.path()).unwrap(), 1);
        assert_eq!(builder.group_members(), ["local"]);
    }

    #[test]
    fn test_add_missing_file() {
        let mut builder = builder();
        let err = add_file(&mut builder, Path::new("/nonexistent/proxies.yml")).unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }
}
