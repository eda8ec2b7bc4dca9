//! HTTP server serving the finished document.
//!
//! # Responsibilities
//! - Create Axum Router with the download handler
//! - Wire up request tracing
//! - Serialize the shared document on every request
//! - Stop on the shutdown broadcast

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::document::ClashDocument;

/// Filename suggested to clients downloading the document.
pub const DOWNLOAD_FILENAME: &str = "template.yml";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub document: Arc<ClashDocument>,
}

/// HTTP server exposing one document at every GET path.
pub struct DocumentServer {
    router: Router,
}

impl DocumentServer {
    /// Create a server for a fully built document.
    pub fn new(document: ClashDocument) -> Self {
        let state = AppState {
            document: Arc::new(document),
        };
        Self {
            router: Self::build_router(state),
        }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(download_handler))
            .route("/{*path}", get(download_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for embedding or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Serve the document as a file download.
async fn download_handler(State(state): State<AppState>) -> Response {
    let body = match state.document.to_yaml() {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize document");
            String::new()
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", DOWNLOAD_FILENAME),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn server() -> DocumentServer {
        let mut document = ClashDocument::from_yaml("mode: rule\n").unwrap();
        document.rules = vec!["MATCH,DIRECT".into()];
        DocumentServer::new(document)
    }

    #[tokio::test]
    async fn test_download_headers_and_body() {
        let response = server()
            .router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/octet-stream"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=template.yml"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let served = ClashDocument::from_yaml(std::str::from_utf8(&body).unwrap()).unwrap();
        assert_eq!(served.mode, "rule");
        assert_eq!(served.rules, vec!["MATCH,DIRECT".to_string()]);
    }

    #[tokio::test]
    async fn test_any_path_serves_document() {
        let response = server()
            .router()
            .oneshot(Request::builder().uri("/clash/config.yml").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
