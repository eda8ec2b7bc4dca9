//! End-to-end tests for serving the document over HTTP.

use std::time::Duration;

use clash_merge::document::{ClashDocument, DocumentBuilder};
use clash_merge::lifecycle::Shutdown;
use clash_merge::DocumentServer;

#[tokio::test]
async fn test_serves_document_until_shutdown() {
    let mut builder = DocumentBuilder::new(
        ClashDocument::from_yaml("mode: rule\n").unwrap(),
        "PROXY",
        "select",
    );
    builder
        .add_yaml("proxies:\n  - name: '  My Node  '\n    type: trojan\n    server: h\n    port: 443\n")
        .unwrap();
    let server = DocumentServer::new(builder.finish());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, receiver).await });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    for path in ["/", "/anything"] {
        let res = client
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .expect("server unreachable");

        assert_eq!(res.status(), 200);
        assert_eq!(res.headers()["content-type"], "application/octet-stream");
        assert_eq!(
            res.headers()["content-disposition"],
            "attachment; filename=template.yml"
        );

        let served = ClashDocument::from_yaml(&res.text().await.unwrap()).unwrap();
        assert_eq!(served.proxy_groups[0].proxies, vec!["My Node".to_string()]);
        assert_eq!(served.proxies.len(), 1);
    }

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop");
    assert!(result.unwrap().is_ok());
}
