// tests/http_registry.rs

//! HTTP registry tests against a loopback server.

mod common;

use bearnie::{Error, RegistryClient, RegistryLocation, Resolver};
use common::{component, names};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Fixed responses by path: status code and body
type Routes = HashMap<String, (u16, String)>;

/// Serve fixed responses by path; anything else is a 404
async fn serve(routes: Routes) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = routes
                    .get(&path)
                    .cloned()
                    .unwrap_or((404, String::new()));
                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    500 => "Internal Server Error",
                    _ => "Unknown",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}/registry")
}

fn ok(body: impl Into<String>) -> (u16, String) {
    (200, body.into())
}

fn fixture_routes() -> Routes {
    let mut routes = HashMap::new();
    routes.insert(
        "/registry/index.json".to_string(),
        ok(r#"{"name":"bearnie","version":"1.0.0","components":[
            {"name":"button","description":"A button","category":"form"},
            {"name":"styles","description":"Theme variables","category":"foundation"}
        ]}"#),
    );
    routes.insert(
        "/registry/button.json".to_string(),
        ok(serde_json::to_string(&component("button", &["styles"])).unwrap()),
    );
    routes.insert(
        "/registry/styles.json".to_string(),
        ok(serde_json::to_string(&component("styles", &[])).unwrap()),
    );
    routes.insert("/registry/broken.json".to_string(), ok("{not json"));
    routes.insert(
        "/registry/overloaded.json".to_string(),
        (500, "upstream exploded".to_string()),
    );
    routes
}

async fn client() -> RegistryClient {
    let base = serve(fixture_routes()).await;
    // Trailing slash is tolerated
    let location = RegistryLocation::select(None, Some(&format!("{base}/"))).unwrap();
    RegistryClient::new(&location).unwrap()
}

#[tokio::test]
async fn test_fetch_index_over_http() {
    let index = client().await.fetch_index().await.unwrap();
    assert_eq!(index.name, "bearnie");
    assert_eq!(index.names(), names(&["button", "styles"]));
    assert_eq!(index.get("styles").unwrap().category, "foundation");
}

#[tokio::test]
async fn test_fetch_component_over_http() {
    let button = client().await.fetch_component("button").await.unwrap();
    assert_eq!(button.registry_dependencies, names(&["styles"]));
    assert_eq!(button.files[0].path, "button/button.astro");
}

#[tokio::test]
async fn test_missing_component_is_not_found() {
    let err = client().await.fetch_component("ghost").await.unwrap_err();
    assert!(matches!(err, Error::ComponentNotFound(ref name) if name == "ghost"));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_document_is_invalid() {
    let err = client().await.fetch_component("broken").await.unwrap_err();
    assert!(matches!(err, Error::InvalidDocument { ref name, .. } if name == "broken"));
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let err = client().await.fetch_component("overloaded").await.unwrap_err();
    match err {
        Error::RegistryUnavailable(message) => assert!(message.contains("500")),
        other => panic!("expected RegistryUnavailable, got {other}"),
    }
}

#[tokio::test]
async fn test_resolve_over_http() {
    let order = Resolver::new(client().await)
        .resolve(&names(&["button"]))
        .await
        .unwrap();
    assert_eq!(order, names(&["styles", "button"]));
}

#[tokio::test]
async fn test_unreachable_registry_is_unavailable() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let location = RegistryLocation::select(None, Some(&format!("http://{addr}"))).unwrap();
    let client = RegistryClient::new(&location).unwrap();

    let err = client.fetch_index().await.unwrap_err();
    assert!(matches!(err, Error::RegistryUnavailable(_)));
}

#[tokio::test]
async fn test_missing_index_is_unavailable() {
    let base = serve(HashMap::new()).await;
    let location = RegistryLocation::select(None, Some(&base)).unwrap();
    let err = RegistryClient::new(&location)
        .unwrap()
        .fetch_index()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RegistryUnavailable(_)));
}
