//! Static asset + runtime config server for the LWSC admin dashboard.
//!
//! Serves the built SPA with a client-side-routing fallback to the index
//! document, plus `GET /config.js`: a generated script assigning the
//! `window.LWSC_CONFIG` global the page loads before its main bundle.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

mod config;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    // Load .env if present so local runs pick up PORT / REACT_APP_* overrides.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    tracing::info!(
        dist_dir = %config.dist_dir,
        backend_api = %config.backend_api,
        "starting admin asset server"
    );

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let app = app(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Admin app running on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(config: ServerConfig) -> Router {
    let index = Path::new(&config.dist_dir).join("index.html");
    let static_site = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/config.js", get(config_js))
        .fallback_service(static_site)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

/// `GET /config.js`
async fn config_js(State(config): State<Arc<ServerConfig>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        render_config_script(&config),
    )
}

/// Render the runtime config script.
///
/// Both values are JSON-encoded so arbitrary URLs cannot break out of the
/// object literal.
fn render_config_script(config: &ServerConfig) -> String {
    let object = json!({
        "backendApi": config.backend_api,
        "imageBaseUrl": config.image_base_url,
    });
    format!("window.LWSC_CONFIG = {};\n", object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_config(dist_dir: &str) -> ServerConfig {
        ServerConfig {
            dist_dir: dist_dir.to_string(),
            backend_api: "https://api.lwsc.example".to_string(),
            image_base_url: "https://api.lwsc.example/uploads/".to_string(),
            ..Default::default()
        }
    }

    /// Temporary dist directory with an index document and one asset.
    struct TestDist {
        root: std::path::PathBuf,
    }

    impl TestDist {
        fn create(name: &str) -> Self {
            let root = std::env::temp_dir().join(format!("lwsc-admin-{}-{}", name, std::process::id()));
            std::fs::create_dir_all(&root).expect("create dist dir");
            std::fs::write(root.join("index.html"), "<html>lwsc admin</html>").expect("index");
            std::fs::write(root.join("app.js"), "console.log('bundle')").expect("asset");
            Self { root }
        }

        fn path(&self) -> &str {
            self.root.to_str().expect("utf-8 temp path")
        }
    }

    impl Drop for TestDist {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[test]
    fn config_script_assigns_the_global_object() {
        let script = render_config_script(&test_config("./dist"));
        assert_eq!(
            script,
            "window.LWSC_CONFIG = {\"backendApi\":\"https://api.lwsc.example\",\"imageBaseUrl\":\"https://api.lwsc.example/uploads/\"};\n"
        );
    }

    #[test]
    fn config_script_json_escapes_values() {
        let mut config = test_config("./dist");
        config.backend_api = "http://x/\"};alert(1);//".to_string();
        let script = render_config_script(&config);
        // The payload stays inside the JSON string literal.
        assert!(script.contains("\\\"};alert(1);//"));
        assert!(script.starts_with("window.LWSC_CONFIG = {"));
    }

    #[test]
    fn defaults_match_the_documented_interface() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.backend_api, "http://localhost:5000");
        assert_eq!(config.image_base_url, "http://localhost:5000/uploads/");
    }

    #[tokio::test]
    async fn config_js_is_served_as_javascript() {
        let dist = TestDist::create("configjs");
        let app = app(test_config(dist.path()));

        let response = app
            .oneshot(Request::get("/config.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/javascript"
        );
        let body = body_text(response).await;
        assert!(body.starts_with("window.LWSC_CONFIG = "));
        assert!(body.contains("https://api.lwsc.example"));
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let dist = TestDist::create("assets");
        let app = app(test_config(dist.path()));

        let response = app
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "console.log('bundle')");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_index_document() {
        let dist = TestDist::create("fallback");
        let app = app(test_config(dist.path()));

        let response = app
            .oneshot(
                Request::get("/rewards/badges")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>lwsc admin</html>");
    }
}
