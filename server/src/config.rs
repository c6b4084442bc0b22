//! Server configuration loaded from the environment.
//!
//! Variable names are the deployment interface and are kept as-is:
//! `PORT`, `DIST_DIR`, `REACT_APP_BACKEND_API`, `REACT_APP_IMAGE_BASE_URL`.

use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "./dist";
pub const DEFAULT_BACKEND_API: &str = "http://localhost:5000";
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:5000/uploads/";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Directory holding the built SPA assets
    pub dist_dir: String,
    /// Values injected into the runtime config script
    pub backend_api: String,
    pub image_base_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            dist_dir: env::var("DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST_DIR.to_string()),
            backend_api: env::var("REACT_APP_BACKEND_API")
                .unwrap_or_else(|_| DEFAULT_BACKEND_API.to_string()),
            image_base_url: env::var("REACT_APP_IMAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: DEFAULT_DIST_DIR.to_string(),
            backend_api: DEFAULT_BACKEND_API.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}
