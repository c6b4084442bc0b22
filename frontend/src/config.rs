//! 运行时配置模块
//!
//! 静态资源服务器在 `/config.js` 里注入 `window.LWSC_CONFIG`，
//! 页面在主包加载前执行它。这里读取该全局对象，缺省时退回
//! 本地开发默认值。

/// 注入的全局配置对象名
pub const GLOBAL_KEY: &str = "LWSC_CONFIG";

pub const DEFAULT_BACKEND_API: &str = "http://localhost:5000";
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:5000/uploads/";

/// 读取全局配置对象的一个字符串字段
#[cfg(target_arch = "wasm32")]
fn global_str(field: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_KEY)).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str(field)).ok()?;
    value.as_string().filter(|s| !s.is_empty())
}

/// 宿主侧（单元测试）没有 window，一律使用默认值
#[cfg(not(target_arch = "wasm32"))]
fn global_str(_field: &str) -> Option<String> {
    None
}

/// 后端 API 基地址（无尾部斜杠）
pub fn backend_api() -> String {
    global_str("backendApi")
        .unwrap_or_else(|| DEFAULT_BACKEND_API.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// 图片基地址（保留尾部斜杠）
pub fn image_base_url() -> String {
    global_str("imageBaseUrl").unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string())
}

/// 把记录里的图片字段解析成可展示的完整 URL
pub fn resolve_image(path: &str) -> String {
    resolve_image_with(path, &backend_api(), &image_base_url())
}

/// **纯函数：图片路径解析**
///
/// - 完整 URL 原样返回
/// - 以 `/` 开头的服务器相对路径挂在后端 API 地址下
/// - 裸文件名挂在图片基地址下
pub fn resolve_image_with(path: &str, backend_api: &str, image_base: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", backend_api, path)
    } else {
        format!("{}{}", image_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_image_with("https://cdn.x/a.png", DEFAULT_BACKEND_API, DEFAULT_IMAGE_BASE_URL),
            "https://cdn.x/a.png"
        );
    }

    #[test]
    fn server_relative_paths_use_backend_api() {
        assert_eq!(
            resolve_image_with("/uploads/a.png", "http://localhost:5000", DEFAULT_IMAGE_BASE_URL),
            "http://localhost:5000/uploads/a.png"
        );
    }

    #[test]
    fn bare_names_use_image_base() {
        assert_eq!(
            resolve_image_with("a.png", DEFAULT_BACKEND_API, "http://localhost:5000/uploads/"),
            "http://localhost:5000/uploads/a.png"
        );
    }
}
