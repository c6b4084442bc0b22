//! API 客户端模块
//!
//! 分两层：
//! - `client`: 认证 HTTP 客户端（挂 Bearer 头，401 时静默刷新一次并重放）
//! - 资源门面：每个 REST 资源一组纯转发方法，响应形状在边界处统一归一化
//!   （`extract`），界面层只会看到一种列表类型。

mod articles;
mod auth;
mod client;
mod dashboard;
mod extract;
mod facilities;
mod logs;
mod pain_locations;
mod rewards;
mod users;

pub use client::{AdminApi, ApiClient};
pub use extract::ListPage;
pub use logs::LogKind;
