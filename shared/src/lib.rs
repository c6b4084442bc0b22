//! LWSC 管理后台共享类型库
//!
//! 前端 (WASM) 与任何宿主侧消费者共用的线上数据模型。
//! 所有类型只描述 REST 载荷的形状，不包含业务逻辑。

pub mod date;
pub mod protocol;
pub mod query;

pub use protocol::*;
pub use query::{LogQuery, PageQuery};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 管理 API 的统一前缀
pub const API_PREFIX: &str = "/api/v1/admin";

/// 提权角色：拥有这两种角色之一的管理员绕过所有权限过滤
pub const ELEVATED_ROLES: [&str; 2] = ["super-admin", "superadmin"];
