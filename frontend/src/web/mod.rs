//! 原生 Web API 封装模块
//!
//! 对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
//! 以减小 WASM 二进制体积。纯逻辑（路由定义）与 DOM 操作
//! （History / fetch / LocalStorage）在这里分层。

pub mod http;
pub mod route;
pub mod router;
pub mod storage;

pub use storage::LocalStorage;
