//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`debut`] - 静态内容接口 (活动、传统、FAQ、交通、流程)
//! - [`rsvp`] - RSVP 提交接口

pub mod debut;
pub mod health;
pub mod rsvp;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
