//! Debut Server - 单场活动邀请网站后端
//!
//! # 架构概述
//!
//! 本模块是邀请网站服务端的主入口，提供以下核心功能：
//!
//! - **静态内容** (`content`): 活动详情、传统仪式、FAQ、交通、流程
//! - **RSVP 提交** (`api/rsvp`): 校验 + 单行写入
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! debut-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── content/       # 静态内容 fixtures
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod content;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: dotenv + 日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____       __          __
   / __ \___  / /_  __  __/ /_
  / / / / _ \/ __ \/ / / / __/
 / /_/ /  __/ /_/ / /_/ / /_
/_____/\___/_.___/\__,_/\__/
    "#
    );
}
