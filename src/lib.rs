//! Sufra Server - 外卖点餐平台后端
//!
//! # 架构概述
//!
//! 提供店面与管理后台共用的 RESTful API：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储, 测试环境可切换为内存存储
//! - **认证** (`auth`): 令牌会话 + Argon2 密码哈希
//! - **HTTP API** (`api`): 分类 / 餐厅 / 菜品 / 订单 / 配送员 / 促销活动
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 会话登录、密码哈希
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、请求体校验
//! └── db/            # 数据模型与存储层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::SessionService;
pub use core::{Config, Server, ServerState, StoreBackend, build_app};
pub use db::{MemStore, Store, SurrealStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

/// 进程启动前的环境准备 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger("info");
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____        __
  / ___/__  __ / /_____ ____ _
  \__ \/ / / // __/ ___/ __ `/
 ___/ / /_/ // / / /  / /_/ /
/____/\__,_//_/ /_/   \__,_/
    "#
    );
}
