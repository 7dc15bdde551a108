//! 服务器配置
//!
//! # 环境变量
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | DATA_DIR | ./data | RocksDB 数据目录 |
//! | STORE_BACKEND | surreal | 存储后端: surreal \| memory |
//! | ADMIN_EMAIL | admin@sufra.local | 管理员账号 |
//! | ADMIN_PASSWORD | change-me-please | 管理员密码 (启动时哈希) |
//! | ENVIRONMENT | development | 运行环境 |
//!
//! # 示例
//!
//! ```ignore
//! STORE_BACKEND=memory HTTP_PORT=8080 cargo run
//! ```

/// Storage backend selector, fixed at process start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Embedded SurrealDB over RocksDB under `data_dir`
    Surreal,
    /// Seeded in-memory maps (development / tests)
    Memory,
}

impl StoreBackend {
    fn from_env_str(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "memory" | "mem" => StoreBackend::Memory,
            _ => StoreBackend::Surreal,
        }
    }
}

/// 服务器配置 - 所有配置项
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据目录 (仅 surreal 后端使用)
    pub data_dir: String,
    /// 存储后端
    pub store_backend: StoreBackend,
    /// 管理员账号
    pub admin_email: String,
    /// 管理员密码 (仅存在于配置，存储前哈希)
    pub admin_password: String,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            store_backend: std::env::var("STORE_BACKEND")
                .map(|v| StoreBackend::from_env_str(&v))
                .unwrap_or(StoreBackend::Surreal),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@sufra.local".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "change-me-please".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn for_tests(admin_email: impl Into<String>, admin_password: impl Into<String>) -> Self {
        Self {
            http_port: 0,
            data_dir: String::new(),
            store_backend: StoreBackend::Memory,
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
            environment: "test".into(),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
