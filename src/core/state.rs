//! 服务器状态
//!
//! [`ServerState`] 持有所有服务的共享引用，使用 Arc 实现浅拷贝。

use std::path::Path;
use std::sync::Arc;

use crate::auth::SessionService;
use crate::core::config::{Config, StoreBackend};
use crate::db::{MemStore, Store, SurrealStore};
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 配置 + 存储后端 + 会话服务
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | store | 存储后端 (启动时按配置选择) |
/// | sessions | 会话服务 (登录/校验/注销) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub sessions: Arc<SessionService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// Fails fast: if the configured backend cannot be opened the process
    /// never starts serving.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let store: Arc<dyn Store> = match config.store_backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory store with seed catalog");
                Arc::new(MemStore::with_seed())
            }
            StoreBackend::Surreal => {
                let path = Path::new(&config.data_dir);
                let store = SurrealStore::open(path)
                    .await
                    .map_err(|e| AppError::Database(format!("opening store: {e}")))?;
                tracing::info!(path = %config.data_dir, "Embedded database opened");
                Arc::new(store)
            }
        };

        Self::with_store(config.clone(), store)
    }

    /// 使用现成的存储构造状态 (测试用)
    pub fn with_store(config: Config, store: Arc<dyn Store>) -> AppResult<Self> {
        let sessions = Arc::new(SessionService::new(
            &config.admin_email,
            &config.admin_password,
        )?);
        Ok(Self {
            config,
            store,
            sessions,
        })
    }
}
