//! 服务器状态

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::{DbService, seed};

/// 服务器状态 - 持有配置与数据库连接池
///
/// ServerState 是所有 axum handler 的共享状态。连接池本身是 Arc 封装的，
/// Clone 成本极低。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试场景直接注入内存池。
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (连接池 + 迁移)
    /// 3. 演示数据 (SEED_DEMO=true 且目录为空时)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");
        let pool = db_service.pool;

        if config.seed_demo
            && let Err(e) = seed::seed_if_empty(&pool).await
        {
            tracing::warn!(error = %e, "Demo seed failed");
        }

        Self::new(config.clone(), pool)
    }

    /// 获取连接池
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }
}
