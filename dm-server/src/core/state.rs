use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{DbService, seed};
use crate::payments::PixProvider;

/// Server state — shared handles for every request path
///
/// Cloning is shallow (pool and services are reference-counted), so handlers
/// receive it by value through axum's `State` extractor.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
    /// PIX charge provider selected at startup
    pub pix_provider: PixProvider,
}

impl ServerState {
    /// Initialize the server state:
    ///
    /// 1. work directory structure
    /// 2. database (work_dir/database/dm.db) + migrations
    /// 3. first-start seed (admin, settings, starter catalog)
    /// 4. services (JWT, PIX provider)
    ///
    /// # Panics
    ///
    /// Panics when the database cannot be initialized — the server cannot
    /// run without it.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");
        let pool = db_service.pool;

        seed::run(&pool, config)
            .await
            .expect("Failed to seed database");

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let pix_provider =
            PixProvider::from_config(&config.psp_provider, &config.mpago_access_token);

        Self {
            config: config.clone(),
            pool,
            jwt_service,
            pix_provider,
        }
    }

    pub fn get_db(&self) -> SqlitePool {
        self.pool.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
