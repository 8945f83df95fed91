use std::sync::Arc;

use r2d2::Pool;
use redis::Client;
use sqlx::PgPool;

use crate::config::Config;

pub type RedisPool = Pool<Client>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub pg_db: PgPool,
    pub redis_db: RedisPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pg_db: PgPool, redis_db: RedisPool, config: Config) -> Self {
        Self {
            pg_db,
            redis_db,
            config: Arc::new(config),
        }
    }

    /// Base URL for links handed back to clients. The authority comes from
    /// the request `Host` header when present, otherwise the bind address.
    pub fn base_url(&self, host_header: Option<&str>) -> String {
        let authority = host_header
            .map(str::to_string)
            .unwrap_or_else(|| self.config.server_addr());
        format!("{}://{}", self.config.scheme(), authority)
    }
}
