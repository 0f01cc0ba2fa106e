//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB on disk, in-memory for tests).

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::ServerError;

const NAMESPACE: &str = "debut";
const DATABASE: &str = "main";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Create a new database service backed by RocksDB at the given path
    pub async fn new(db_path: &str) -> Result<Self, ServerError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;
        Self::init(db).await
    }

    /// Create an in-memory database service (tests)
    pub async fn memory() -> Result<Self, ServerError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;
        Self::init(db).await
    }

    async fn init(db: Surreal<Db>) -> Result<Self, ServerError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established (ns={NAMESPACE}, db={DATABASE})");

        Ok(Self { db })
    }
}
