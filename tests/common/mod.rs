//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates a migrated in-memory database and
//! the repository over it. The [`with_server`] constructor assembles the
//! full application state around that database and starts Axum on a random
//! port for HTTP-level testing.

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::SqlitePool;

use liblend_server::{
    config::AppConfig, create_router, db, repository::Repository, services::Services, AppState,
};

/// Test harness wrapping a migrated in-memory database.
pub struct TestHarness {
    pub pool: SqlitePool,
    pub repository: Repository,
}

impl TestHarness {
    /// Create a new harness with a fresh in-memory database.
    pub async fn new() -> Self {
        let pool = db::in_memory_pool()
            .await
            .expect("failed to create in-memory pool");
        let repository = Repository::new(pool.clone());

        Self { pool, repository }
    }

    /// Start an Axum server over the harness database on a random port and
    /// return the harness together with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new().await;

        let state = AppState {
            config: Arc::new(AppConfig::default()),
            services: Arc::new(Services::new(harness.repository.clone())),
        };
        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}
