//! Application state - shared across all handlers.

use std::sync::Arc;

use rotta_core::ports::{
    AgencyRepository, CheckInRepository, Clock, PostRepository, TextGenerator,
};
use rotta_core::services::{
    AgencyService, CheckInIntake, Copywriter, Planning, PostLifecycle, ReplicationService,
};
use rotta_infra::{DatabaseConnections, InMemoryStore, SystemClock, UnconfiguredGenerator};

#[cfg(feature = "postgres")]
use rotta_infra::database::{
    PostgresAgencyRepository, PostgresCheckInRepository, PostgresPostRepository,
};
#[cfg(feature = "anthropic")]
use rotta_infra::AnthropicTextGenerator;

use crate::config::AppConfig;

/// The three repositories the services run on.
#[derive(Clone)]
pub struct Repositories {
    pub agencies: Arc<dyn AgencyRepository>,
    pub check_ins: Arc<dyn CheckInRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            agencies: store.clone(),
            check_ins: store.clone(),
            posts: store,
        }
    }

    #[cfg(feature = "postgres")]
    fn postgres(db: &DatabaseConnections) -> Self {
        Self {
            agencies: Arc::new(PostgresAgencyRepository::new(db.main.clone())),
            check_ins: Arc::new(PostgresCheckInRepository::new(db.main.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.main.clone())),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub agencies: AgencyService,
    pub intake: CheckInIntake,
    pub planning: Planning,
    pub lifecycle: PostLifecycle,
    pub replication: ReplicationService,
    pub copywriter: Copywriter,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (db, repos) = Self::storage(config).await;
        let generator = Self::generator(config);
        Self::from_parts(repos, generator, Arc::new(SystemClock), db)
    }

    /// Wire the services over the given collaborators.
    pub fn from_parts(
        repos: Repositories,
        generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
        db: Option<Arc<DatabaseConnections>>,
    ) -> Self {
        let copywriter = Copywriter::new(generator);

        tracing::info!("Application state initialized");

        Self {
            agencies: AgencyService::new(repos.agencies.clone()),
            intake: CheckInIntake::new(
                repos.agencies.clone(),
                repos.check_ins.clone(),
                repos.posts.clone(),
                copywriter.clone(),
                clock.clone(),
            ),
            planning: Planning::new(repos.posts.clone(), clock.clone()),
            lifecycle: PostLifecycle::new(repos.posts.clone(), clock),
            replication: ReplicationService::new(
                repos.agencies,
                repos.posts,
                copywriter.clone(),
            ),
            copywriter,
            db,
        }
    }

    /// Which storage backend is serving requests.
    pub fn storage_name(&self) -> &'static str {
        if self.db.is_some() { "postgres" } else { "memory" }
    }

    #[cfg(feature = "postgres")]
    async fn storage(config: &AppConfig) -> (Option<Arc<DatabaseConnections>>, Repositories) {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return (None, Repositories::in_memory());
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => {
                let repos = Repositories::postgres(&connections);
                (Some(Arc::new(connections)), repos)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                (None, Repositories::in_memory())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn storage(config: &AppConfig) -> (Option<Arc<DatabaseConnections>>, Repositories) {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory store");
        (None, Repositories::in_memory())
    }

    #[cfg(feature = "anthropic")]
    fn generator(config: &AppConfig) -> Arc<dyn TextGenerator> {
        match AnthropicTextGenerator::new(config.anthropic.clone()) {
            Ok(generator) => Arc::new(generator),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build Anthropic client");
                Arc::new(UnconfiguredGenerator::new(e.to_string()))
            }
        }
    }

    #[cfg(not(feature = "anthropic"))]
    fn generator(_config: &AppConfig) -> Arc<dyn TextGenerator> {
        tracing::warn!("Built without the anthropic feature - copy generation disabled");
        Arc::new(UnconfiguredGenerator::new(
            "anthropic support is not compiled in",
        ))
    }
}
