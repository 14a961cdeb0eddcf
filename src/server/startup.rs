use apalis_redis::RedisStorage;
use fred::prelude::{ClientLike, Config as RedisConfig, Pool};
use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::Error,
    model::worker::WorkerJob,
    worker::{handle_job, JobQueue},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{
        ClientLike as SessionClientLike, Config as SessionRedisConfig, Pool as SessionPool,
    };

    let redis_config = SessionRedisConfig::from_url(&config.valkey_url)?;
    let pool = SessionPool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies outside of debug builds
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Connect to Redis for job tracking
pub async fn connect_to_job_tracker(config: &Config) -> Result<Pool, Error> {
    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(pool)
}

/// Spawns the video analysis workers and returns the queue feeding them
pub async fn start_workers(
    config: &Config,
    db: DatabaseConnection,
    tracker: Pool,
) -> Result<JobQueue, Error> {
    use apalis::prelude::*;

    let conn = apalis_redis::connect(config.valkey_url.to_string()).await?;
    let storage: RedisStorage<WorkerJob> = RedisStorage::new(conn);
    let workers = config.workers;

    let storage_clone = storage.clone();
    let worker_tracker = tracker.clone();

    tokio::spawn(async move {
        WorkerBuilder::new("pitchpass-worker")
            .concurrency(workers)
            .data(db)
            .data(worker_tracker)
            .backend(storage_clone)
            .build_fn(handle_job)
            .run()
            .await;
    });

    Ok(JobQueue::new(storage, tracker))
}
