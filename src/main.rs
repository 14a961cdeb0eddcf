#![allow(non_snake_case)]

mod client;

use pitchpass::model;

#[cfg(feature = "server")]
use pitchpass::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            model::app::AppState,
            scheduler::{Scheduler, SchedulerState},
            service::demo::DemoSeeder,
            startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let uploads = config.upload_settings();
        tokio::fs::create_dir_all(&uploads.root).await?;

        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        let tracker = startup::connect_to_job_tracker(&config).await?;
        let queue = startup::start_workers(&config, db.clone(), tracker).await?;

        if config.demo_mode {
            let created = DemoSeeder::new(&db).seed().await?;
            tracing::info!("Demo mode enabled, seeded {} record(s)", created);
        }

        Scheduler::new(SchedulerState {
            db: db.clone(),
            queue,
            uploads: uploads.clone(),
        })
        .await?
        .start()
        .await?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { db, uploads })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
