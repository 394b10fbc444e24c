//! Laundry API user service: CRUD over the `user` table on a single /user endpoint

#![warn(rustdoc::private_doc_tests)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
mod api;
mod config;
mod database;
mod error;
mod password;
use actix_settings::ApplySettings;
use actix_web::{
    middleware::{Compress, Condition, Logger},
    web::Data,
    App, HttpServer,
};
use api::*;
use log::info;
use sea_orm::DatabaseConnection;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let settings = config::load_settings()?;
    let tuning = config::server_tuning(&settings.actix)?;
    info!("Starting server ({:?} mode)", settings.actix.mode);

    let db = config::connect(&settings.application.database).await?;
    let db_data: Data<DatabaseConnection> = Data::new(db);
    let enable_log = settings.actix.enable_log;
    let enable_compression = settings.actix.enable_compression;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(enable_compression, Compress::default()))
            .wrap(Condition::new(enable_log, Logger::default()))
            .app_data(db_data.clone())
            .configure(configure)
    })
    .apply_settings(&tuning);
    for host in &settings.actix.hosts {
        info!("listening on {}:{}", host.host, host.port);
        server = server.bind((host.host.as_str(), host.port))?;
    }
    server.run().await
}
