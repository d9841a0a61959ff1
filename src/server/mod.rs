//! HTTP server
//!
//! Hosts the tracker API that the TUI and the one-shot CLI commands talk
//! to: section and account listings over GET, and a form-encoded action
//! endpoint over POST. A background task periodically refreshes the rank
//! of every stored account through the upstream lookup service.

pub mod handlers;
pub mod refresh;

use std::time::Duration;

use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::lookup::RankClient;
use crate::storage::Storage;

/// Register the API routes on a service config
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::get_sections)
        .service(handlers::get_accounts)
        .service(handlers::post_action);
}

/// Run the tracker server until it is shut down
///
/// Binds to the configured address, spawns the rank refresher on the same
/// runtime, and serves the API. Storage is shared with the refresher
/// through the same `web::Data` handles the handlers use.
pub async fn run_server(storage: Storage, settings: Settings) -> TrackerResult<()> {
    let timeout = Duration::from_secs(settings.request_timeout_secs);
    let lookup = RankClient::new(settings.lookup_base_url.clone(), timeout)?;

    let storage = web::Data::new(storage);
    let lookup = web::Data::new(lookup);

    let interval = Duration::from_secs(settings.refresh_interval_secs);
    actix_web::rt::spawn(refresh::run_refresher(
        storage.clone(),
        lookup.clone(),
        interval,
    ));

    info!(
        addr = %settings.listen_addr,
        port = settings.listen_port,
        data_dir = %storage.paths().data_dir().display(),
        "starting tracker server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(storage.clone())
            .app_data(lookup.clone())
            .configure(configure)
    })
    .bind((settings.listen_addr.as_str(), settings.listen_port))?
    .run()
    .await?;

    Ok(())
}
