use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

mod config;
mod routes;

use config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("reading .env");
        }
    }
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cfg = Config::from_env()?;
    if !cfg.index_file().is_file() {
        log::warn!(
            "{} is missing; build the ui first or set SITE_DIST_DIR",
            cfg.index_file().display()
        );
    }

    log::info!("serving {} on http://{}:{}", cfg.dist_dir.display(), cfg.host, cfg.port);

    let bind = (cfg.host, cfg.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure(&cfg))
    })
    .bind(bind)
    .with_context(|| format!("binding {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("server stopped")
}
