mod config;

use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

use crate::config::{SiteConfig, load_dotenv};

async fn spa(cfg: web::Data<SiteConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(cfg.index_file())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // before the logger, so RUST_LOG from .env is honoured
    let dotenv = load_dotenv(None);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Some(path) = dotenv {
        log::debug!("loaded {}", path.display());
    }

    let cfg = SiteConfig::from_env().context("reading site configuration")?;
    if !cfg.index_file().exists() {
        log::warn!(
            "{} is missing, run `trunk build` first",
            cfg.index_file().display()
        );
    }
    log::info!("serving {} on http://{}:{}", cfg.dist_dir.display(), cfg.host, cfg.port);

    let bind = (cfg.host.clone(), cfg.port);
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            // ① top-level static assets
            .service(Files::new("/assets", &data.assets_dir))
            // ② the Trunk bundle
            .service(Files::new("/", &data.dist_dir).index_file("index.html"))
            // ③ fallback -> SPA for any other path
            .default_service(web::get().to(spa))
    })
    .bind(bind)
    .context("binding listener")?
    .run()
    .await
    .context("running server")
}
