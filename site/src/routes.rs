//! HTTP surface: health check, static assets, the built bundle, and the SPA
//! fallback that lets the client router own every other path.

use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::{HttpResponse, Responder, web};

use crate::config::Config;

/// Path of `index.html`, shared with the fallback handler.
#[derive(Debug, Clone)]
struct SpaIndex(PathBuf);

async fn healthz() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("ok")
}

async fn spa(index: web::Data<SpaIndex>) -> actix_web::Result<NamedFile> {
    NamedFile::open_async(&index.0).await.map_err(|e| {
        log::error!("cannot open {}: {e}", index.0.display());
        e.into()
    })
}

/// Registers every route for `cfg`. Used by `main` and by the tests.
pub fn configure(cfg: &Config) -> impl FnOnce(&mut web::ServiceConfig) + use<> {
    let index = web::Data::new(SpaIndex(cfg.index_file()));
    let dist_dir = cfg.dist_dir.clone();
    let assets_dir = cfg.assets_dir.clone();

    move |app: &mut web::ServiceConfig| {
        app.app_data(index)
            .route("/healthz", web::get().to(healthz))
            .service(Files::new("/assets", assets_dir))
            .service(
                Files::new("/", dist_dir)
                    .index_file("index.html")
                    .default_handler(web::get().to(spa)),
            );
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use tempfile::TempDir;

    use super::*;

    const INDEX: &str = "<!doctype html><title>Leaflo</title><div id=app></div>";

    /// Fake build output: `dist/index.html`, `dist/leaflo_ui.js`, `assets/leaf.svg`.
    fn site(with_index: bool) -> (TempDir, Config) {
        let root = tempfile::tempdir().unwrap();
        let dist = root.path().join("dist");
        let assets = root.path().join("assets");
        fs::create_dir_all(&dist).unwrap();
        fs::create_dir_all(&assets).unwrap();
        if with_index {
            fs::write(dist.join("index.html"), INDEX).unwrap();
        }
        fs::write(dist.join("leaflo_ui.js"), "export default 1;").unwrap();
        fs::write(assets.join("leaf.svg"), "<svg/>").unwrap();

        let cfg = Config { dist_dir: dist, assets_dir: assets, ..Config::default() };
        (root, cfg)
    }

    async fn get(cfg: &Config, path: &str) -> (StatusCode, String) {
        let app = test::init_service(App::new().configure(configure(cfg))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn test_healthz() {
        let (_root, cfg) = site(true);
        assert_eq!(get(&cfg, "/healthz").await, (StatusCode::OK, "ok".to_string()));
    }

    #[actix_web::test]
    async fn test_root_serves_index() {
        let (_root, cfg) = site(true);
        assert_eq!(get(&cfg, "/").await, (StatusCode::OK, INDEX.to_string()));
    }

    #[actix_web::test]
    async fn test_bundle_files_are_served() {
        let (_root, cfg) = site(true);
        let (status, body) = get(&cfg, "/leaflo_ui.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[actix_web::test]
    async fn test_assets_are_served() {
        let (_root, cfg) = site(true);
        assert_eq!(get(&cfg, "/assets/leaf.svg").await, (StatusCode::OK, "<svg/>".to_string()));
    }

    #[actix_web::test]
    async fn test_client_routes_fall_back_to_index() {
        let (_root, cfg) = site(true);
        for path in ["/about", "/business", "/contact", "/hidden", "/no/such/page"] {
            assert_eq!(get(&cfg, path).await, (StatusCode::OK, INDEX.to_string()), "{path}");
        }
    }

    #[actix_web::test]
    async fn test_missing_index_is_not_found() {
        let (_root, cfg) = site(false);
        let (status, _) = get(&cfg, "/about").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
