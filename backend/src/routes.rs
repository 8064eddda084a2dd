use actix_files::{Files, NamedFile};
use actix_web::{error, web, HttpRequest, HttpResponse, Result};
use log::warn;
use serde_json::json;
use shared::Page;
use std::path::PathBuf;

use crate::proxy::{self, Upstream};

/// Directory holding the built frontend (page documents, wasm bundle, css).
#[derive(Clone)]
pub struct FrontendDir(pub PathBuf);

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    cfg.app_data(web::Data::new(FrontendDir(frontend_dir.clone())))
        .app_data(web::PayloadConfig::new(proxy::MAX_FORWARDED_BODY))
        .route("/health", web::get().to(health))
        .service(web::scope("/api").default_service(web::to(proxy::forward)))
        .route("/predict", web::post().to(proxy::forward))
        .route("/login", web::to(proxy::forward));

    for page in Page::ALL {
        cfg.route(page.route(), web::get().to(serve_page))
            .route(&format!("/{}", page.document()), web::get().to(serve_page));
    }

    cfg.service(Files::new("/static", frontend_dir));
}

async fn health(upstream: web::Data<Upstream>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "upstream_configured": upstream.is_configured(),
    }))
}

async fn serve_page(req: HttpRequest, dir: web::Data<FrontendDir>) -> Result<NamedFile> {
    let page = Page::from_path(req.path())
        .ok_or_else(|| error::ErrorNotFound(format!("No page at {}", req.path())))?;
    let document = dir.0.join(page.document());

    NamedFile::open(&document).map_err(|e| {
        warn!("Cannot serve {} from {}: {}", page, document.display(), e);
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpServer};
    use serde_json::Value;
    use std::fs;
    use url::Url;

    fn dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("note-check-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for page in Page::ALL {
            fs::write(dir.join(page.document()), format!("<html>{}</html>", page)).unwrap();
        }
        fs::write(dir.join("style.css"), "body {}").unwrap();
        dir
    }

    /// Stand-in for the detection backend, bound to an ephemeral port.
    fn start_fake_backend() -> Url {
        let server = HttpServer::new(|| {
            App::new()
                .app_data(web::PayloadConfig::new(64 * 1024 * 1024))
                .route(
                    "/api/user",
                    web::get().to(|req: HttpRequest| async move {
                        match req.headers().get("cookie") {
                            Some(cookie) if cookie.as_bytes() == b"session=abc" => {
                                HttpResponse::Ok().json(json!({ "username": "meera" }))
                            }
                            _ => HttpResponse::Unauthorized()
                                .json(json!({ "detail": "Not authenticated" })),
                        }
                    }),
                )
                .route(
                    "/api/logout",
                    web::post().to(|| async {
                        HttpResponse::Ok()
                            .append_header(("set-cookie", "session=; Max-Age=0"))
                            .json(json!({ "message": "Logged out" }))
                    }),
                )
                .route(
                    "/predict",
                    web::post().to(|body: web::Bytes| async move {
                        HttpResponse::InternalServerError()
                            .json(json!({ "detail": format!("received {} bytes", body.len()) }))
                    }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Url::parse(&format!("http://{}", addr)).unwrap()
    }

    macro_rules! app {
        ($dir:expr, $upstream:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Upstream::new($upstream).unwrap()))
                    .configure(|cfg| configure_routes(cfg, $dir)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(dist_dir("health"), None);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["upstream_configured"], false);
    }

    #[actix_web::test]
    async fn test_serves_page_documents() {
        let app = app!(dist_dir("pages"), None);

        for (uri, expected) in [
            ("/", "<html>Upload</html>"),
            ("/index.html", "<html>Upload</html>"),
            ("/dashboard", "<html>Dashboard</html>"),
            ("/history.html", "<html>History</html>"),
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
            let body = test::read_body(resp).await;
            assert_eq!(body, expected.as_bytes(), "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_static_assets_and_unknown_paths() {
        let app = app!(dist_dir("static"), None);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/static/style.css").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/settings").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_missing_document_is_not_found() {
        let dir = dist_dir("missing");
        fs::remove_file(dir.join("history.html")).unwrap();
        let app = app!(dir, None);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/history").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_api_without_upstream() {
        let app = app!(dist_dir("no-upstream"), None);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/user").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No API upstream is configured");

        let resp = test::call_service(&app, test::TestRequest::post().uri("/predict").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_forwards_session_cookie() {
        let backend = start_fake_backend();
        let app = app!(dist_dir("forward-user"), Some(backend));

        let req = test::TestRequest::get()
            .uri("/api/user")
            .insert_header(("cookie", "session=abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["username"], "meera");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/user").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_forwards_status_body_and_cookies() {
        let backend = start_fake_backend();
        let app = app!(dist_dir("forward-predict"), Some(backend));

        let req = test::TestRequest::post()
            .uri("/predict")
            .insert_header(("content-type", "application/octet-stream"))
            .set_payload(vec![0u8; 16])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "received 16 bytes");

        let resp = test::call_service(&app, test::TestRequest::post().uri("/api/logout").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("set-cookie").map(|v| v.as_bytes()),
            Some(&b"session=; Max-Age=0"[..])
        );
    }

    #[actix_web::test]
    async fn test_forwards_photo_sized_upload() {
        let backend = start_fake_backend();
        let app = app!(dist_dir("forward-large"), Some(backend));

        for size in [300_000, 3_000_000] {
            let req = test::TestRequest::post()
                .uri("/predict")
                .insert_header(("content-type", "application/octet-stream"))
                .set_payload(vec![0u8; size])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", size);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["detail"], format!("received {} bytes", size));
        }
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        // Nothing listens on the discard port.
        let upstream = Url::parse("http://127.0.0.1:9").unwrap();
        let app = app!(dist_dir("unreachable"), Some(upstream));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/history").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
