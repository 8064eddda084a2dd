use actix_web::http::StatusCode;
use actix_web::http::Uri;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::{error, info};
use serde::Serialize;
use thiserror::Error;
use url::Url;

const FORWARDED_REQUEST_HEADERS: [&str; 4] = ["accept", "authorization", "content-type", "cookie"];
const FORWARDED_RESPONSE_HEADERS: [&str; 3] = ["content-type", "location", "set-cookie"];

/// Largest request body handed upstream. Phone photos routinely exceed the
/// 256 KiB default of the `Bytes` extractor.
pub const MAX_FORWARDED_BODY: usize = 20 * 1024 * 1024;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("No API upstream is configured")]
    NotConfigured,
    #[error("Cannot forward request: {0}")]
    InvalidRequest(String),
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Detection backend that API traffic is handed to.
#[derive(Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base: Option<Url>,
}

impl Upstream {
    pub fn new(base: Option<Url>) -> Result<Self, reqwest::Error> {
        // Redirects such as login -> /dashboard belong to the browser.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, base })
    }

    pub fn is_configured(&self) -> bool {
        self.base.is_some()
    }
}

pub fn upstream_url(base: &Url, uri: &Uri) -> Result<Url, ProxyError> {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    base.join(path_and_query)
        .map_err(|e| ProxyError::InvalidRequest(format!("{}: {}", path_and_query, e)))
}

pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> Result<HttpResponse, ProxyError> {
    let base = upstream.base.as_ref().ok_or(ProxyError::NotConfigured)?;
    let target = upstream_url(base, req.uri())?;
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|e| ProxyError::InvalidRequest(e.to_string()))?;

    let mut builder = upstream.client.request(method.clone(), target.clone());
    for name in FORWARDED_REQUEST_HEADERS {
        for value in req.headers().get_all(name) {
            builder = builder.header(name, value.as_bytes());
        }
    }

    let response = builder.body(body.to_vec()).send().await.map_err(|e| {
        error!("{} {} failed: {}", method, target, e);
        ProxyError::Upstream(e)
    })?;

    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    info!("{} {} -> {}", method, target.path(), status);

    let mut reply = HttpResponse::build(status);
    for name in FORWARDED_RESPONSE_HEADERS {
        for value in response.headers().get_all(name) {
            reply.append_header((name, value.as_bytes()));
        }
    }

    let bytes = response.bytes().await?;
    Ok(reply.body(bytes))
}
