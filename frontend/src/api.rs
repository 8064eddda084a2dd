use gloo_console::error;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::endpoints;
use shared::upload::failure_message;
use shared::{
    DashboardStats, ErrorDetail, HistoryDetail, HistoryEntry, HistoryId, HistoryResponse,
    PredictionResult, User,
};
use thiserror::Error;
use web_sys::{File, FormData, RequestCredentials};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[source] gloo_net::Error),
    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(#[source] gloo_net::Error),
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    /// Message shown when a prediction fails. Status errors use the server's
    /// `detail`; transport and decode errors describe themselves.
    pub fn prediction_message(&self) -> String {
        match self {
            ApiError::Status { detail, .. } => failure_message(detail.as_deref()),
            other => other.to_string(),
        }
    }
}

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::SameOrigin)
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorDetail>(&body)
        .ok()
        .and_then(|body| body.detail);
    error!(format!("{} answered {}: {}", response.url(), status, body));
    Err(ApiError::Status { status, detail })
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = with_session(Request::get(url))
        .send()
        .await
        .map_err(ApiError::Network)?;
    let response = ensure_ok(response).await?;
    response.json::<T>().await.map_err(ApiError::Decode)
}

pub async fn fetch_user() -> Result<User, ApiError> {
    get_json(endpoints::USER).await
}

pub async fn logout() -> Result<(), ApiError> {
    let response = with_session(Request::post(endpoints::LOGOUT))
        .send()
        .await
        .map_err(ApiError::Network)?;
    ensure_ok(response).await.map(|_| ())
}

pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    get_json(endpoints::DASHBOARD_STATS).await
}

pub async fn fetch_history() -> Result<Vec<HistoryEntry>, ApiError> {
    get_json::<HistoryResponse>(endpoints::HISTORY)
        .await
        .map(|response| response.history)
}

pub async fn fetch_history_detail(id: HistoryId) -> Result<HistoryDetail, ApiError> {
    get_json(&endpoints::history_detail(id)).await
}

pub async fn predict(file: &File) -> Result<PredictionResult, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form_data
        .append_with_blob_and_filename(endpoints::PREDICT_FILE_FIELD, file, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

    let request = with_session(Request::post(endpoints::PREDICT))
        .body(form_data)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let response = request.send().await.map_err(ApiError::Network)?;
    let response = ensure_ok(response).await?;
    response
        .json::<PredictionResult>()
        .await
        .map_err(ApiError::Decode)
}
