//! Paths of the detection backend consumed by the pages.

use crate::models::HistoryId;

pub const USER: &str = "/api/user";
pub const LOGOUT: &str = "/api/logout";
pub const DASHBOARD_STATS: &str = "/api/dashboard-stats";
pub const HISTORY: &str = "/api/history";
pub const PREDICT: &str = "/predict";
pub const LOGIN_PAGE: &str = "/login";

/// Multipart field carrying the uploaded image.
pub const PREDICT_FILE_FIELD: &str = "file";

pub fn history_detail(id: HistoryId) -> String {
    format!("{}/{}", HISTORY, id)
}
