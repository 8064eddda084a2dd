pub mod chart;
pub mod dashboard;
pub mod endpoints;
pub mod format;
pub mod history;
pub mod models;
pub mod page;
pub mod session;
pub mod upload;

pub use models::{
    DashboardStats, DetectionSummary, ErrorDetail, HistoryDetail, HistoryEntry, HistoryId,
    HistoryResponse, PredictionResult, ResultLabel, User,
};
pub use page::Page;
