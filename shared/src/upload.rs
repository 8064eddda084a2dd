use thiserror::Error;

use crate::models::PredictionResult;

pub const GENERIC_PREDICT_ERROR: &str = "Error analyzing image";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejected {
    #[error("Please upload an image file")]
    NotAnImage { mime: String },
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Loading,
    Result(PredictionResult),
    Error(String),
}

/// Visible state of the upload page.
///
/// The preview and the prediction run side by side: `preview` is filled in
/// by the file reader whenever it finishes, independently of `phase`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadView {
    pub preview: Option<String>,
    pub phase: UploadPhase,
}

impl UploadView {
    /// Accepts or rejects a picked file. On `Ok` the caller starts the
    /// preview read and the prediction request; on `Err` nothing is sent.
    pub fn select(&mut self, mime: &str) -> Result<(), UploadRejected> {
        if !is_image_mime(mime) {
            let rejected = UploadRejected::NotAnImage {
                mime: mime.to_string(),
            };
            self.phase = UploadPhase::Error(rejected.to_string());
            return Err(rejected);
        }
        self.phase = UploadPhase::Loading;
        Ok(())
    }

    pub fn preview_ready(&mut self, data_url: String) {
        self.preview = Some(data_url);
    }

    pub fn succeed(&mut self, result: PredictionResult) {
        self.phase = UploadPhase::Result(result);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = UploadPhase::Error(message.into());
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_some() && self.phase == UploadPhase::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.phase == UploadPhase::Loading
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.phase {
            UploadPhase::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            UploadPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Message for a failed prediction: the server's `detail` when it sent one.
pub fn failure_message(detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => detail.to_string(),
        _ => GENERIC_PREDICT_ERROR.to_string(),
    }
}
