use gloo_file::callbacks::read_as_data_url;
use gloo_file::File as GlooFile;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement};
use yew::prelude::*;

use super::upload_page::{Msg, UploadPage};
use crate::api;

pub fn handle_file_chosen(page: &mut UploadPage, ctx: &Context<UploadPage>, file: File) -> bool {
    if let Err(e) = page.view.select(&file.type_()) {
        log::warn!("Rejected {}: {}", file.name(), e);
        page.preview_reader = None;
        return true;
    }

    start_preview(page, ctx, &file);
    send_prediction_request(ctx, file);
    true
}

pub fn handle_drop(page: &mut UploadPage, ctx: &Context<UploadPage>, event: DragEvent) -> bool {
    event.prevent_default();
    page.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|files| files.item(0))
    {
        ctx.link().send_message(Msg::FileChosen(file));
    }

    true
}

pub fn handle_open_file_picker(page: &UploadPage) -> bool {
    if let Some(input) = page.file_input.cast::<HtmlInputElement>() {
        input.click();
    }
    false
}

pub fn handle_preview_loaded(page: &mut UploadPage, result: Result<String, String>) -> bool {
    page.preview_reader = None;
    match result {
        Ok(data_url) => {
            page.view.preview_ready(data_url);
            true
        }
        Err(e) => {
            log::warn!("Failed to read preview: {}", e);
            false
        }
    }
}

/// Reads the file as a data URL. Replacing the previous reader aborts a
/// preview that has not finished yet.
fn start_preview(page: &mut UploadPage, ctx: &Context<UploadPage>, file: &File) {
    let link = ctx.link().clone();
    let blob = GlooFile::from(file.clone());

    let reader = read_as_data_url(&blob, move |result| {
        link.send_message(Msg::PreviewLoaded(result.map_err(|e| format!("{:?}", e))));
    });
    page.preview_reader = Some(reader);
}

pub fn send_prediction_request(ctx: &Context<UploadPage>, file: File) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            match api::predict(&file).await {
                Ok(result) => {
                    log::info!("{} classified as {} ({})", file.name(), result.label, result.confidence);
                    link.send_message(Msg::PredictionSucceeded(result))
                }
                Err(e) => {
                    log::error!("Prediction for {} failed: {}", file.name(), e);
                    link.send_message(Msg::PredictionFailed(e.prediction_message()))
                }
            }
        }
    });
}
