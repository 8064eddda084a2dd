use gloo_file::callbacks::FileReader;
use shared::upload::UploadView;
use shared::{Page, PredictionResult};
use web_sys::{DragEvent, File};
use yew::prelude::*;

use super::handlers;
use super::header::render_header;
use super::preview_area::render_preview_area;
use super::results::render_results;
use super::upload_section::render_upload_section;
use super::utils::render_error_message;

pub enum Msg {
    // Input events
    FileChosen(File),
    HandleDrop(DragEvent),
    SetDragging(bool),
    OpenFilePicker,

    // Preview and prediction
    PreviewLoaded(Result<String, String>),
    PredictionSucceeded(PredictionResult),
    PredictionFailed(String),
}

pub struct UploadPage {
    pub(super) view: UploadView,
    pub(super) is_dragging: bool,
    pub(super) preview_reader: Option<FileReader>,
    pub(super) file_input: NodeRef,
}

impl Component for UploadPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: UploadView::default(),
            is_dragging: false,
            preview_reader: None,
            file_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }
            Msg::OpenFilePicker => handlers::handle_open_file_picker(self),

            Msg::PreviewLoaded(result) => handlers::handle_preview_loaded(self, result),
            Msg::PredictionSucceeded(result) => {
                self.view.succeed(result);
                true
            }
            Msg::PredictionFailed(message) => {
                self.view.fail(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(Page::Upload, "Currency Note Authentication") }

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_preview_area(&self.view) }
                    { render_error_message(self.view.error()) }
                    { render_results(&self.view) }
                </main>

                <footer class="app-footer">
                    <p>{"Upload a photo of a note to check whether it is genuine"}</p>
                </footer>
            </div>
        }
    }
}
