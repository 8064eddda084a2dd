use shared::upload::UploadView;
use yew::prelude::*;

pub fn render_preview_area(view: &UploadView) -> Html {
    match &view.preview {
        Some(data_url) => html! {
            <div id="previewSection" class="preview-section">
                <h2>{"Preview"}</h2>
                <img id="previewImage" src={data_url.clone()} alt="Uploaded note" />
            </div>
        },
        None => html! {},
    }
}
