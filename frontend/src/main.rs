mod api;
mod components;

use components::dashboard::DashboardPage;
use components::history::HistoryPage;
use components::upload_page::UploadPage;
use shared::Page;

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let path = current_path();
    let Some(page) = Page::from_path(&path) else {
        log::warn!("No page controller for {}", path);
        return;
    };

    log::info!("Mounting {} page", page);
    match page {
        Page::Upload => {
            yew::Renderer::<UploadPage>::new().render();
        }
        Page::Dashboard => {
            yew::Renderer::<DashboardPage>::new().render();
        }
        Page::History => {
            yew::Renderer::<HistoryPage>::new().render();
        }
    }
}
