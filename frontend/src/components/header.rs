use shared::Page;
use yew::prelude::*;

use super::auth_button::SessionControls;

/// Renders the page header with navigation and the session controls
pub fn render_header(active: Page, title: &str) -> Html {
    let nav_link = |page: Page, text: &'static str| {
        html! {
            <a
                href={page.route()}
                class={classes!("nav-link", (page == active).then_some("active"))}
            >
                { text }
            </a>
        }
    };

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-money-bill-wave"></i> { format!(" {}", title) }</h1>
            <nav class="nav-links">
                { nav_link(Page::Upload, "Detect") }
                { nav_link(Page::Dashboard, "Dashboard") }
                { nav_link(Page::History, "History") }
            </nav>
            <SessionControls />
        </header>
    }
}
