use shared::format::{badge_class, percent, thumbnail_src};
use shared::history::{DetailModal, HistoryState, DETAIL_LOAD_FAILED};
use shared::{HistoryEntry, HistoryId, Page};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::detail_modal::DetailModalView;
use super::header::render_header;
use super::utils::{alert, local_time};
use crate::api;

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let history = use_state(HistoryState::default);
    let modal = use_state(DetailModal::default);

    {
        let history = history.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_history().await {
                    Ok(entries) => {
                        log::info!("Loaded {} history entries", entries.len());
                        history.set(HistoryState::Loaded(entries));
                    }
                    Err(e) => {
                        log::error!("Error loading history: {}", e);
                        history.set(HistoryState::Failed);
                    }
                }
            });
        });
    }

    let view_details = {
        let modal = modal.clone();
        Callback::from(move |id: HistoryId| {
            let modal = modal.clone();
            spawn_local(async move {
                match api::fetch_history_detail(id).await {
                    Ok(detail) => {
                        let mut next = DetailModal::default();
                        next.open(detail);
                        modal.set(next);
                    }
                    Err(e) => {
                        log::error!("Error loading details for {}: {}", id, e);
                        alert(DETAIL_LOAD_FAILED);
                    }
                }
            });
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(DetailModal::Closed))
    };

    let on_backdrop_click = {
        let modal = modal.clone();
        Callback::from(move |target_is_backdrop: bool| {
            let mut next = (*modal).clone();
            if next.backdrop_click(target_is_backdrop) {
                modal.set(next);
            }
        })
    };

    html! {
        <div class="container">
            { render_header(Page::History, "Detection History") }

            <main class="main-content">
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Image"}</th>
                            <th>{"Result"}</th>
                            <th>{"Confidence"}</th>
                            <th>{"Date & Time"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody id="historyTableBody">
                        { render_rows(&history, &view_details) }
                    </tbody>
                </table>
            </main>

            <DetailModalView
                modal={(*modal).clone()}
                on_close={on_close}
                on_backdrop_click={on_backdrop_click}
            />
        </div>
    }
}

fn render_rows(history: &HistoryState, view_details: &Callback<HistoryId>) -> Html {
    if let Some(row) = history.placeholder() {
        return html! {
            <tr>
                <td colspan={row.colspan.to_string()} class={row.class}>{ row.message }</td>
            </tr>
        };
    }

    history
        .entries()
        .iter()
        .map(|entry| render_row(entry, view_details))
        .collect::<Html>()
}

fn render_row(entry: &HistoryEntry, view_details: &Callback<HistoryId>) -> Html {
    let id = entry.id;
    let onclick = view_details.reform(move |_: MouseEvent| id);

    html! {
        <tr key={id.to_string()}>
            <td>{ id.to_string() }</td>
            <td>
                <img src={thumbnail_src(&entry.image_data)} alt="Currency" class="history-thumbnail" />
            </td>
            <td>
                <span class={classes!("result-badge", badge_class(&entry.result))}>{ entry.result.clone() }</span>
            </td>
            <td>{ percent(entry.confidence) }</td>
            <td>{ local_time(&entry.timestamp) }</td>
            <td>
                <button class="view-btn" onclick={onclick}>{"View Details"}</button>
            </td>
        </tr>
    }
}
