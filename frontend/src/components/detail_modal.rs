use gloo_events::EventListener;
use shared::format::{badge_class, percent, thumbnail_src};
use shared::history::DetailModal;
use shared::HistoryDetail;
use web_sys::EventTarget;
use yew::prelude::*;

use super::utils::local_time;

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub modal: DetailModal,
    pub on_close: Callback<()>,
    /// Emitted for every window click while open, with whether the click
    /// landed on the backdrop itself.
    pub on_backdrop_click: Callback<bool>,
}

#[function_component(DetailModalView)]
pub fn detail_modal_view(props: &DetailModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    {
        let backdrop_ref = backdrop_ref.clone();
        let on_backdrop_click = props.on_backdrop_click.clone();

        use_effect_with(props.modal.is_open(), move |is_open| {
            let listener = match (*is_open, web_sys::window()) {
                (true, Some(window)) => Some(EventListener::new(&window, "click", move |event| {
                    let backdrop: Option<EventTarget> = backdrop_ref.get().map(Into::into);
                    let target_is_backdrop = backdrop.is_some() && event.target() == backdrop;
                    on_backdrop_click.emit(target_is_backdrop);
                })),
                _ => None,
            };

            move || drop(listener)
        });
    }

    let Some(detail) = props.modal.detail() else {
        return html! {};
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div id="detailModal" class="modal" style="display: block;" ref={backdrop_ref}>
            <div class="modal-content">
                <span id="closeModal" class="close" onclick={on_close}>{"\u{00d7}"}</span>
                <div id="modalBody">
                    { render_detail(detail) }
                </div>
            </div>
        </div>
    }
}

fn render_detail(detail: &HistoryDetail) -> Html {
    let entry = &detail.entry;

    html! {
        <div class="detail-content">
            <img src={thumbnail_src(&entry.image_data)} alt="Currency" class="detail-image" />
            <div class="detail-info">
                <p><strong>{"ID:"}</strong>{ format!(" {}", entry.id) }</p>
                <p>
                    <strong>{"Result:"}</strong>{" "}
                    <span class={classes!("result-badge", badge_class(&entry.result))}>{ entry.result.clone() }</span>
                </p>
                <p><strong>{"Confidence:"}</strong>{ format!(" {}", percent(entry.confidence)) }</p>
                <p><strong>{"Date & Time:"}</strong>{ format!(" {}", local_time(&entry.timestamp)) }</p>
                <div class="detail-explanation">
                    <strong>{"Analysis:"}</strong>
                    <pre>{ detail.explanation.clone() }</pre>
                </div>
            </div>
        </div>
    }
}
