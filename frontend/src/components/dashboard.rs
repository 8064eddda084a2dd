use shared::dashboard::DashboardState;
use shared::format::{badge_class, percent, thumbnail_src};
use shared::{DetectionSummary, Page};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::header::render_header;
use super::stats_chart::StatsChart;
use super::utils::local_time;
use crate::api;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_state(DashboardState::default);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_dashboard_stats().await {
                    Ok(stats) => {
                        log::info!("Loaded dashboard stats: {} checks", stats.total);
                        state.set(DashboardState::Loaded(stats));
                    }
                    Err(e) => {
                        log::error!("Error loading dashboard stats: {}", e);
                        state.set(DashboardState::Failed);
                    }
                }
            });
        });
    }

    let (total, real_count, fake_count) = state.counters();

    html! {
        <div class="container">
            { render_header(Page::Dashboard, "Dashboard") }

            <main class="main-content">
                <section class="stats-grid">
                    { render_stat_card("totalChecks", "Total Checks", total, "") }
                    { render_stat_card("realCount", "Real Notes", real_count, "real") }
                    { render_stat_card("fakeCount", "Fake Notes", fake_count, "fake") }
                </section>

                <section class="chart-section">
                    <h2>{"Detection Summary"}</h2>
                    <StatsChart layout={state.chart()} />
                </section>

                <section class="recent-section">
                    <h2>{"Recent Detections"}</h2>
                    <div id="recentDetections" class="recent-list">
                        { render_recent(&state) }
                    </div>
                </section>
            </main>
        </div>
    }
}

fn render_stat_card(id: &'static str, title: &'static str, value: u64, kind: &'static str) -> Html {
    html! {
        <div class={classes!("stat-card", kind)}>
            <h3>{ title }</h3>
            <p id={id} class="stat-value">{ value.to_string() }</p>
        </div>
    }
}

fn render_recent(state: &DashboardState) -> Html {
    if let Some(message) = state.recent_placeholder() {
        return html! { <p class="no-data">{ message }</p> };
    }

    state.recent().iter().map(render_recent_card).collect::<Html>()
}

fn render_recent_card(item: &DetectionSummary) -> Html {
    html! {
        <div class="recent-card">
            <img src={thumbnail_src(&item.image_data)} alt="Currency" class="recent-image" />
            <div class="recent-info">
                <div class={classes!("recent-result", badge_class(&item.result))}>{ item.result.clone() }</div>
                <div class="recent-confidence">{ format!("{} confidence", percent(item.confidence)) }</div>
                <div class="recent-time">{ local_time(&item.timestamp) }</div>
            </div>
        </div>
    }
}
