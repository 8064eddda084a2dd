use shared::format::{badge_class, bar_width, percent};
use shared::upload::UploadView;
use yew::prelude::*;

pub fn render_results(view: &UploadView) -> Html {
    if view.is_loading() {
        return html! {
            <div id="loading" class="loading">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Analyzing note..."}</p>
            </div>
        };
    }

    let Some(result) = view.result() else {
        return html! {};
    };

    let label = result.label.to_string();
    let confidence = percent(result.confidence);

    html! {
        <div id="resultsSection" class="results-section">
            <div class="result-header">
                <h2>{"Result"}</h2>
                <div id="resultLabel" class={classes!("result-label", badge_class(&label))}>
                    { label.clone() }
                </div>
            </div>
            <div class="confidence-meter">
                <div class="confidence-bar">
                    <div id="confidenceFill" class="confidence-fill" style={bar_width(result.confidence)}>
                        { confidence.clone() }
                    </div>
                </div>
                <p id="confidenceText" class="confidence-text">{ format!("Confidence: {}", confidence) }</p>
            </div>
            <div class="detailed-results">
                <h3>{"Explanation"}</h3>
                <p id="explanation" class="explanation">{ result.explanation.clone() }</p>
            </div>
        </div>
    }
}
