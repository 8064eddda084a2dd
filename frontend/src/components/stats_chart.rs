use shared::chart::{ChartLayout, DrawOp};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsChartProps {
    pub layout: ChartLayout,
}

#[function_component(StatsChart)]
pub fn stats_chart(props: &StatsChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(props.layout.clone(), move |layout| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw(&canvas, layout) {
                    log::error!("Failed to draw stats chart: {:?}", e);
                }
            }
        });
    }

    html! {
        <canvas id="statsChart" ref={canvas_ref}></canvas>
    }
}

/// Replays the layout onto the canvas. Resizing the canvas also clears it.
fn draw(canvas: &HtmlCanvasElement, layout: &ChartLayout) -> Result<(), JsValue> {
    canvas.set_width(layout.width);
    canvas.set_height(layout.height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    for op in &layout.ops {
        match op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x, *y, *width, *height);
            }
            DrawOp::FillText {
                text,
                x,
                y,
                font,
                color,
                align,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(font);
                ctx.set_text_align(align.as_css());
                ctx.fill_text(text, *x, *y)?;
            }
        }
    }

    Ok(())
}
