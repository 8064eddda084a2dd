//! Layout of the dashboard's REAL/FAKE comparison chart.
//!
//! The chart is produced as a list of draw operations so that the canvas
//! code in the frontend only replays them. Coordinates are canvas pixels with
//! the origin at the top-left corner.

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 200;

pub const BAR_WIDTH: f64 = 80.0;
pub const MAX_BAR_HEIGHT: f64 = 150.0;
pub const REAL_BAR_X: f64 = 100.0;
pub const FAKE_BAR_X: f64 = 220.0;
const BAR_TOP_MARGIN: f64 = 30.0;
const COUNT_OFFSET: f64 = 10.0;
const LABEL_Y: f64 = MAX_BAR_HEIGHT + 50.0;

pub const REAL_COLOR: &str = "#4CAF50";
pub const FAKE_COLOR: &str = "#f44336";
const TEXT_COLOR: &str = "#333";
const EMPTY_TEXT_COLOR: &str = "#666";
const LABEL_FONT: &str = "bold 14px Arial";
const EMPTY_FONT: &str = "16px Arial";

pub const NO_DATA_MESSAGE: &str = "No data available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: &'static str,
        color: &'static str,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

/// Height of a bar for `count` when the taller bar stands for `max`.
pub fn bar_height(count: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    count as f64 / max as f64 * MAX_BAR_HEIGHT
}

impl ChartLayout {
    pub fn for_counts(real_count: u64, fake_count: u64) -> Self {
        let mut ops = Vec::new();

        if real_count == 0 && fake_count == 0 {
            ops.push(DrawOp::FillText {
                text: NO_DATA_MESSAGE.to_string(),
                x: f64::from(CANVAS_WIDTH) / 2.0,
                y: f64::from(CANVAS_HEIGHT) / 2.0,
                font: EMPTY_FONT,
                color: EMPTY_TEXT_COLOR,
                align: TextAlign::Center,
            });
            return Self::with_ops(ops);
        }

        let max = real_count.max(fake_count);
        let bars = [
            ("REAL", real_count, REAL_BAR_X, REAL_COLOR),
            ("FAKE", fake_count, FAKE_BAR_X, FAKE_COLOR),
        ];

        for (_, count, x, color) in bars {
            let height = bar_height(count, max);
            ops.push(DrawOp::FillRect {
                x,
                y: MAX_BAR_HEIGHT - height + BAR_TOP_MARGIN,
                width: BAR_WIDTH,
                height,
                color,
            });
        }

        for (name, _, x, _) in bars {
            ops.push(Self::label(name.to_string(), x + BAR_WIDTH / 2.0, LABEL_Y));
        }

        for (_, count, x, _) in bars {
            let height = bar_height(count, max);
            ops.push(Self::label(
                count.to_string(),
                x + BAR_WIDTH / 2.0,
                MAX_BAR_HEIGHT - height + BAR_TOP_MARGIN - COUNT_OFFSET,
            ));
        }

        Self::with_ops(ops)
    }

    /// An empty canvas of the chart's size.
    pub fn blank() -> Self {
        Self::with_ops(Vec::new())
    }

    fn with_ops(ops: Vec<DrawOp>) -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            ops,
        }
    }

    fn label(text: String, x: f64, y: f64) -> DrawOp {
        DrawOp::FillText {
            text,
            x,
            y,
            font: LABEL_FONT,
            color: TEXT_COLOR,
            align: TextAlign::Center,
        }
    }

    pub fn bars(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
