use tracing::trace;

use crate::core::{
    BandGeometry, BandPoint, ChartLayout, DataPoint, HistoryBuffer, HistorySeries, LineGeometry,
};
use crate::error::ChartResult;
use crate::render::{Color, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

pub const NO_DATA_PLACEHOLDER: &str = "No data";
pub const HISTORY_PLACEHOLDER: &str = "Run at least twice to chart history.";

const PLACEHOLDER_FONT_SIZE_PX: f64 = 13.0;

/// What a chart slot shows: a drawable frame or explanatory text.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    Chart(RenderFrame),
    Placeholder(String),
}

impl ChartView {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    #[must_use]
    pub fn frame(&self) -> Option<&RenderFrame> {
        match self {
            Self::Chart(frame) => Some(frame),
            Self::Placeholder(_) => None,
        }
    }

    /// Materializes the view, turning placeholders into a centered label.
    #[must_use]
    pub fn to_frame(&self, layout: ChartLayout, text_color: Color) -> RenderFrame {
        match self {
            Self::Chart(frame) => frame.clone(),
            Self::Placeholder(text) => build_placeholder_frame(layout, text, text_color),
        }
    }
}

/// Stroke-only line chart. Empty input yields a placeholder.
pub fn build_line_chart(
    points: &[DataPoint],
    layout: ChartLayout,
    color: Color,
    stroke_width: f64,
) -> ChartResult<ChartView> {
    let Some(geometry) = LineGeometry::fit(points, layout)? else {
        return Ok(ChartView::Placeholder(NO_DATA_PLACEHOLDER.to_owned()));
    };
    trace!(vertices = geometry.stroke.len(), "built line chart");

    let stroke = PathPrimitive::from_vertices(&geometry.stroke).with_stroke(stroke_width, color);
    Ok(ChartView::Chart(
        RenderFrame::new(layout.viewport).with_path(stroke),
    ))
}

/// Confidence band with its center line drawn on top.
pub fn build_band_chart(
    points: &[BandPoint],
    layout: ChartLayout,
    color: Color,
    fill_alpha: f64,
    stroke_width: f64,
) -> ChartResult<ChartView> {
    let Some(geometry) = BandGeometry::fit(points, layout)? else {
        return Ok(ChartView::Placeholder(NO_DATA_PLACEHOLDER.to_owned()));
    };
    trace!(
        fill_vertices = geometry.fill_polygon.len(),
        line_vertices = geometry.center_line.len(),
        "built band chart"
    );

    let fill = PathPrimitive::from_vertices(&geometry.fill_polygon)
        .with_fill(color.with_alpha(fill_alpha));
    let center =
        PathPrimitive::from_vertices(&geometry.center_line).with_stroke(stroke_width, color);
    Ok(ChartView::Chart(
        RenderFrame::new(layout.viewport)
            .with_path(fill)
            .with_path(center),
    ))
}

/// History of a panel plotted against entry index.
pub fn build_history_chart(
    history: &HistoryBuffer,
    layout: ChartLayout,
    color: Color,
    stroke_width: f64,
) -> ChartResult<ChartView> {
    match history.series() {
        HistorySeries::Insufficient { .. } => {
            Ok(ChartView::Placeholder(HISTORY_PLACEHOLDER.to_owned()))
        }
        HistorySeries::Ready(points) => build_line_chart(&points, layout, color, stroke_width),
    }
}

#[must_use]
pub fn build_placeholder_frame(layout: ChartLayout, text: &str, color: Color) -> RenderFrame {
    let x = f64::from(layout.viewport.width) / 2.0;
    let y = f64::from(layout.viewport.height) / 2.0;
    RenderFrame::new(layout.viewport).with_text(TextPrimitive::new(
        text,
        x,
        y,
        PLACEHOLDER_FONT_SIZE_PX,
        color,
        TextHAlign::Center,
    ))
}
