use crate::core::{ChartLayout, DataPoint, LinearScale};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Vertex of a projected path in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathVertex {
    pub x: f64,
    pub y: f64,
}

impl PathVertex {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projects points through one scale per axis, preserving input order.
///
/// The result is strictly piecewise-linear: one vertex per sample and no
/// interpolation between samples. A single point yields a single vertex.
#[must_use]
pub fn project_line_path(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<PathVertex> {
    points
        .iter()
        .map(|point| PathVertex::new(x_scale.map(point.x), y_scale.map(point.y)))
        .collect()
}

/// Deterministic geometry for a plain line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub stroke: Vec<PathVertex>,
}

impl LineGeometry {
    /// Fits both axes to the extent of `points` and projects them into `layout`.
    ///
    /// Returns `Ok(None)` for an empty series; callers render a placeholder
    /// in that case.
    pub fn fit(points: &[DataPoint], layout: ChartLayout) -> ChartResult<Option<Self>> {
        layout.validate()?;

        let (x_start, x_end) = layout.x_range();
        let (y_start, y_end) = layout.y_range();
        let Some(x_scale) = LinearScale::fit(points.iter().map(|p| p.x), x_start, x_end)? else {
            return Ok(None);
        };
        let Some(y_scale) = LinearScale::fit(points.iter().map(|p| p.y), y_start, y_end)? else {
            return Ok(None);
        };

        Ok(Some(Self {
            x_scale,
            y_scale,
            stroke: project_line_path(points, x_scale, y_scale),
        }))
    }
}
