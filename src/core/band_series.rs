use crate::core::{BandPoint, ChartLayout, Domain, LinearScale, PathVertex};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Deterministic geometry for a confidence-band chart.
///
/// `fill_polygon` walks the `low` boundary forward and then the `high`
/// boundary backward, so it holds exactly `2 * n` vertices and closes
/// implicitly between its last and first vertex.
/// `center_line` follows `y` forward and holds `n` vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandGeometry {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub fill_polygon: Vec<PathVertex>,
    pub center_line: Vec<PathVertex>,
}

/// Vertical extent of a band series, taken from `low`/`high` rather than `y`.
///
/// For well-formed bands this is `[min(low), max(high)]`. Crossed bands
/// (`low > high`) still produce an ordered domain.
#[must_use]
pub fn band_value_domain(points: &[BandPoint]) -> Option<Domain> {
    let lows = Domain::from_values(points.iter().map(|p| p.low))?;
    let highs = Domain::from_values(points.iter().map(|p| p.high))?;
    Some(lows.union(highs))
}

/// Projects band points through one scale per axis.
///
/// Fill and center line share the scales so both stay pixel-consistent.
#[must_use]
pub fn project_band_geometry(
    points: &[BandPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> BandGeometry {
    let mut fill_polygon = Vec::with_capacity(points.len() * 2);
    fill_polygon.extend(
        points
            .iter()
            .map(|p| PathVertex::new(x_scale.map(p.x), y_scale.map(p.low))),
    );
    fill_polygon.extend(
        points
            .iter()
            .rev()
            .map(|p| PathVertex::new(x_scale.map(p.x), y_scale.map(p.high))),
    );

    let center_line = points
        .iter()
        .map(|p| PathVertex::new(x_scale.map(p.x), y_scale.map(p.y)))
        .collect();

    BandGeometry {
        x_scale,
        y_scale,
        fill_polygon,
        center_line,
    }
}

impl BandGeometry {
    /// Fits x to the sample positions and y to the band extremes.
    ///
    /// Returns `Ok(None)` for an empty series.
    pub fn fit(points: &[BandPoint], layout: ChartLayout) -> ChartResult<Option<Self>> {
        layout.validate()?;

        let (x_start, x_end) = layout.x_range();
        let (y_start, y_end) = layout.y_range();
        let Some(x_scale) = LinearScale::fit(points.iter().map(|p| p.x), x_start, x_end)? else {
            return Ok(None);
        };
        let Some(y_domain) = band_value_domain(points) else {
            return Ok(None);
        };
        let y_scale = LinearScale::new(y_domain, y_start, y_end)?;

        Ok(Some(project_band_geometry(points, x_scale, y_scale)))
    }
}
