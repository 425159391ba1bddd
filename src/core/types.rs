use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Drawing surface of one chart: viewport plus uniform inner padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub padding_px: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(420, 200),
            padding_px: 32.0,
        }
    }
}

impl ChartLayout {
    #[must_use]
    pub fn new(viewport: Viewport, padding_px: f64) -> Self {
        Self {
            viewport,
            padding_px,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "chart padding must be finite and >= 0".to_owned(),
            ));
        }
        let shortest_side = f64::from(self.viewport.width.min(self.viewport.height));
        if self.padding_px * 2.0 >= shortest_side {
            return Err(ChartError::InvalidData(
                "chart padding leaves no drawable area".to_owned(),
            ));
        }
        Ok(())
    }

    /// Horizontal pixel range, left to right.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (
            self.padding_px,
            f64::from(self.viewport.width) - self.padding_px,
        )
    }

    /// Vertical pixel range. Inverted so larger values are drawn higher.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (
            f64::from(self.viewport.height) - self.padding_px,
            self.padding_px,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Sample with a confidence band around its center value.
///
/// `low <= y <= high` is expected but not enforced; a violation draws a
/// crossed band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub x: f64,
    pub y: f64,
    pub low: f64,
    pub high: f64,
}

impl BandPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, low: f64, high: f64) -> Self {
        Self { x, y, low, high }
    }
}

/// `[min, max]` extent of a series along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scans values for their extent. Returns `None` for an empty input.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut extent: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        for value in values.into_iter().map(OrderedFloat) {
            extent = Some(match extent {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            });
        }
        extent.map(|(min, max)| Self::new(min.0, max.0))
    }

    /// Joins two extents, e.g. the `low` and `high` columns of a band.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartLayout, Domain, Viewport};

    #[test]
    fn domain_scan_handles_empty_and_single_inputs() {
        assert_eq!(Domain::from_values(Vec::<f64>::new()), None);

        let single = Domain::from_values([3.5]).expect("one value");
        assert_eq!(single, Domain::new(3.5, 3.5));
        assert!(single.is_degenerate());
    }

    #[test]
    fn domain_scan_finds_extent_regardless_of_order() {
        let domain = Domain::from_values([0.52, -1.0, 4.0, 0.5]).expect("values");
        assert_eq!(domain, Domain::new(-1.0, 4.0));
        assert_eq!(domain.span(), 5.0);
    }

    #[test]
    fn layout_rejects_padding_that_swallows_the_surface() {
        let layout = ChartLayout::new(Viewport::new(60, 60), 30.0);
        assert!(layout.validate().is_err());
        assert!(ChartLayout::default().validate().is_ok());
    }

    #[test]
    fn default_layout_ranges_invert_the_vertical_axis() {
        let layout = ChartLayout::default();
        assert_eq!(layout.x_range(), (32.0, 388.0));
        assert_eq!(layout.y_range(), (168.0, 32.0));
    }
}
