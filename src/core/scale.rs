use serde::{Deserialize, Serialize};

use crate::core::types::Domain;
use crate::error::{ChartError, ChartResult};

/// Maps `value` from `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// A degenerate domain (`domain_min == domain_max`) maps every value to the
/// middle of the range. Values outside the domain extrapolate linearly.
#[must_use]
pub fn scale(value: f64, domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> f64 {
    if domain_max == domain_min {
        return (range_min + range_max) / 2.0;
    }

    let mut span = domain_max - domain_min;
    let mut offset = value - domain_min;
    if !span.is_finite() || !offset.is_finite() {
        // Extents near f64::MAX overflow the subtraction.
        span = domain_max / 2.0 - domain_min / 2.0;
        offset = value / 2.0 - domain_min / 2.0;
    }

    let t = offset / span;
    let range_span = range_max - range_min;
    if !range_span.is_finite() {
        return range_min * (1.0 - t) + range_max * t;
    }
    range_min + t * range_span
}

/// Linear mapping from one data domain to one pixel range.
///
/// Built fresh from the data on every render; never cached across runs
/// because the domain changes with each response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Domain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: Domain, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !domain.min.is_finite() || !domain.max.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if domain.min > domain.max {
            return Err(ChartError::InvalidData(
                "scale domain min must be <= max".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range_start,
            range_end,
        })
    }

    /// Builds a scale over the extent of `values`; `None` when empty.
    pub fn fit(
        values: impl IntoIterator<Item = f64>,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Option<Self>> {
        Domain::from_values(values)
            .map(|domain| Self::new(domain, range_start, range_end))
            .transpose()
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        scale(
            value,
            self.domain.min,
            self.domain.max,
            self.range_start,
            self.range_end,
        )
    }
}
