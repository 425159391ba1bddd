use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{BandPoint, DataPoint, indexed_points, zip_band_points, zip_points};
use crate::error::{ChartError, ChartResult, RequestError};

/// Route of the simulation endpoint, relative to the service base URL.
pub const SIMULATE_ROUTE: &str = "/api/simulate";
/// Route of the liveness check, relative to the service base URL.
pub const HEALTH_ROUTE: &str = "/api/health";

pub const MIN_DIMENSIONS: u32 = 1;
pub const MAX_DIMENSIONS: u32 = 20;
pub const MIN_SAMPLES: u32 = 100;
pub const MAX_SAMPLES: u32 = 200_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationMethod {
    #[default]
    Standard,
    Importance,
    MetropolisHastings,
}

impl fmt::Display for SimulationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::Importance => "importance",
            Self::MetropolisHastings => "metropolis-hastings",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    #[default]
    Normal,
    Uniform,
    Custom,
}

/// Body of `POST /api/simulate`.
///
/// Doubles as the panel's form state: the controls edit it in place and a
/// run sends a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub method: SimulationMethod,
    pub distribution: DistributionKind,
    pub dimensions: u32,
    pub samples: u32,
    pub seed: Option<i64>,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            method: SimulationMethod::Standard,
            distribution: DistributionKind::Normal,
            dimensions: 2,
            samples: 5_000,
            seed: None,
        }
    }
}

impl SimulationRequest {
    #[must_use]
    pub fn with_method(mut self, method: SimulationMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_distribution(mut self, distribution: DistributionKind) -> Self {
        self.distribution = distribution;
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the bounds the service enforces on its side.
    pub fn validate(&self) -> ChartResult<()> {
        if !(MIN_DIMENSIONS..=MAX_DIMENSIONS).contains(&self.dimensions) {
            return Err(ChartError::InvalidData(format!(
                "dimensions must be in [{MIN_DIMENSIONS}, {MAX_DIMENSIONS}], got {}",
                self.dimensions
            )));
        }
        if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&self.samples) {
            return Err(ChartError::InvalidData(format!(
                "samples must be in [{MIN_SAMPLES}, {MAX_SAMPLES}], got {}",
                self.samples
            )));
        }
        Ok(())
    }
}

/// Body returned by `POST /api/simulate`.
///
/// `sample_sizes` and every `*_series` column are index-aligned. `trace` and
/// `autocorrelation` have their own lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub method: SimulationMethod,
    pub estimate: f64,
    pub variance: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub samples_used: u64,
    pub sample_sizes: Vec<u64>,
    pub estimate_series: Vec<f64>,
    pub variance_series: Vec<f64>,
    pub ci_low_series: Vec<f64>,
    pub ci_high_series: Vec<f64>,
    #[serde(default)]
    pub trace: Vec<f64>,
    #[serde(default)]
    pub autocorrelation: Vec<f64>,
}

/// Chart-ready series derived from one response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationSeries {
    pub convergence: Vec<BandPoint>,
    pub variance: Vec<DataPoint>,
    pub trace: Vec<DataPoint>,
    pub autocorrelation: Vec<DataPoint>,
}

impl SimulationResponse {
    /// Parses a response body, rejecting anything that cannot be charted.
    pub fn from_json_str(input: &str) -> Result<Self, RequestError> {
        let response: Self = serde_json::from_str(input)
            .map_err(|e| RequestError::MalformedResponse(format!("invalid json body: {e}")))?;
        response.validate()?;
        Ok(response)
    }

    /// Detects shape violations before any renderer sees the data.
    pub fn validate(&self) -> Result<(), RequestError> {
        let expected = self.sample_sizes.len();
        for (name, len) in [
            ("estimate_series", self.estimate_series.len()),
            ("variance_series", self.variance_series.len()),
            ("ci_low_series", self.ci_low_series.len()),
            ("ci_high_series", self.ci_high_series.len()),
        ] {
            if len != expected {
                return Err(RequestError::MalformedResponse(format!(
                    "`{name}` has {len} entries but `sample_sizes` has {expected}"
                )));
            }
        }

        let scalars = [
            ("estimate", self.estimate),
            ("variance", self.variance),
            ("ci_low", self.ci_low),
            ("ci_high", self.ci_high),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RequestError::MalformedResponse(format!(
                "`{name}` must be finite"
            )));
        }

        for (name, column) in [
            ("estimate_series", &self.estimate_series),
            ("variance_series", &self.variance_series),
            ("ci_low_series", &self.ci_low_series),
            ("ci_high_series", &self.ci_high_series),
            ("trace", &self.trace),
            ("autocorrelation", &self.autocorrelation),
        ] {
            if let Some(index) = column.iter().position(|value| !value.is_finite()) {
                return Err(RequestError::MalformedResponse(format!(
                    "`{name}[{index}]` must be finite"
                )));
            }
        }

        Ok(())
    }

    /// Builds the four chart series of a response.
    ///
    /// Convergence and variance use the reported sample sizes as x; trace is
    /// plotted from 1 and autocorrelation from lag 0.
    pub fn series(&self) -> ChartResult<SimulationSeries> {
        let sample_sizes: Vec<f64> = self.sample_sizes.iter().map(|&n| n as f64).collect();
        Ok(SimulationSeries {
            convergence: zip_band_points(
                &sample_sizes,
                &self.estimate_series,
                &self.ci_low_series,
                &self.ci_high_series,
            )?,
            variance: zip_points(&sample_sizes, &self.variance_series)?,
            trace: indexed_points(&self.trace, 1.0),
            autocorrelation: indexed_points(&self.autocorrelation, 0.0),
        })
    }
}

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
