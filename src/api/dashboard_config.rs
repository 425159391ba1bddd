use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ChartLayout;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::PanelKind;

/// Environment variable overriding the simulation service base URL.
pub const API_BASE_URL_ENV: &str = "SIMVIZ_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Colors used by the dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    #[serde(default = "default_band_color")]
    pub band: Color,
    #[serde(default = "default_band_fill_alpha")]
    pub band_fill_alpha: f64,
    #[serde(default = "default_variance_color")]
    pub variance: Color,
    #[serde(default = "default_trace_color")]
    pub trace: Color,
    #[serde(default = "default_autocorrelation_color")]
    pub autocorrelation: Color,
    #[serde(default = "default_line_color")]
    pub history: Color,
    #[serde(default = "default_placeholder_color")]
    pub placeholder_text: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            band: default_band_color(),
            band_fill_alpha: default_band_fill_alpha(),
            variance: default_variance_color(),
            trace: default_trace_color(),
            autocorrelation: default_autocorrelation_color(),
            history: default_line_color(),
            placeholder_text: default_placeholder_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl ChartPalette {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.band,
            self.variance,
            self.trace,
            self.autocorrelation,
            self.history,
            self.placeholder_text,
        ] {
            color.validate()?;
        }
        if !self.band_fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.band_fill_alpha) {
            return Err(ChartError::InvalidData(
                "band fill alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Public dashboard bootstrap configuration.
///
/// Serializable so hosts can persist and load dashboard setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub chart_layout: ChartLayout,
    #[serde(default)]
    pub palette: ChartPalette,
    #[serde(default = "default_panels")]
    pub panels: Vec<PanelKind>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            chart_layout: ChartLayout::default(),
            palette: ChartPalette::default(),
            panels: default_panels(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_chart_layout(mut self, layout: ChartLayout) -> Self {
        self.chart_layout = layout;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_panels(mut self, panels: impl IntoIterator<Item = PanelKind>) -> Self {
        self.panels = panels.into_iter().collect();
        self
    }

    /// Applies `SIMVIZ_API_BASE_URL` when it is set and non-empty.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!(%url, "api base url taken from environment");
                self.with_api_base_url(url.trim())
            }
            _ => self,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "api base url must not be empty".to_owned(),
            ));
        }
        if self.panels.is_empty() {
            return Err(ChartError::InvalidData(
                "dashboard needs at least one panel".to_owned(),
            ));
        }
        for (i, panel) in self.panels.iter().enumerate() {
            if self.panels[..i].contains(panel) {
                return Err(ChartError::InvalidData(format!(
                    "panel `{panel}` is listed more than once"
                )));
            }
        }
        self.chart_layout.validate()?;
        self.palette.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize dashboard config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse dashboard config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

fn default_panels() -> Vec<PanelKind> {
    PanelKind::ALL.to_vec()
}

fn default_band_color() -> Color {
    Color::rgb(138.0 / 255.0, 93.0 / 255.0, 42.0 / 255.0)
}

fn default_band_fill_alpha() -> f64 {
    0.2
}

fn default_variance_color() -> Color {
    Color::rgb(176.0 / 255.0, 113.0 / 255.0, 49.0 / 255.0)
}

fn default_trace_color() -> Color {
    Color::rgb(59.0 / 255.0, 63.0 / 255.0, 69.0 / 255.0)
}

fn default_autocorrelation_color() -> Color {
    default_band_color()
}

fn default_line_color() -> Color {
    Color::rgb(27.0 / 255.0, 27.0 / 255.0, 31.0 / 255.0)
}

fn default_placeholder_color() -> Color {
    Color::rgb(0.45, 0.45, 0.45)
}

fn default_stroke_width() -> f64 {
    2.0
}
