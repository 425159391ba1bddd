use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ChartError, ChartResult, RequestError};
use crate::render::Renderer;

use super::{
    ChartView, DashboardConfig, PanelController, PanelKind, PanelStatus, RunCompletion,
    RunTicket, SimulationMethod, SimulationRequest, SimulationResponse, SimulationTransport,
    build_band_chart, build_history_chart, build_line_chart,
};

pub const RUN_LABEL: &str = "Run simulation";
pub const RUNNING_LABEL: &str = "Simulating...";
pub const FAILURE_TEXT: &str = "Simulation failed.";
pub const EMPTY_SUMMARY_TEXT: &str = "Run a simulation to see estimates.";

/// Headline numbers of one result, copied out for read-only views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub method: SimulationMethod,
    pub estimate: f64,
    pub variance: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub samples_used: u64,
}

impl From<&SimulationResponse> for ResultSummary {
    fn from(response: &SimulationResponse) -> Self {
        Self {
            method: response.method,
            estimate: response.estimate,
            variance: response.variance,
            ci_low: response.ci_low,
            ci_high: response.ci_high,
            samples_used: response.samples_used,
        }
    }
}

impl ResultSummary {
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "Estimate: {:.4} | Variance: {:.4}",
            self.estimate, self.variance
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelCharts {
    pub convergence: ChartView,
    pub variance: ChartView,
    pub trace: ChartView,
    pub autocorrelation: ChartView,
    pub history: ChartView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub kind: PanelKind,
    pub title: &'static str,
    pub status: PanelStatus,
    pub form: SimulationRequest,
    pub summary: Option<ResultSummary>,
    /// Failure text on `Error`, otherwise the result headline or a prompt.
    pub status_text: String,
    pub run_label: &'static str,
    pub run_enabled: bool,
    pub history_len: usize,
    pub charts: PanelCharts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub panels: Vec<PanelView>,
}

impl DashboardView {
    #[must_use]
    pub fn panel(&self, kind: PanelKind) -> Option<&PanelView> {
        self.panels.iter().find(|panel| panel.kind == kind)
    }
}

/// Side-by-side read of two panels' last results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub left: (PanelKind, Option<ResultSummary>),
    pub right: (PanelKind, Option<ResultSummary>),
}

/// Owns every panel controller and derives the view from their state.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    panels: IndexMap<PanelKind, PanelController>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> ChartResult<Self> {
        config.validate()?;
        let panels = config
            .panels
            .iter()
            .map(|&kind| (kind, PanelController::new(kind)))
            .collect();
        info!(panels = config.panels.len(), api = %config.api_base_url, "dashboard ready");
        Ok(Self { config, panels })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn panel_kinds(&self) -> Vec<PanelKind> {
        self.panels.keys().copied().collect()
    }

    #[must_use]
    pub fn panel(&self, kind: PanelKind) -> Option<&PanelController> {
        self.panels.get(&kind)
    }

    pub fn panel_mut(&mut self, kind: PanelKind) -> ChartResult<&mut PanelController> {
        self.panels
            .get_mut(&kind)
            .ok_or(ChartError::UnknownPanel { panel: kind })
    }

    /// Tears a panel down. Outcomes of its pending request become stale.
    pub fn remove_panel(&mut self, kind: PanelKind) -> Option<PanelController> {
        let removed = self.panels.shift_remove(&kind);
        if removed.is_some() {
            debug!(panel = %kind, "panel removed");
        }
        removed
    }

    pub fn begin_run(&mut self, kind: PanelKind) -> ChartResult<RunTicket> {
        self.panel_mut(kind)?.begin_run()
    }

    /// Routes an outcome to the panel named by the ticket.
    pub fn complete_run(
        &mut self,
        ticket: &RunTicket,
        outcome: Result<SimulationResponse, RequestError>,
    ) -> RunCompletion {
        match self.panels.get_mut(&ticket.panel) {
            Some(panel) => panel.complete_run(ticket, outcome),
            None => {
                debug!(panel = %ticket.panel, "outcome for a panel that no longer exists");
                RunCompletion::Stale
            }
        }
    }

    pub fn run_panel_with<T: SimulationTransport>(
        &mut self,
        kind: PanelKind,
        transport: &T,
    ) -> ChartResult<PanelStatus> {
        self.panel_mut(kind)?.run_with(transport)
    }

    pub fn reset_panel(&mut self, kind: PanelKind) -> ChartResult<()> {
        self.panel_mut(kind)?.reset();
        Ok(())
    }

    pub fn clear_history(&mut self, kind: PanelKind) -> ChartResult<()> {
        self.panel_mut(kind)?.clear_history();
        Ok(())
    }

    /// Reads two panels' last results without touching either panel.
    pub fn compare(&self, left: PanelKind, right: PanelKind) -> ChartResult<ComparisonView> {
        let summary_of = |kind: PanelKind| -> ChartResult<(PanelKind, Option<ResultSummary>)> {
            let panel = self
                .panels
                .get(&kind)
                .ok_or(ChartError::UnknownPanel { panel: kind })?;
            Ok((kind, panel.last_result().map(ResultSummary::from)))
        };
        Ok(ComparisonView {
            left: summary_of(left)?,
            right: summary_of(right)?,
        })
    }

    /// Pure projection of the current state into a view.
    pub fn view(&self) -> ChartResult<DashboardView> {
        let panels = self
            .panels
            .values()
            .map(|panel| self.panel_view(panel))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(DashboardView { panels })
    }

    /// Draws one chart slot, substituting a label for placeholders.
    pub fn render_chart<R: Renderer>(&self, chart: &ChartView, renderer: &mut R) -> ChartResult<()> {
        let frame = chart.to_frame(self.config.chart_layout, self.config.palette.placeholder_text);
        renderer.render(&frame)
    }

    fn panel_view(&self, panel: &PanelController) -> ChartResult<PanelView> {
        let status = panel.status();
        let summary = panel.last_result().map(ResultSummary::from);
        let status_text = match (status, summary) {
            (PanelStatus::Error, _) => FAILURE_TEXT.to_owned(),
            (_, Some(summary)) => summary.headline(),
            (_, None) => EMPTY_SUMMARY_TEXT.to_owned(),
        };
        let running = status == PanelStatus::Running;

        Ok(PanelView {
            kind: panel.kind(),
            title: panel.kind().title(),
            status,
            form: *panel.form(),
            summary,
            status_text,
            run_label: if running { RUNNING_LABEL } else { RUN_LABEL },
            run_enabled: !running,
            history_len: panel.history().len(),
            charts: self.panel_charts(panel)?,
        })
    }

    fn panel_charts(&self, panel: &PanelController) -> ChartResult<PanelCharts> {
        let layout = self.config.chart_layout;
        let palette = self.config.palette;
        let width = palette.stroke_width;
        let series = match panel.last_result() {
            Some(result) => result.series()?,
            None => Default::default(),
        };

        Ok(PanelCharts {
            convergence: build_band_chart(
                &series.convergence,
                layout,
                palette.band,
                palette.band_fill_alpha,
                width,
            )?,
            variance: build_line_chart(&series.variance, layout, palette.variance, width)?,
            trace: build_line_chart(&series.trace, layout, palette.trace, width)?,
            autocorrelation: build_line_chart(
                &series.autocorrelation,
                layout,
                palette.autocorrelation,
                width,
            )?,
            history: build_history_chart(panel.history(), layout, palette.history, width)?,
        })
    }
}
