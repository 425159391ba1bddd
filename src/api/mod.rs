mod chart_frame_builder;
mod dashboard;
mod dashboard_config;
mod panel_controller;
mod simulation_contract;
mod transport;

pub use chart_frame_builder::{
    ChartView, HISTORY_PLACEHOLDER, NO_DATA_PLACEHOLDER, build_band_chart, build_history_chart,
    build_line_chart, build_placeholder_frame,
};
pub use dashboard::{
    ComparisonView, Dashboard, DashboardView, EMPTY_SUMMARY_TEXT, FAILURE_TEXT, PanelCharts,
    PanelView, RUN_LABEL, RUNNING_LABEL, ResultSummary,
};
pub use dashboard_config::{API_BASE_URL_ENV, ChartPalette, DEFAULT_API_BASE_URL, DashboardConfig};
pub use panel_controller::{
    PanelController, PanelKind, PanelState, PanelStatus, RunCompletion, RunTicket,
};
pub use simulation_contract::{
    DistributionKind, HEALTH_ROUTE, HealthStatus, MAX_DIMENSIONS, MAX_SAMPLES, MIN_DIMENSIONS,
    MIN_SAMPLES, SIMULATE_ROUTE, SimulationMethod, SimulationRequest, SimulationResponse,
    SimulationSeries,
};
pub use transport::SimulationTransport;

#[cfg(feature = "http-client")]
pub use transport::HttpSimulationClient;
