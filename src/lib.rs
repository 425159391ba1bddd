//! simviz: chart geometry and panel lifecycle for a Monte Carlo dashboard.
//!
//! The crate maps simulation series returned by a remote service into
//! bounded drawing surfaces and tracks every dashboard panel through an
//! explicit, race-free request state machine.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, PanelController, PanelKind, PanelStatus};
pub use error::{ChartError, ChartResult, RequestError};
