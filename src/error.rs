use thiserror::Error;

use crate::api::PanelKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("panel `{panel}` already has a request in flight")]
    PanelBusy { panel: PanelKind },

    #[error("panel `{panel}` is not part of this dashboard")]
    UnknownPanel { panel: PanelKind },
}

/// Failure of one simulation request.
///
/// Every kind collapses into the panel's `Error` status; the distinction is
/// kept only for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("connection to simulation service failed: {0}")]
    Transport(String),

    #[error("simulation service answered with status {status}")]
    Service { status: u16 },

    #[error("malformed simulation response: {0}")]
    MalformedResponse(String),
}
