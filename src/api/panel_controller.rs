use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::HistoryBuffer;
use crate::error::{ChartError, ChartResult, RequestError};

use super::{SimulationMethod, SimulationRequest, SimulationResponse, SimulationTransport};

/// Ticket generations are unique across every controller in the process.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Independently-lifecycled dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Standard,
    ImportanceSampling,
    Convergence,
}

impl PanelKind {
    pub const ALL: [Self; 3] = [Self::Standard, Self::ImportanceSampling, Self::Convergence];

    /// Form state a panel starts with and returns to on reset.
    #[must_use]
    pub fn default_request(self) -> SimulationRequest {
        match self {
            Self::Standard | Self::Convergence => SimulationRequest::default(),
            Self::ImportanceSampling => {
                SimulationRequest::default().with_method(SimulationMethod::Importance)
            }
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Standard => "Standard Monte Carlo",
            Self::ImportanceSampling => "Importance Sampling",
            Self::Convergence => "Convergence",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::ImportanceSampling => "importance-sampling",
            Self::Convergence => "convergence",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PanelStatus {
    #[default]
    Idle,
    Running,
    Error,
}

/// Everything one panel owns. No other panel mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub status: PanelStatus,
    pub form: SimulationRequest,
    pub last_result: Option<SimulationResponse>,
    pub history: HistoryBuffer,
}

/// Proof of one issued request.
///
/// The host performs the call described by `request` and hands the outcome
/// back together with this ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub panel: PanelKind,
    pub generation: u64,
    pub request: SimulationRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCompletion {
    /// Outcome was applied; carries the resulting status.
    Applied(PanelStatus),
    /// Ticket no longer matches the panel's in-flight request.
    Stale,
}

/// State machine for one panel:
/// `Idle -> Running -> Idle | Error`, `Error -> Running`.
///
/// Not `Clone`: a copy would accept the tickets issued by the original.
#[derive(Debug)]
pub struct PanelController {
    kind: PanelKind,
    defaults: SimulationRequest,
    state: PanelState,
    in_flight: Option<u64>,
}

impl PanelController {
    #[must_use]
    pub fn new(kind: PanelKind) -> Self {
        Self::with_defaults(kind, kind.default_request())
    }

    #[must_use]
    pub fn with_defaults(kind: PanelKind, defaults: SimulationRequest) -> Self {
        Self {
            kind,
            defaults,
            state: PanelState {
                status: PanelStatus::Idle,
                form: defaults,
                last_result: None,
                history: HistoryBuffer::new(),
            },
            in_flight: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> PanelStatus {
        self.state.status
    }

    #[must_use]
    pub fn form(&self) -> &SimulationRequest {
        &self.state.form
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&SimulationResponse> {
        self.state.last_result.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryBuffer {
        &self.state.history
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Replaces the form inputs used by the next run.
    pub fn set_form(&mut self, form: SimulationRequest) {
        self.state.form = form;
    }

    /// Edits the form inputs in place.
    pub fn update_form(&mut self, edit: impl FnOnce(&mut SimulationRequest)) {
        edit(&mut self.state.form);
    }

    /// Moves to `Running` and issues exactly one request.
    ///
    /// Fails without touching state when a request is already in flight or
    /// the form is out of bounds.
    pub fn begin_run(&mut self) -> ChartResult<RunTicket> {
        if self.in_flight.is_some() {
            warn!(panel = %self.kind, "run requested while a request is in flight");
            return Err(ChartError::PanelBusy { panel: self.kind });
        }
        self.state.form.validate()?;

        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.in_flight = Some(generation);
        self.state.status = PanelStatus::Running;
        debug!(panel = %self.kind, generation, "panel run started");

        Ok(RunTicket {
            panel: self.kind,
            generation,
            request: self.state.form,
        })
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Success appends the estimate to history, stores the result and
    /// returns to `Idle`. Failure moves to `Error` and keeps the previous
    /// result visible. Tickets that do not match the in-flight request are
    /// ignored.
    pub fn complete_run(
        &mut self,
        ticket: &RunTicket,
        outcome: Result<SimulationResponse, RequestError>,
    ) -> RunCompletion {
        if ticket.panel != self.kind || self.in_flight != Some(ticket.generation) {
            debug!(
                panel = %self.kind,
                generation = ticket.generation,
                "ignoring stale run outcome"
            );
            return RunCompletion::Stale;
        }
        self.in_flight = None;

        match outcome.and_then(|response| response.validate().map(|()| response)) {
            Ok(response) => {
                self.state.history = self.state.history.append(response.estimate);
                trace!(
                    panel = %self.kind,
                    history_len = self.state.history.len(),
                    "appended run estimate to history"
                );
                self.state.last_result = Some(response);
                self.state.status = PanelStatus::Idle;
            }
            Err(err) => {
                warn!(panel = %self.kind, error = %err, "panel run failed");
                self.state.status = PanelStatus::Error;
            }
        }

        RunCompletion::Applied(self.state.status)
    }

    /// Runs one request to completion through `transport`.
    pub fn run_with<T: SimulationTransport>(&mut self, transport: &T) -> ChartResult<PanelStatus> {
        let ticket = self.begin_run()?;
        let outcome = transport.simulate(&ticket.request);
        self.complete_run(&ticket, outcome);
        Ok(self.state.status)
    }

    /// Restores default form inputs.
    ///
    /// History and last result are kept. A pending request is abandoned:
    /// the panel returns to `Idle` and the eventual outcome is stale.
    pub fn reset(&mut self) {
        self.state.form = self.defaults;
        if let Some(generation) = self.in_flight.take() {
            debug!(panel = %self.kind, generation, "reset abandoned in-flight run");
            self.state.status = PanelStatus::Idle;
        }
    }

    pub fn clear_history(&mut self) {
        self.state.history = self.state.history.clear();
    }
}
