use crate::error::RequestError;

use super::{SimulationRequest, SimulationResponse};

/// Boundary to the remote simulation service.
///
/// The only suspension point of a run: everything before and after the call
/// is pure state manipulation.
pub trait SimulationTransport {
    fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResponse, RequestError>;
}

impl<T: SimulationTransport + ?Sized> SimulationTransport for &T {
    fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResponse, RequestError> {
        (**self).simulate(request)
    }
}

#[cfg(feature = "http-client")]
pub use http::HttpSimulationClient;

#[cfg(feature = "http-client")]
mod http {
    use std::time::Duration;

    use tracing::{debug, warn};

    use crate::api::{HEALTH_ROUTE, HealthStatus, SIMULATE_ROUTE};
    use crate::error::{ChartError, ChartResult, RequestError};

    use super::{SimulationRequest, SimulationResponse, SimulationTransport};

    /// Blocking JSON client for the simulation service.
    ///
    /// No timeout is configured unless the host asks for one.
    #[derive(Debug, Clone)]
    pub struct HttpSimulationClient {
        client: reqwest::blocking::Client,
        base_url: String,
    }

    impl HttpSimulationClient {
        pub fn new(base_url: impl Into<String>) -> ChartResult<Self> {
            Self::build(base_url.into(), None)
        }

        pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ChartResult<Self> {
            Self::build(base_url.into(), Some(timeout))
        }

        fn build(base_url: String, timeout: Option<Duration>) -> ChartResult<Self> {
            let base_url = base_url.trim_end_matches('/').to_owned();
            if base_url.is_empty() {
                return Err(ChartError::InvalidData(
                    "service base url must not be empty".to_owned(),
                ));
            }

            let mut builder = reqwest::blocking::Client::builder();
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            let client = builder
                .build()
                .map_err(|e| ChartError::InvalidData(format!("http client error: {e}")))?;
            Ok(Self { client, base_url })
        }

        #[must_use]
        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        #[must_use]
        pub fn endpoint(&self, route: &str) -> String {
            format!("{}{route}", self.base_url)
        }

        /// Calls `GET /api/health`.
        pub fn health(&self) -> Result<HealthStatus, RequestError> {
            let response = self
                .client
                .get(self.endpoint(HEALTH_ROUTE))
                .send()
                .map_err(map_send_error)?;
            let response = ensure_success(response)?;
            response
                .json::<HealthStatus>()
                .map_err(|e| RequestError::MalformedResponse(format!("health body: {e}")))
        }
    }

    impl SimulationTransport for HttpSimulationClient {
        fn simulate(
            &self,
            request: &SimulationRequest,
        ) -> Result<SimulationResponse, RequestError> {
            let url = self.endpoint(SIMULATE_ROUTE);
            debug!(%url, method = %request.method, samples = request.samples, "issuing simulation request");

            let response = self
                .client
                .post(url)
                .json(request)
                .send()
                .map_err(map_send_error)?;
            let response = ensure_success(response)?;
            let body = response.text().map_err(map_send_error)?;
            SimulationResponse::from_json_str(&body)
        }
    }

    fn ensure_success(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, RequestError> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "simulation service rejected request");
            return Err(RequestError::Service {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    fn map_send_error(err: reqwest::Error) -> RequestError {
        RequestError::Transport(err.to_string())
    }
}
