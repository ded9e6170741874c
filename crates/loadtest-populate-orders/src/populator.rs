//! Orders populator: drives randomized traffic against the orders API.

use crate::error::OrdersPopulatorError;
use loadtest_generator::{Method, OrderTrafficGenerator, RequestDescriptor};
use loadtest_http::{
    format_status_line, join_url, mask_url_credentials, HttpRequest, Method as HttpMethod,
    Transport, TRACE_ID_HEADER,
};
use rand::rngs::StdRng;
use rand::Rng;
use std::io::Write;
use std::ops::Range;
use std::time::Instant;
use tracing::{debug, info};

/// Sequential orders traffic driver.
///
/// Every request is awaited before the next one is built. There is no retry:
/// the first transport error is returned and nothing after it is sent.
pub struct OrdersPopulator<T, R = StdRng> {
    transport: T,
    generator: OrderTrafficGenerator<R>,
    target_url: String,
    /// `target_url` with any password masked, for log lines.
    logged_target: String,
    trace_id: String,
}

impl<T: Transport, R: Rng> OrdersPopulator<T, R> {
    /// Create a new orders populator.
    ///
    /// # Arguments
    ///
    /// * `transport` - Owned HTTP handle every call goes through
    /// * `generator` - Source of burst sizes, ids and payloads
    /// * `target_url` - Base URL of the orders API, e.g. `http://localhost:8080`
    /// * `trace_id` - Value of the `x-trace-id` header on every call
    pub fn new(
        transport: T,
        generator: OrderTrafficGenerator<R>,
        target_url: impl Into<String>,
        trace_id: impl Into<String>,
    ) -> Self {
        let target_url = target_url.into();
        Self {
            transport,
            generator,
            logged_target: mask_url_credentials(&target_url),
            target_url,
            trace_id: trace_id.into(),
        }
    }

    /// Run every outer step in `steps`, writing one status line per call to `out`.
    pub async fn run<W: Write>(
        &mut self,
        steps: Range<u64>,
        out: &mut W,
    ) -> Result<(), OrdersPopulatorError> {
        info!(
            "Driving orders traffic against {} for steps {}..{}",
            self.logged_target, steps.start, steps.end
        );
        let start_time = Instant::now();

        for step in steps.clone() {
            self.run_step(step, out).await?;
        }

        info!(
            "Finished steps {}..{} in {:?}",
            steps.start,
            steps.end,
            start_time.elapsed()
        );
        Ok(())
    }

    /// Run the five bursts of one outer step.
    pub async fn run_step<W: Write>(
        &mut self,
        step: u64,
        out: &mut W,
    ) -> Result<(), OrdersPopulatorError> {
        let requests = self.generator.step_requests(step)?;
        debug!("Step {step}: {} requests", requests.len());

        for request in &requests {
            let status = self.send(request).await?;
            writeln!(out, "{}", format_status_line(&request.path, status))?;
        }
        Ok(())
    }

    /// Send one request and return the status code the target answered with.
    pub async fn send(&self, request: &RequestDescriptor) -> Result<u16, OrdersPopulatorError> {
        let response = self.transport.send(self.to_http(request)?).await?;
        Ok(response.status)
    }

    fn to_http(&self, request: &RequestDescriptor) -> Result<HttpRequest, OrdersPopulatorError> {
        let mut http = HttpRequest::new(
            http_method(request.method),
            join_url(&self.target_url, &request.path),
        )
        .header(TRACE_ID_HEADER, self.trace_id.as_str());

        if let Some(body) = request.body_json()? {
            http = http.body(body);
        }
        Ok(http)
    }
}

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Post => HttpMethod::POST,
        Method::Get => HttpMethod::GET,
        Method::Delete => HttpMethod::DELETE,
        Method::Put => HttpMethod::PUT,
    }
}
