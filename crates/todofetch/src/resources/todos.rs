//! Todos API endpoint

use std::future::Future;

use todofetch_core::retry::{BackoffStrategy, RetryObserver, RetryOutcome};
use todofetch_transport::HttpRequest;
use tracing::{debug, info, warn};

use crate::{
    client::Client,
    error::{Error, Result},
    types::Todo,
};

const TODOS_PATH: &str = "/todos";

/// Todos API resource.
#[derive(Clone, Debug)]
pub struct Todos {
    client: Client,
}

impl Todos {
    /// Create a new Todos resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the whole collection with a single request.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if no response arrived
    /// - [`Error::HttpStatus`] for any status other than 200
    /// - [`Error::Decode`] if the body is not an array of todos
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let url = self.client.config().endpoint(TODOS_PATH);
        let response = self.client.transport().send(HttpRequest::get(url)).await?;

        if !response.is_ok() {
            debug!(status = response.status, "Unexpected status listing todos");
            return Err(Error::HttpStatus {
                code: response.status,
            });
        }

        Ok(response.json()?)
    }

    /// Fetch the collection, retrying every failure with exponential backoff.
    ///
    /// Uses the attempt budget and initial delay from the client's
    /// configuration. Progress is reported to `observer`; `interrupt` cancels
    /// the run if it completes while waiting between attempts.
    ///
    /// # Errors
    ///
    /// Only [`Error::Interrupted`]. Fetch failures end up in
    /// [`RetryOutcome::Exhausted`].
    pub async fn list_with_retry<I, O>(
        &self,
        interrupt: I,
        observer: &O,
    ) -> Result<RetryOutcome<Vec<Todo>, Error>>
    where
        I: Future<Output = ()> + Send,
        O: RetryObserver + ?Sized,
    {
        let backoff = self.client.config().backoff();
        let outcome = backoff
            .execute_until(|| self.list(), interrupt, observer)
            .await?;

        match &outcome {
            RetryOutcome::Succeeded { value, attempts } => {
                info!(attempts, count = value.len(), "Fetched todos");
            }
            RetryOutcome::Exhausted {
                attempts,
                last_error,
            } => {
                warn!(attempts, error = %last_error, "Giving up on fetching todos");
            }
        }

        Ok(outcome)
    }
}
