use crate::config::ExecutionConfig;
use crate::error::ExecutionError;
use crate::execution::execution_backend::{ExecutionBackend, JobHandle, JobStatus};
use coderoom_core::Language;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Normalized outcome of one finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub output: String,
}

/// Runs code on the backend: submit, poll until terminal, reduce to text.
///
/// Each call is independent and only suspends on its own timer, so any number
/// may be in flight alongside room traffic.
#[derive(Clone)]
pub struct ExecutionOrchestrator {
    backend: Arc<dyn ExecutionBackend>,
    poll_interval: Duration,
    max_poll_duration: Duration,
}

impl ExecutionOrchestrator {
    pub fn new(
        backend: Arc<dyn ExecutionBackend>,
        poll_interval: Duration,
        max_poll_duration: Duration,
    ) -> Self {
        Self {
            backend,
            poll_interval,
            max_poll_duration,
        }
    }

    pub fn from_config(backend: Arc<dyn ExecutionBackend>, config: &ExecutionConfig) -> Self {
        Self::new(backend, config.poll_interval, config.max_poll_duration)
    }

    pub async fn execute(
        &self,
        source: &str,
        language_tag: &str,
        stdin: Option<&str>,
    ) -> Result<ExecutionResult, ExecutionError> {
        let language = Language::from_tag(language_tag)
            .ok_or_else(|| ExecutionError::UnsupportedLanguage(language_tag.to_owned()))?;

        let budget = self.max_poll_duration;
        let status = tokio::time::timeout(budget, self.run_job(source, language, stdin))
            .await
            .map_err(|_| {
                warn!("{} job did not finish within {:?}", language, budget);
                ExecutionError::Timeout(budget)
            })??;

        Ok(ExecutionResult {
            output: status.output_text(),
        })
    }

    /// Submit and poll to completion. The caller bounds the whole sequence.
    async fn run_job(
        &self,
        source: &str,
        language: Language,
        stdin: Option<&str>,
    ) -> Result<JobStatus, ExecutionError> {
        let handle = self
            .backend
            .submit(source, language, stdin.unwrap_or_default())
            .await
            .map_err(ExecutionError::Submission)?;
        info!("Submitted {} job {:?}", language, handle);

        let status = self.wait_for(&handle).await?;
        info!("Job {:?} finished: {}", handle, status.description);
        Ok(status)
    }

    async fn wait_for(&self, handle: &JobHandle) -> Result<JobStatus, ExecutionError> {
        loop {
            let status = self
                .backend
                .status(handle)
                .await
                .map_err(ExecutionError::Poll)?;

            if status.is_terminal() {
                return Ok(status);
            }

            debug!("Job {:?} is {}, polling again", handle, status.description);
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
