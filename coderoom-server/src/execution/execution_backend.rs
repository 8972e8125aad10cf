use crate::error::BackendError;
use async_trait::async_trait;
use coderoom_core::Language;

/// Statuses below this id mean the job is still queued or running.
pub const FIRST_TERMINAL_STATUS: u32 = 3;

pub const NO_OUTPUT: &str = "No output";

/// Opaque token the backend hands out for a submitted job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(pub String);

/// One status report for a job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStatus {
    pub status_id: u32,
    pub description: String,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        self.status_id >= FIRST_TERMINAL_STATUS
    }

    /// First non-empty of stdout, stderr, compile output, or [`NO_OUTPUT`].
    pub fn output_text(&self) -> String {
        [&self.stdout, &self.stderr, &self.compile_output]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| NO_OUTPUT.to_owned())
    }
}

/// A remote service that runs source code as submit-then-poll jobs.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn submit(
        &self,
        source: &str,
        language: Language,
        stdin: &str,
    ) -> Result<JobHandle, BackendError>;

    async fn status(&self, handle: &JobHandle) -> Result<JobStatus, BackendError>;
}
