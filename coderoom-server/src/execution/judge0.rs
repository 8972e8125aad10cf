use crate::config::ExecutionConfig;
use crate::error::BackendError;
use crate::execution::execution_backend::{ExecutionBackend, JobHandle, JobStatus};
use async_trait::async_trait;
use coderoom_core::Language;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Judge0 CE reached through RapidAPI.
#[derive(Clone)]
pub struct Judge0Backend {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

#[derive(Serialize)]
struct SubmissionRequest<'a> {
    source_code: &'a str,
    language_id: u32,
    stdin: &'a str,
}

#[derive(Deserialize)]
struct SubmissionCreated {
    token: String,
}

#[derive(Debug, Deserialize)]
struct Submission {
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
    status: SubmissionStatus,
}

#[derive(Debug, Deserialize)]
struct SubmissionStatus {
    id: u32,
    #[serde(default)]
    description: String,
}

impl From<Submission> for JobStatus {
    fn from(s: Submission) -> Self {
        JobStatus {
            status_id: s.status.id,
            description: s.status.description,
            stdout: s.stdout,
            stderr: s.stderr,
            compile_output: s.compile_output,
        }
    }
}

impl Judge0Backend {
    pub fn new(config: &ExecutionConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ExecutionConfig) -> Self {
        Self {
            client,
            base_url: config.judge0_url.trim_end_matches('/').to_owned(),
            api_key: config.rapidapi_key.clone(),
            api_host: config.rapidapi_host.clone(),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
    }

    async fn check(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ExecutionBackend for Judge0Backend {
    async fn submit(
        &self,
        source: &str,
        language: Language,
        stdin: &str,
    ) -> Result<JobHandle, BackendError> {
        let body = SubmissionRequest {
            source_code: source,
            language_id: language.judge0_id(),
            stdin,
        };

        let request = self
            .client
            .post(format!("{}/submissions", self.base_url))
            .json(&body);
        let response = Self::check(self.authorize(request).send().await?).await?;

        let created: SubmissionCreated = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;
        debug!("Judge0 accepted {} job {}", language, created.token);

        Ok(JobHandle(created.token))
    }

    async fn status(&self, handle: &JobHandle) -> Result<JobStatus, BackendError> {
        let request = self
            .client
            .get(format!("{}/submissions/{}", self.base_url, handle.0));
        let response = Self::check(self.authorize(request).send().await?).await?;

        let submission: Submission = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        Ok(submission.into())
    }
}
