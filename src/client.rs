// src/client.rs
//! HTTP client for the matching service. Multipart for the two upload
//! endpoints, plain JSON for the read endpoints.

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

use crate::error::HubError;
use crate::submit::{JobSource, JobSubmission, ResumeUpload};
use crate::types::{ApiDetail, JobRecord, MatchResult, Resume};
use crate::utils::content_type_for;

const UPLOAD_RESUME_ENDPOINT: &str = "/api/upload-resume/";
const UPLOAD_JOB_ENDPOINT: &str = "/api/upload-job-description/";
const RESUMES_ENDPOINT: &str = "/api/resumes";
const JOB_DESCRIPTIONS_ENDPOINT: &str = "/api/job-descriptions";
const MATCH_RESUMES_ENDPOINT: &str = "/api/match-resumes";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub struct HubClient {
    client: reqwest::Client,
    base_url: String,
}

impl HubClient {
    /// Create a new client. `timeout_secs` is the only deadline anywhere in
    /// the flow; there is no retry and no cancellation.
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, HubError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upload a new resume version. Returns the record created server-side.
    pub async fn upload_resume(&self, upload: &ResumeUpload) -> Result<Resume, HubError> {
        let url = format!("{}{}", self.base_url, UPLOAD_RESUME_ENDPOINT);

        let form = Form::new()
            .part("file", self.file_part(&upload.file).await?)
            .text("user_id", upload.user_id.to_string());

        info!("Uploading resume to {}", url);
        let response = self.client.post(&url).multipart(form).send().await?;
        self.parse_response(response, "Error uploading resume").await
    }

    /// Submit a job description from a URL or a local file.
    pub async fn submit_job(&self, submission: &JobSubmission) -> Result<JobRecord, HubError> {
        let url = format!("{}{}", self.base_url, UPLOAD_JOB_ENDPOINT);

        let form = Form::new()
            .text("user_id", submission.user_id.to_string())
            .text("title", submission.title.clone())
            .text("company", submission.company.clone());
        let form = match &submission.source {
            JobSource::Url(job_url) => form.text("url", job_url.clone()),
            JobSource::File(path) => form.part("file", self.file_part(path).await?),
        };

        info!("Submitting job description to {}", url);
        let response = self.client.post(&url).multipart(form).send().await?;
        self.parse_response(response, "Error processing job description")
            .await
    }

    /// All resumes uploaded by a user, in server order.
    pub async fn resumes(&self, user_id: i64) -> Result<Vec<Resume>, HubError> {
        self.get_json(
            &format!("{}/{}", RESUMES_ENDPOINT, user_id),
            "Error fetching resumes",
        )
        .await
    }

    /// All job descriptions submitted by a user.
    pub async fn job_descriptions(&self, user_id: i64) -> Result<Vec<JobRecord>, HubError> {
        self.get_json(
            &format!("{}/{}", JOB_DESCRIPTIONS_ENDPOINT, user_id),
            "Error fetching job descriptions",
        )
        .await
    }

    /// Ranked match result for one job against the user's resume versions.
    pub async fn match_resumes(&self, job_id: i64, user_id: i64) -> Result<MatchResult, HubError> {
        self.get_json(
            &format!("{}/{}?user_id={}", MATCH_RESUMES_ENDPOINT, job_id, user_id),
            "Error matching resumes",
        )
        .await
    }

    async fn get_json<R>(&self, path: &str, fallback: &str) -> Result<R, HubError>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        self.parse_response(response, fallback).await
    }

    async fn parse_response<R>(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<R, HubError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<R>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Service returned {}: {}", status, body);
            Err(HubError::Backend {
                status,
                detail: error_detail(&body, fallback),
            })
        }
    }

    async fn file_part(&self, path: &Path) -> Result<Part, HubError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let content = tokio::fs::read(path)
            .await
            .map_err(|source| HubError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let part = Part::bytes(content).file_name(file_name.clone());
        match content_type_for(&file_name) {
            Some(mime) => Ok(part.mime_str(mime)?),
            None => Ok(part),
        }
    }
}

/// Extract the `detail` message from a failure body, falling back to a
/// generic per-operation message when the body is not the expected shape.
pub(crate) fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiDetail>(body)
        .map(|d| d.detail)
        .unwrap_or_else(|_| fallback.to_string())
}
