// src/submit.rs
//! Validated request builders for the two upload endpoints.
//!
//! A draft mirrors the form state (every field optional or blankable);
//! `validate` turns it into a submission value or fails with the message
//! the user sees. Validation is pure: a draft that fails never reaches
//! the network.

use std::path::PathBuf;

use crate::error::ValidationError;
use crate::utils::get_file_extension;

/// Extensions the resume upload form accepts.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Form state for a resume upload.
#[derive(Debug, Clone, Default)]
pub struct ResumeDraft {
    pub user_id: i64,
    pub file: Option<PathBuf>,
}

/// A resume upload that passed local validation.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub user_id: i64,
    pub file: PathBuf,
}

impl ResumeDraft {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            file: None,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn validate(self) -> Result<ResumeUpload, ValidationError> {
        let file = self.file.ok_or(ValidationError::MissingResumeFile)?;
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(ValidationError::MissingResumeFile)?;

        match get_file_extension(name) {
            Some(ext) if RESUME_EXTENSIONS.contains(&ext.as_str()) => {}
            other => {
                return Err(ValidationError::UnsupportedResumeFile(
                    other.unwrap_or_else(|| name.to_string()),
                ))
            }
        }

        Ok(ResumeUpload {
            user_id: self.user_id,
            file,
        })
    }
}

/// Where a job description comes from. Exactly one source by construction;
/// the two-nullable-fields ambiguity of the form never exists here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    Url(String),
    File(PathBuf),
}

/// Form state for a job description submission.
#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub user_id: i64,
    pub title: String,
    pub company: String,
    pub source: Option<JobSource>,
}

/// A job submission that passed local validation.
#[derive(Debug, Clone)]
pub struct JobSubmission {
    pub user_id: i64,
    pub title: String,
    pub company: String,
    pub source: JobSource,
}

impl JobDraft {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(JobSource::Url(url.into()));
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.source = Some(JobSource::File(file));
        self
    }

    /// Required fields first (title, company, some source), then the source
    /// itself. A blank URL counts as a missing source, not a missing field;
    /// both messages match the original form.
    pub fn validate(self) -> Result<JobSubmission, ValidationError> {
        let title = self.title.trim();
        let company = self.company.trim();
        if title.is_empty() || company.is_empty() {
            return Err(ValidationError::IncompleteFields);
        }

        let source = match self.source {
            Some(JobSource::Url(url)) => {
                let url = url.trim().to_string();
                if url.is_empty() {
                    return Err(ValidationError::MissingJobSource);
                }
                JobSource::Url(url)
            }
            Some(JobSource::File(path)) => JobSource::File(path),
            None => return Err(ValidationError::IncompleteFields),
        };

        Ok(JobSubmission {
            user_id: self.user_id,
            title: title.to_string(),
            company: company.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_upload_requires_a_file() {
        let err = ResumeDraft::new(1).validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingResumeFile);
    }

    #[test]
    fn resume_upload_rejects_unknown_extension() {
        let err = ResumeDraft::new(1)
            .with_file(PathBuf::from("resume.png"))
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedResumeFile("png".into()));
    }

    #[test]
    fn resume_upload_accepts_pdf() {
        let upload = ResumeDraft::new(42)
            .with_file(PathBuf::from("cv_v3.pdf"))
            .validate()
            .unwrap();
        assert_eq!(upload.user_id, 42);
        assert_eq!(upload.file, PathBuf::from("cv_v3.pdf"));
    }

    #[test]
    fn job_submission_requires_title_and_company() {
        let err = JobDraft::new(1)
            .with_title("")
            .with_company("Acme")
            .with_url("https://example.com/job")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::IncompleteFields);
    }

    #[test]
    fn job_submission_with_no_source_is_incomplete() {
        let err = JobDraft::new(1)
            .with_title("Backend Engineer")
            .with_company("Acme")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::IncompleteFields);
    }

    #[test]
    fn blank_url_is_a_missing_source() {
        let err = JobDraft::new(1)
            .with_title("Backend Engineer")
            .with_company("Acme")
            .with_url("   ")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingJobSource);
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let err = JobDraft::new(1)
            .with_title("   ")
            .with_company("Acme")
            .with_url("https://example.com/job")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::IncompleteFields);
    }

    #[test]
    fn url_submission_validates_and_trims() {
        let submission = JobDraft::new(1)
            .with_title("  Backend Engineer ")
            .with_company("Acme")
            .with_url(" https://example.com/job ")
            .validate()
            .unwrap();
        assert_eq!(submission.title, "Backend Engineer");
        assert_eq!(
            submission.source,
            JobSource::Url("https://example.com/job".into())
        );
    }

    #[test]
    fn file_submission_validates() {
        let submission = JobDraft::new(1)
            .with_title("Backend Engineer")
            .with_company("Acme")
            .with_file(PathBuf::from("posting.txt"))
            .validate()
            .unwrap();
        assert_eq!(
            submission.source,
            JobSource::File(PathBuf::from("posting.txt"))
        );
    }
}
