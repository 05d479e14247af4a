pub mod cli;
pub mod client;
pub mod environment;
pub mod error;
pub mod render;
pub mod submit;
pub mod types;
pub mod utils;

pub use client::HubClient;
pub use environment::EnvironmentConfig;
pub use error::{HubError, ValidationError};
pub use submit::{JobDraft, JobSource, JobSubmission, ResumeDraft, ResumeUpload};
