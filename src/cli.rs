// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

use crate::client::HubClient;
use crate::environment::EnvironmentConfig;
use crate::error::HubError;
use crate::render::{MatchReportView, ResumeListView};
use crate::submit::{JobDraft, ResumeDraft};
use crate::types::JobRecord;

#[derive(Parser)]
#[command(name = "rephub")]
#[command(about = "Client for the resume/job matching service")]
pub struct HubCli {
    #[command(subcommand)]
    pub command: HubCommand,

    /// User identifier sent with every request
    #[arg(long, default_value_t = 1)]
    pub user: i64,

    /// Override the service base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum HubCommand {
    /// Upload a new resume version
    UploadResume { file: PathBuf },
    /// Submit a job description from a URL or an uploaded file
    SubmitJob {
        title: String,
        company: String,
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List uploaded resumes
    Resumes,
    /// List submitted job descriptions
    Jobs,
    /// Rank uploaded resumes against a submitted job description
    Match { job_id: i64 },
}

pub async fn handle_command(cli: HubCli, config: EnvironmentConfig) -> Result<()> {
    let base_url = cli.api_url.unwrap_or(config.api_base_url);
    let client = HubClient::new(base_url, config.request_timeout_secs)?;

    match cli.command {
        HubCommand::UploadResume { file } => {
            let upload = match ResumeDraft::new(cli.user).with_file(file).validate() {
                Ok(upload) => upload,
                Err(e) => {
                    println!("❌ {}", e);
                    return Ok(());
                }
            };

            match client.upload_resume(&upload).await {
                Ok(resume) => {
                    println!("✅ Resume uploaded successfully!");
                    println!("   Version: {}", resume.version);
                    println!(
                        "   Uploaded: {}",
                        resume.upload_date.format("%b %d, %Y %H:%M")
                    );
                    if !resume.skills().is_empty() {
                        println!("   Skills found: {}", resume.skills().len());
                    }
                }
                Err(e) => report_failure("Resume upload", e),
            }
        }

        HubCommand::SubmitJob {
            title,
            company,
            url,
            file,
        } => {
            let mut draft = JobDraft::new(cli.user).with_title(title).with_company(company);
            if let Some(url) = url {
                draft = draft.with_url(url);
            } else if let Some(file) = file {
                draft = draft.with_file(file);
            }

            let submission = match draft.validate() {
                Ok(submission) => submission,
                Err(e) => {
                    println!("❌ {}", e);
                    return Ok(());
                }
            };

            match client.submit_job(&submission).await {
                Ok(record) => {
                    println!("✅ Job description processed successfully!");
                    print_job(&record);
                }
                Err(e) => report_failure("Job submission", e),
            }
        }

        HubCommand::Resumes => match client.resumes(cli.user).await {
            Ok(resumes) => {
                for line in ResumeListView::build(&resumes).render_lines() {
                    println!("{}", line);
                }
            }
            Err(e) => report_failure("Resume listing", e),
        },

        HubCommand::Jobs => match client.job_descriptions(cli.user).await {
            Ok(jobs) => {
                if jobs.is_empty() {
                    println!("No job descriptions submitted yet.");
                } else {
                    for job in &jobs {
                        print_job(job);
                    }
                }
            }
            Err(e) => report_failure("Job listing", e),
        },

        HubCommand::Match { job_id } => match client.match_resumes(job_id, cli.user).await {
            Ok(result) => match MatchReportView::build(&result) {
                Some(report) => {
                    for line in report.render_lines() {
                        println!("{}", line);
                    }
                }
                None => println!("No match results for this job yet."),
            },
            Err(e) => report_failure("Matching", e),
        },
    }

    Ok(())
}

fn print_job(job: &JobRecord) {
    println!(
        "#{}  {} at {}  submitted {}",
        job.id,
        job.title,
        job.company,
        job.upload_date.format("%b %d, %Y %H:%M")
    );
    if let Some(url) = &job.url {
        println!("   {}", url);
    }
}

fn report_failure(operation: &str, err: HubError) {
    error!("{} failed: {}", operation, err);
    println!("❌ {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_and_file_are_mutually_exclusive() {
        let parsed = HubCli::try_parse_from([
            "rephub",
            "submit-job",
            "Backend Engineer",
            "Acme",
            "--url",
            "https://example.com/job",
            "--file",
            "posting.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn parses_upload_resume() {
        let cli = HubCli::try_parse_from(["rephub", "--user", "7", "upload-resume", "cv.pdf"])
            .unwrap();
        assert_eq!(cli.user, 7);
        assert!(matches!(cli.command, HubCommand::UploadResume { .. }));
    }
}
