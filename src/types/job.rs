// src/types/job.rs
//! Job description records returned by the submission endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A submitted job description. The `analysis` payload is the server-side
/// analyzer output; list endpoints omit it, so it defaults to null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub upload_date: NaiveDateTime,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub analysis: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_submission_response() {
        let json = r#"{
            "id": 3,
            "title": "Backend Engineer",
            "company": "Acme",
            "upload_date": "2025-03-14T10:00:00",
            "analysis": {"full_text": "...", "requirements": {"skills": ["rust"]}}
        }"#;

        let record: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Backend Engineer");
        assert_eq!(record.company, "Acme");
        assert!(record.analysis.get("requirements").is_some());
    }

    #[test]
    fn deserializes_list_row_without_analysis() {
        let json = r#"{
            "id": 4,
            "user_id": 1,
            "title": "Data Engineer",
            "company": "Initech",
            "url": "https://example.com/job",
            "upload_date": "2025-03-15T08:30:00"
        }"#;

        let record: JobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.url.as_deref(), Some("https://example.com/job"));
        assert!(record.analysis.is_null());
    }
}
