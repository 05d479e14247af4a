// src/types/matching.rs
//! Match results: one job against a user's resume versions.

use serde::{Deserialize, Serialize};

/// Ranked match result for a job description. The service sorts
/// `matched_resumes` by score before returning; the client never
/// re-orders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(default)]
    pub job_id: Option<i64>,
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub matched_resumes: Vec<MatchedResume>,
}

/// One resume version scored against the job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedResume {
    pub resume_id: i64,
    pub version: i64,
    /// Fraction in [0, 1]. Display code converts to a rounded percentage.
    pub overall_score: f64,
    pub details: MatchDetails,
}

/// Sub-scores behind the overall score, each a fraction in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetails {
    pub keyword_match: f64,
    pub tfidf_similarity: f64,
    pub semantic_similarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ranked_result() {
        let json = r#"{
            "job_id": 3,
            "job_title": "Backend Engineer",
            "company": "Acme",
            "matched_resumes": [
                {
                    "resume_id": 7,
                    "version": 2,
                    "upload_date": "2025-03-14T09:26:53",
                    "overall_score": 0.73,
                    "details": {
                        "keyword_match": 0.8,
                        "tfidf_similarity": 0.61,
                        "semantic_similarity": 0.75
                    }
                }
            ]
        }"#;

        let result: MatchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.matched_resumes.len(), 1);
        assert_eq!(result.matched_resumes[0].resume_id, 7);
        assert!((result.matched_resumes[0].overall_score - 0.73).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_matches_field_is_empty() {
        let json = r#"{"job_title": "Sample Job", "company": "Sample Company"}"#;
        let result: MatchResult = serde_json::from_str(json).unwrap();
        assert!(result.matched_resumes.is_empty());
    }
}
