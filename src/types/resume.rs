// src/types/resume.rs
//! Resume records as the matching service returns them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored resume version. Created server-side on upload and immutable
/// from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    /// Starts at 1 and increments per upload for the same user.
    pub version: i64,
    pub upload_date: NaiveDateTime,
    #[serde(default)]
    pub parsed_data: ParsedResume,
}

/// Server-side parse output. The service attaches more than we consume;
/// unknown fields are ignored and missing nesting collapses to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub entities: ResumeEntities,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeEntities {
    /// Extracted skills, in the order the parser emitted them.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Resume {
    pub fn skills(&self) -> &[String] {
        &self.parsed_data.entities.skills
    }
}
