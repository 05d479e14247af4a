// src/types/response.rs

use serde::{Deserialize, Serialize};

/// Failure body every endpoint returns on a non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDetail {
    pub detail: String,
}
