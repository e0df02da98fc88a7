use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Requirement brackets attached to a posting.
///
/// Kept as free text: postings created before the current option lists
/// still render, the editor is what enforces the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    #[serde(default)]
    pub experience: String,
    /// Age bracket, stored under its historical name.
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub education: String,
}

/// A recruiter-posted position as returned by the job API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: String,
    pub job_title: String,
    #[serde(default)]
    pub job_designation: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_location: String,
    #[serde(default)]
    pub job_requirements: JobRequirements,
    #[serde(default)]
    pub job_tags: Vec<String>,
    /// Missing on some older postings.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Application references. Only counted here, so the shape is left opaque.
    #[serde(default)]
    pub applications: Vec<Value>,
}

impl Job {
    pub fn application_count(&self) -> usize {
        self.applications.len()
    }

    /// Post date as `MM/DD/YYYY`, empty when the posting has no timestamp.
    pub fn posted_on(&self) -> String {
        self.created_at
            .map(|created_at| created_at.format("%m/%d/%Y").to_string())
            .unwrap_or_default()
    }
}

/// Body of an update request: flattened detail fields plus requirements,
/// tags and the acting user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPayload {
    pub job_title: String,
    pub job_description: String,
    pub job_designation: String,
    pub job_location: String,
    pub job_requirements: JobRequirements,
    pub job_tags: Vec<String>,
    pub user_id: String,
}

/// Result of a mutation. The only failure signal is a non-empty `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
