use serde::{Deserialize, Serialize};

use crate::models::job::{Job, JobRequirements, UpdateJobPayload};
use crate::models::vocabulary::{
    is_option, is_tech, AGE_OPTIONS, EDUCATION_OPTIONS, EXPERIENCE_OPTIONS,
};

/// Working copy of a job while its editor is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub job_title: String,
    pub job_description: String,
    pub job_designation: String,
    pub job_location: String,
    pub requirements: JobRequirements,
    pub tags: Vec<String>,
}

/// Editor form as posted by the browser.
///
/// `jobTags` arrives either as repeated fields or, from autofill, as one
/// comma-joined value; `From<DraftForm>` accepts both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftForm {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_designation: String,
    #[serde(default)]
    pub job_location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub job_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftValidation {
    pub passed: bool,
    pub errors: Vec<FieldError>,
}

impl JobDraft {
    /// Seeds a draft from a freshly fetched job: the four detail fields, the
    /// three requirement fields and the full tag list, nothing else.
    pub fn from_job(job: &Job) -> Self {
        Self {
            job_title: job.job_title.clone(),
            job_description: job.job_description.clone(),
            job_designation: job.job_designation.clone(),
            job_location: job.job_location.clone(),
            requirements: JobRequirements {
                experience: job.job_requirements.experience.clone(),
                salary: job.job_requirements.salary.clone(),
                education: job.job_requirements.education.clone(),
            },
            tags: job.job_tags.clone(),
        }
    }

    pub fn validate(&self) -> DraftValidation {
        let mut errors = Vec::new();

        if self.job_title.trim().is_empty() {
            errors.push(required("jobTitle", "Job title"));
        }
        if self.job_description.trim().is_empty() {
            errors.push(required("jobDescription", "Position description"));
        }

        let selects = [
            ("experience", "Experience", &self.requirements.experience, EXPERIENCE_OPTIONS),
            ("salary", "Age", &self.requirements.salary, AGE_OPTIONS),
            ("education", "Education", &self.requirements.education, EDUCATION_OPTIONS),
        ];
        for (field, label, value, options) in selects {
            if value.is_empty() {
                errors.push(required(field, label));
            } else if !is_option(options, value) {
                errors.push(FieldError {
                    field,
                    message: format!("'{value}' is not a valid {} option", label.to_lowercase()),
                });
            }
        }

        if self.tags.is_empty() {
            errors.push(required("jobTags", "Position tags"));
        }
        for tag in self.tags.iter().filter(|t| !is_tech(t)) {
            errors.push(FieldError {
                field: "jobTags",
                message: format!("'{tag}' is not a known technology"),
            });
        }

        DraftValidation {
            passed: errors.is_empty(),
            errors,
        }
    }

    pub fn into_payload(self, user_id: &str) -> UpdateJobPayload {
        UpdateJobPayload {
            job_title: self.job_title,
            job_description: self.job_description,
            job_designation: self.job_designation,
            job_location: self.job_location,
            job_requirements: self.requirements,
            job_tags: self.tags,
            user_id: user_id.to_string(),
        }
    }
}

impl From<DraftForm> for JobDraft {
    fn from(form: DraftForm) -> Self {
        Self {
            job_title: form.job_title,
            job_description: form.job_description,
            job_designation: form.job_designation,
            job_location: form.job_location,
            requirements: JobRequirements {
                experience: form.experience,
                salary: form.salary,
                education: form.education,
            },
            tags: normalize_tags(form.job_tags),
        }
    }
}

/// Splits comma-joined values, trims, drops blanks and duplicates while
/// keeping first-seen order.
fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.iter().flat_map(|value| value.split(',')) {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn required(field: &'static str, label: &str) -> FieldError {
    FieldError {
        field,
        message: format!("{label} is required"),
    }
}
