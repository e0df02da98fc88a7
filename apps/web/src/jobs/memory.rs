use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::json;
use tokio::sync::RwLock;

use crate::jobs::backend::{BackendError, JobBackend};
use crate::models::job::{Job, JobRequirements, MutationResponse, UpdateJobPayload};

struct OwnedJob {
    owner: String,
    job: Job,
}

/// In-process job backend. Backs `JOB_BACKEND=memory` and the test suite.
pub struct MemoryJobBackend {
    jobs: RwLock<BTreeMap<String, OwnedJob>>,
}

impl MemoryJobBackend {
    pub fn with_jobs(owner: &str, jobs: Vec<Job>) -> Self {
        let jobs = jobs
            .into_iter()
            .map(|job| {
                (
                    job.job_id.clone(),
                    OwnedJob {
                        owner: owner.to_string(),
                        job,
                    },
                )
            })
            .collect();
        Self {
            jobs: RwLock::new(jobs),
        }
    }

    /// A couple of postings owned by `owner`, for local runs.
    pub fn with_demo_data(owner: &str) -> Self {
        let now = Utc::now();
        Self::with_jobs(
            owner,
            vec![
                Job {
                    job_id: "1".to_string(),
                    job_title: "Frontend Mentor".to_string(),
                    job_designation: "Senior Engineer".to_string(),
                    job_description: "Guide juniors through modern React tooling.".to_string(),
                    job_location: "Remote".to_string(),
                    job_requirements: JobRequirements {
                        experience: "3-5".to_string(),
                        salary: "above 18".to_string(),
                        education: "Graduation/Diploma".to_string(),
                    },
                    job_tags: vec!["ReactJs".to_string(), "Typescript".to_string()],
                    created_at: Some(now - Duration::days(3)),
                    applications: vec![json!("app-1"), json!("app-2")],
                },
                Job {
                    job_id: "2".to_string(),
                    job_title: "Cloud Mentor".to_string(),
                    job_designation: "Platform Lead".to_string(),
                    job_description: "Pair on deployments and infrastructure as code.".to_string(),
                    job_location: "Berlin".to_string(),
                    job_requirements: JobRequirements {
                        experience: "Any Experience".to_string(),
                        salary: "13-18".to_string(),
                        education: "School".to_string(),
                    },
                    job_tags: vec!["AWS".to_string(), "Docker".to_string()],
                    created_at: Some(now - Duration::days(10)),
                    applications: vec![],
                },
            ],
        )
    }
}

#[async_trait]
impl JobBackend for MemoryJobBackend {
    async fn fetch_job(&self, job_id: &str) -> Result<Job, BackendError> {
        self.jobs
            .read()
            .await
            .get(job_id)
            .map(|owned| owned.job.clone())
            .ok_or_else(|| BackendError::NotFound(job_id.to_string()))
    }

    async fn fetch_jobs(&self, user_id: &str) -> Result<Vec<Job>, BackendError> {
        let mut jobs: Vec<Job> = self
            .jobs
            .read()
            .await
            .values()
            .filter(|owned| owned.owner == user_id)
            .map(|owned| owned.job.clone())
            .collect();
        // Newest first; undated postings sort last.
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn update_job(&self, job_id: &str, payload: &UpdateJobPayload) -> MutationResponse {
        let mut jobs = self.jobs.write().await;
        let Some(owned) = jobs.get_mut(job_id) else {
            return MutationResponse::failed("Job not found");
        };
        if owned.owner != payload.user_id {
            return MutationResponse::failed("You are not allowed to update this job");
        }

        let job = &mut owned.job;
        job.job_title = payload.job_title.clone();
        job.job_description = payload.job_description.clone();
        job.job_designation = payload.job_designation.clone();
        job.job_location = payload.job_location.clone();
        job.job_requirements = payload.job_requirements.clone();
        job.job_tags = payload.job_tags.clone();
        MutationResponse::ok()
    }

    async fn remove_job(&self, job_id: &str) -> MutationResponse {
        match self.jobs.write().await.remove(job_id) {
            Some(_) => MutationResponse::ok(),
            None => MutationResponse::failed("Job not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(user_id: &str) -> UpdateJobPayload {
        UpdateJobPayload {
            job_title: "Renamed".to_string(),
            job_description: "New description".to_string(),
            job_designation: "Lead".to_string(),
            job_location: "Remote".to_string(),
            job_requirements: JobRequirements {
                experience: "10+".to_string(),
                salary: "above 18".to_string(),
                education: "Doctorate".to_string(),
            },
            job_tags: vec!["Figma".to_string()],
            user_id: user_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_jobs_filters_by_owner_newest_first() {
        let backend = MemoryJobBackend::with_demo_data("mentor-1");
        let jobs = backend.fetch_jobs("mentor-1").await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].job_id, "1");
        assert!(backend.fetch_jobs("someone-else").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_payload() {
        let backend = MemoryJobBackend::with_demo_data("mentor-1");
        let res = backend.update_job("2", &payload("mentor-1")).await;
        assert_eq!(res.error(), None);

        let job = backend.fetch_job("2").await.unwrap();
        assert_eq!(job.job_title, "Renamed");
        assert_eq!(job.job_requirements.education, "Doctorate");
        assert_eq!(job.job_tags, vec!["Figma".to_string()]);
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_rejected() {
        let backend = MemoryJobBackend::with_demo_data("mentor-1");
        let res = backend.update_job("2", &payload("intruder")).await;
        assert_eq!(res.error(), Some("You are not allowed to update this job"));
        assert_eq!(backend.fetch_job("2").await.unwrap().job_title, "Cloud Mentor");
    }

    #[tokio::test]
    async fn test_remove_missing_job_reports_error() {
        let backend = MemoryJobBackend::with_demo_data("mentor-1");
        assert_eq!(backend.remove_job("1").await.error(), None);
        assert_eq!(backend.remove_job("1").await.error(), Some("Job not found"));
        assert!(matches!(
            backend.fetch_job("1").await,
            Err(BackendError::NotFound(_))
        ));
    }
}
