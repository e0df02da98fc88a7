//! Dashboard — picks the recruiter or applicant view from the current role.

use askama::Template;
use axum::{extract::State, response::Html, Extension};

use crate::errors::AppError;
use crate::jobs::card::JobCard;
use crate::jobs::toast::Toast;
use crate::jobs::view::{CardView, ToastView};
use crate::models::user::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView<'a> {
    Recruiter(&'a CurrentUser),
    Applicant,
}

impl<'a> DashboardView<'a> {
    /// Mentors get the recruiter view; every other role, or no user at all,
    /// gets the applicant view.
    pub fn for_user(user: Option<&'a CurrentUser>) -> Self {
        match user {
            Some(user) if user.is_mentor() => DashboardView::Recruiter(user),
            _ => DashboardView::Applicant,
        }
    }
}

pub struct NavBar {
    /// Empty when nobody is signed in.
    pub user_id: String,
    pub signin_path: String,
}

impl NavBar {
    fn new(state: &AppState, user: Option<&CurrentUser>) -> Self {
        Self {
            user_id: user.map(|u| u.user_id.clone()).unwrap_or_default(),
            signin_path: state.config.signin_path.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "recruiter.html")]
pub struct RecruiterPage {
    pub nav: NavBar,
    pub cards: Vec<CardView>,
    pub toast: Option<ToastView>,
}

#[derive(Template)]
#[template(path = "applicant.html")]
pub struct ApplicantPage {
    pub nav: NavBar,
    pub signed_in: bool,
}

/// Renders the recruiter view for `cards`. Cards show a spinner while the
/// store is still fetching or loading on this user's behalf.
pub fn render_recruiter(
    state: &AppState,
    user: &CurrentUser,
    cards: &[JobCard],
    toast: Option<Toast>,
) -> Result<Html<String>, AppError> {
    let loading =
        state.store.is_fetching_jobs(&user.user_id) || state.store.is_loading(&user.user_id);
    let page = RecruiterPage {
        nav: NavBar::new(state, Some(user)),
        cards: cards.iter().map(|card| CardView::new(card, loading)).collect(),
        toast: toast.map(ToastView::from),
    };
    Ok(Html(page.render()?))
}

pub fn render_applicant(
    state: &AppState,
    user: Option<&CurrentUser>,
) -> Result<Html<String>, AppError> {
    let page = ApplicantPage {
        nav: NavBar::new(state, user),
        signed_in: user.is_some(),
    };
    Ok(Html(page.render()?))
}

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<Html<String>, AppError> {
    let user = user.map(|Extension(user)| user);

    match DashboardView::for_user(user.as_ref()) {
        DashboardView::Recruiter(user) => {
            let jobs = state.store.fetch_jobs(&user.user_id).await?;
            let cards: Vec<JobCard> = jobs.into_iter().map(JobCard::new).collect();
            render_recruiter(&state, user, &cards, None)
        }
        DashboardView::Applicant => render_applicant(&state, user.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::config::{BackendKind, Config};
    use crate::jobs::backend::{BackendError, JobBackend};
    use crate::jobs::store::JobStore;
    use crate::models::job::{Job, JobRequirements, MutationResponse, UpdateJobPayload};

    /// Backend whose single-job fetch parks until released.
    struct GatedBackend {
        job: Job,
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl JobBackend for GatedBackend {
        async fn fetch_job(&self, _job_id: &str) -> Result<Job, BackendError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(self.job.clone())
        }

        async fn fetch_jobs(&self, _user_id: &str) -> Result<Vec<Job>, BackendError> {
            Ok(vec![self.job.clone()])
        }

        async fn update_job(&self, _job_id: &str, _payload: &UpdateJobPayload) -> MutationResponse {
            MutationResponse::ok()
        }

        async fn remove_job(&self, _job_id: &str) -> MutationResponse {
            MutationResponse::ok()
        }
    }

    fn backend_intern() -> Job {
        Job {
            job_id: "42".to_string(),
            job_title: "Backend Intern".to_string(),
            job_designation: "Intern".to_string(),
            job_description: "Build APIs".to_string(),
            job_location: "Remote".to_string(),
            job_requirements: JobRequirements {
                experience: "Fresher".to_string(),
                salary: "above 18".to_string(),
                education: "School".to_string(),
            },
            job_tags: vec!["NodeJs".to_string()],
            created_at: None,
            applications: vec![],
        }
    }

    fn state(backend: Arc<GatedBackend>) -> AppState {
        AppState {
            store: Arc::new(JobStore::new(backend)),
            config: Config {
                backend: BackendKind::Memory,
                backend_timeout_secs: 5,
                signin_path: "/signin".to_string(),
                assets_dir: "assets".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    fn mentor(user_id: &str) -> CurrentUser {
        CurrentUser {
            user_id: user_id.to_string(),
            role: "Mentor".to_string(),
        }
    }

    fn user(role: &str) -> CurrentUser {
        CurrentUser {
            user_id: "u1".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_mentor_gets_recruiter_view() {
        let mentor = user("Mentor");
        assert_eq!(
            DashboardView::for_user(Some(&mentor)),
            DashboardView::Recruiter(&mentor)
        );
    }

    #[test]
    fn test_every_other_role_gets_applicant_view() {
        for role in ["Mentee", "mentor", "MENTOR", "", "Recruiter"] {
            let u = user(role);
            assert_eq!(
                DashboardView::for_user(Some(&u)),
                DashboardView::Applicant,
                "role {role:?}"
            );
        }
        assert_eq!(DashboardView::for_user(None), DashboardView::Applicant);
    }

    #[tokio::test]
    async fn test_cards_show_spinner_while_store_call_is_pending() {
        let backend = Arc::new(GatedBackend {
            job: backend_intern(),
            started: Notify::new(),
            release: Notify::new(),
        });
        let state = state(backend.clone());
        let cards = vec![JobCard::new(backend_intern())];
        let (owner, other) = (mentor("mentor-1"), mentor("mentor-2"));

        let store = state.store.clone();
        let pending = tokio::spawn(async move { store.fetch_job("mentor-1", "42").await });
        backend.started.notified().await;

        let html = render_recruiter(&state, &owner, &cards, None).unwrap().0;
        assert!(html.contains("spinner"));
        assert!(!html.contains("Backend Intern"));

        let html = render_recruiter(&state, &other, &cards, None).unwrap().0;
        assert!(!html.contains("spinner"));
        assert!(html.contains("Backend Intern"));

        backend.release.notify_one();
        pending.await.unwrap().unwrap();

        let html = render_recruiter(&state, &owner, &cards, None).unwrap().0;
        assert!(!html.contains("spinner"));
        assert!(html.contains("Backend Intern"));
    }
}
