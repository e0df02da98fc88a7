//! Axum route handlers for job card actions on the recruiter dashboard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};
use axum_extra::extract::Form;

use crate::errors::AppError;
use crate::jobs::card::{JobCard, SubmitOutcome};
use crate::jobs::draft::DraftForm;
use crate::models::user::CurrentUser;
use crate::pages::dashboard::render_recruiter;
use crate::state::AppState;

fn require_mentor(user: Option<Extension<CurrentUser>>) -> Result<CurrentUser, AppError> {
    let Some(Extension(user)) = user else {
        return Err(AppError::Unauthorized);
    };
    if !user.is_mentor() {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

/// Cards for the user's last fetched list, fetching it if there is none yet.
async fn current_cards(state: &AppState, user: &CurrentUser) -> Result<Vec<JobCard>, AppError> {
    let jobs = match state.store.cached_jobs(&user.user_id).await {
        Some(jobs) => jobs,
        None => state.store.fetch_jobs(&user.user_id).await?,
    };
    Ok(jobs.into_iter().map(JobCard::new).collect())
}

fn card_index(cards: &[JobCard], job_id: &str) -> Result<usize, AppError> {
    cards
        .iter()
        .position(|card| card.job().job_id == job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

/// GET /dashboard/jobs/:job_id/edit
pub async fn edit(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(job_id): Path<String>,
) -> Result<Response, AppError> {
    let user = require_mentor(user)?;
    let jobs = state.store.fetch_jobs(&user.user_id).await?;
    let mut cards: Vec<JobCard> = jobs.into_iter().map(JobCard::new).collect();

    let index = card_index(&cards, &job_id)?;
    cards[index].open_editor(&state.store, &user).await?;

    Ok(render_recruiter(&state, &user, &cards, None)?.into_response())
}

/// POST /dashboard/jobs/:job_id
pub async fn update(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(job_id): Path<String>,
    Form(form): Form<DraftForm>,
) -> Result<Response, AppError> {
    let user = require_mentor(user)?;
    let mut cards = current_cards(&state, &user).await?;

    let index = card_index(&cards, &job_id)?;
    match cards[index].submit(&state.store, &user, form).await? {
        SubmitOutcome::Rejected(validation) => {
            tracing::debug!("Rejected edit of job {job_id}: {:?}", validation.errors);
            let page = render_recruiter(&state, &user, &cards, None)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        SubmitOutcome::Submitted(toast) => {
            let cards = current_cards(&state, &user).await?;
            Ok(render_recruiter(&state, &user, &cards, Some(toast))?.into_response())
        }
    }
}

/// POST /dashboard/jobs/:job_id/delete
pub async fn remove(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(job_id): Path<String>,
) -> Result<Response, AppError> {
    let user = require_mentor(user)?;
    let cards = current_cards(&state, &user).await?;

    let index = card_index(&cards, &job_id)?;
    let toast = cards[index].remove(&state.store, &user).await?;

    // A failed removal leaves the list as it was last fetched.
    let cards = current_cards(&state, &user).await?;
    Ok(render_recruiter(&state, &user, &cards, Some(toast))?.into_response())
}
