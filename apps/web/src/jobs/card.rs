//! Job card — one posting on the recruiter dashboard plus its edit modal.
//!
//! Editor lifecycle: `Closed → LoadingDraft → Open → Closed`. The draft lives
//! inside `Editor::Open`, so it exists exactly while the modal is open.
//! Persistence and list refresh go through `JobStore`; the card itself does
//! no I/O.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::jobs::backend::BackendError;
use crate::jobs::draft::{DraftForm, DraftValidation, JobDraft};
use crate::jobs::store::{InFlight, JobStore};
use crate::jobs::toast::{Toast, JOB_DELETED, JOB_UPDATED};
use crate::models::job::Job;
use crate::models::user::CurrentUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    OpenEditor,
    Submit,
    Remove,
}

impl fmt::Display for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardAction::OpenEditor => "open editor",
            CardAction::Submit => "submit",
            CardAction::Remove => "remove",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CardError {
    #[error("{action} already in progress for job {job_id}")]
    Busy { job_id: String, action: CardAction },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Editor {
    Closed,
    LoadingDraft,
    Open {
        draft: JobDraft,
        /// Set when a submit was rejected; drives the inline error list.
        validation: Option<DraftValidation>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed: nothing was sent and the editor stays open.
    Rejected(DraftValidation),
    /// The update was sent; the editor is closed whatever the outcome.
    Submitted(Toast),
}

#[derive(Debug, Clone)]
pub struct JobCard {
    job: Job,
    editor: Editor,
}

impl JobCard {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            editor: Editor::Closed,
        }
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[cfg(test)]
    pub fn draft(&self) -> Option<&JobDraft> {
        match &self.editor {
            Editor::Open { draft, .. } => Some(draft),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        matches!(self.editor, Editor::Open { .. })
    }

    fn begin<'s>(&self, store: &'s JobStore, action: CardAction) -> Result<InFlight<'s>, CardError> {
        store.begin(&self.job.job_id, action).ok_or_else(|| CardError::Busy {
            job_id: self.job.job_id.clone(),
            action,
        })
    }

    /// Fetches the latest copy of the job and opens the editor seeded from it.
    pub async fn open_editor(&mut self, store: &JobStore, user: &CurrentUser) -> Result<(), CardError> {
        let _in_flight = self.begin(store, CardAction::OpenEditor)?;
        self.editor = Editor::LoadingDraft;

        match store.fetch_job(&user.user_id, &self.job.job_id).await {
            Ok(latest) => {
                self.editor = Editor::Open {
                    draft: JobDraft::from_job(&latest),
                    validation: None,
                };
                Ok(())
            }
            Err(e) => {
                self.editor = Editor::Closed;
                Err(e.into())
            }
        }
    }

    /// Closes the editor and discards the draft.
    pub fn cancel(&mut self) {
        self.editor = Editor::Closed;
    }

    /// Validates the posted form and, when it passes, sends the update,
    /// closes the editor and refreshes the list before reporting the result.
    pub async fn submit(
        &mut self,
        store: &JobStore,
        user: &CurrentUser,
        form: DraftForm,
    ) -> Result<SubmitOutcome, CardError> {
        let _in_flight = self.begin(store, CardAction::Submit)?;

        let draft = JobDraft::from(form);
        let validation = draft.validate();
        if !validation.passed {
            self.editor = Editor::Open {
                draft,
                validation: Some(validation.clone()),
            };
            return Ok(SubmitOutcome::Rejected(validation));
        }

        let payload = draft.into_payload(&user.user_id);
        let res = store.update_job(&self.job.job_id, &payload).await;
        self.cancel();
        self.refresh(store, user).await;

        let toast = Toast::from_mutation(&res, JOB_UPDATED);
        if toast.is_error() {
            warn!("Update of job {} failed: {}", self.job.job_id, toast.message);
        } else {
            info!("Job {} updated by {}", self.job.job_id, user.user_id);
        }
        Ok(SubmitOutcome::Submitted(toast))
    }

    /// Removes the job immediately. The list is refreshed only on success.
    pub async fn remove(&self, store: &JobStore, user: &CurrentUser) -> Result<Toast, CardError> {
        let _in_flight = self.begin(store, CardAction::Remove)?;

        let res = store.remove_job(&user.user_id, &self.job.job_id).await;
        if let Some(error) = res.error() {
            warn!("Removal of job {} failed: {error}", self.job.job_id);
            return Ok(Toast::error(error));
        }

        if let Err(e) = store.fetch_jobs(&user.user_id).await {
            warn!("Job list refresh after removal failed: {e}");
        }
        info!("Job {} removed by {}", self.job.job_id, user.user_id);
        Ok(Toast::success(JOB_DELETED))
    }

    async fn refresh(&mut self, store: &JobStore, user: &CurrentUser) {
        match store.fetch_jobs(&user.user_id).await {
            Ok(jobs) => {
                if let Some(latest) = jobs.into_iter().find(|j| j.job_id == self.job.job_id) {
                    self.job = latest;
                }
            }
            Err(e) => warn!("Job list refresh after update failed: {e}"),
        }
    }
}
