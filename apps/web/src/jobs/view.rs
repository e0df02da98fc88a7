//! Template-facing view models for job cards.

use crate::jobs::card::{Editor, JobCard};
use crate::jobs::draft::JobDraft;
use crate::jobs::toast::{Toast, ToastKind, AUTO_CLOSE_MS};
use crate::models::vocabulary::{AGE_OPTIONS, EDUCATION_OPTIONS, EXPERIENCE_OPTIONS, TECH_NAMES};

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct ModalView {
    pub action: String,
    pub job_title: String,
    pub job_description: String,
    pub job_designation: String,
    pub job_location: String,
    pub experience_options: Vec<SelectOption>,
    pub age_options: Vec<SelectOption>,
    pub education_options: Vec<SelectOption>,
    pub tag_options: Vec<SelectOption>,
    pub errors: Vec<String>,
}

pub struct CardView {
    pub title: String,
    pub designation: String,
    pub description: String,
    pub application_count: usize,
    pub posted_on: String,
    pub applications_href: String,
    pub details_href: String,
    pub edit_href: String,
    pub delete_action: String,
    /// Render a spinner instead of the card body.
    pub loading: bool,
    pub modal: Option<ModalView>,
}

pub struct ToastView {
    pub class: &'static str,
    pub message: String,
    pub auto_close_ms: u32,
}

impl CardView {
    pub fn new(card: &JobCard, loading: bool) -> Self {
        let job = card.job();
        let modal = match card.editor() {
            Editor::Open { draft, validation } => Some(ModalView::new(
                &job.job_id,
                draft,
                validation
                    .iter()
                    .flat_map(|v| v.errors.iter().map(|e| e.message.clone()))
                    .collect(),
            )),
            Editor::Closed | Editor::LoadingDraft => None,
        };

        Self {
            title: job.job_title.clone(),
            designation: job.job_designation.clone(),
            description: job.job_description.clone(),
            application_count: job.application_count(),
            posted_on: job.posted_on(),
            applications_href: format!("applications/{}", job.job_id),
            details_href: format!("/job-details/{}", job.job_id),
            edit_href: format!("/dashboard/jobs/{}/edit", job.job_id),
            delete_action: format!("/dashboard/jobs/{}/delete", job.job_id),
            loading,
            modal,
        }
    }
}

impl ModalView {
    fn new(job_id: &str, draft: &JobDraft, errors: Vec<String>) -> Self {
        Self {
            action: format!("/dashboard/jobs/{job_id}"),
            job_title: draft.job_title.clone(),
            job_description: draft.job_description.clone(),
            job_designation: draft.job_designation.clone(),
            job_location: draft.job_location.clone(),
            experience_options: select_options(EXPERIENCE_OPTIONS, &draft.requirements.experience),
            age_options: select_options(AGE_OPTIONS, &draft.requirements.salary),
            education_options: select_options(EDUCATION_OPTIONS, &draft.requirements.education),
            tag_options: TECH_NAMES
                .iter()
                .map(|name| SelectOption {
                    value: name.to_string(),
                    label: name.to_string(),
                    selected: draft.tags.iter().any(|t| t.as_str() == *name),
                })
                .collect(),
            errors,
        }
    }
}

/// Options with a leading blank placeholder, selected when `current` is not
/// one of the choices.
fn select_options(options: &[(&str, &str)], current: &str) -> Vec<SelectOption> {
    let matched = options.iter().any(|(value, _)| *value == current);
    std::iter::once(SelectOption {
        value: String::new(),
        label: "Select".to_string(),
        selected: !matched,
    })
    .chain(options.iter().map(|(value, label)| SelectOption {
        value: value.to_string(),
        label: label.to_string(),
        selected: *value == current,
    }))
    .collect()
}

impl From<Toast> for ToastView {
    fn from(toast: Toast) -> Self {
        Self {
            class: match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            },
            message: toast.message,
            auto_close_ms: AUTO_CLOSE_MS,
        }
    }
}
