use crate::models::job::MutationResponse;

pub const JOB_UPDATED: &str = "Job has been updated 👻";
pub const JOB_DELETED: &str = "Job has been deleted 👻";

/// How long a toast stays on screen.
pub const AUTO_CLOSE_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown bottom-right after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    /// The backend error verbatim, or `success_message` when there is none.
    pub fn from_mutation(res: &MutationResponse, success_message: &str) -> Self {
        match res.error() {
            Some(error) => Self::error(error),
            None => Self::success(success_message),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mutation_echoes_backend_error() {
        let toast = Toast::from_mutation(&MutationResponse::failed("Title taken"), JOB_UPDATED);
        assert_eq!(toast, Toast::error("Title taken"));
    }

    #[test]
    fn test_from_mutation_success() {
        let toast = Toast::from_mutation(&MutationResponse::ok(), JOB_DELETED);
        assert!(!toast.is_error());
        assert_eq!(toast.message, "Job has been deleted 👻");
    }
}
