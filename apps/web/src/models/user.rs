use serde::{Deserialize, Serialize};

/// The role value that unlocks the recruiter dashboard.
pub const MENTOR_ROLE: &str = "Mentor";

/// Identity of the signed-in user, as asserted by the authentication gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: String,
    pub role: String,
}

impl CurrentUser {
    pub fn is_mentor(&self) -> bool {
        self.role == MENTOR_ROLE
    }
}
