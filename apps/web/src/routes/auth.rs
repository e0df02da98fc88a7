//! Identity from the authentication gateway.
//!
//! The gateway in front of this service authenticates the session and
//! forwards the result as headers; this layer only reads them.

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::models::user::CurrentUser;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

pub fn current_user(headers: &HeaderMap) -> Option<CurrentUser> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    };

    let user_id = header(USER_ID_HEADER);
    if user_id.is_empty() {
        return None;
    }
    Some(CurrentUser {
        user_id,
        role: header(USER_ROLE_HEADER),
    })
}

/// Inserts `Extension<CurrentUser>` when the request carries an identity.
pub async fn identify(mut request: Request, next: Next) -> Response {
    if let Some(user) = current_user(request.headers()) {
        request.extensions_mut().insert(user);
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_user_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("mentor-1"));
        headers.insert(USER_ROLE_HEADER, HeaderValue::from_static("Mentor"));
        assert_eq!(
            current_user(&headers),
            Some(CurrentUser {
                user_id: "mentor-1".to_string(),
                role: "Mentor".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_role_is_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("u2"));
        let user = current_user(&headers).unwrap();
        assert_eq!(user.role, "");
        assert!(!user.is_mentor());
    }

    #[test]
    fn test_blank_user_id_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("  "));
        headers.insert(USER_ROLE_HEADER, HeaderValue::from_static("Mentor"));
        assert_eq!(current_user(&headers), None);
    }
}
