use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
    pub signin_path: &'a str,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = Home {
        signin_path: &state.config.signin_path,
    };
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_links_to_signin() {
        let html = Home {
            signin_path: "/auth/signin",
        }
        .render()
        .unwrap();
        assert!(html.contains("Mentor-Matching"));
        assert!(html.contains("Join M-Matcher"));
        assert!(html.contains("signin"));
    }
}
