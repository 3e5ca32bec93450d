//! Interview review page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;

use crate::middleware::current_identity;
use crate::models::session::UserIdentity;
use crate::state::AppState;

/// Query parameters for the review page.
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    /// Interview session identifier, used to locate the feedback video.
    pub s: Option<String>,
}

/// The review page template.
///
/// Composes the video playback partial (parameterized by an optional URL)
/// with the location selection UI, which populates itself from
/// `/api/locations` once the page loads.
#[derive(Template, WebTemplate)]
#[template(path = "review.html")]
pub struct ReviewPage {
    /// Identity rendered into the page header, if logged in.
    pub identity: Option<UserIdentity>,
    /// Feedback video URL for the requested interview session.
    pub video_url: Option<String>,
}

/// Display the review page for an interview session.
///
/// Every render copies the session-resolved identity into the shared
/// identity store, so the store always reflects the most recently rendered
/// page - a repeat visit with a different login overwrites the old value,
/// and an anonymous visit records `None` rather than keeping a stale user.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReviewQuery>,
) -> ReviewPage {
    let identity = current_identity(&session).await;
    state.identity().hydrate(identity.clone());

    let video_url = query
        .s
        .as_deref()
        .and_then(|s| state.config().review_video_url(s));

    ReviewPage {
        identity,
        video_url,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_review_page_renders_video_url() {
        let page = ReviewPage {
            identity: None,
            video_url: Some("https://media.goprac.test/reviews/abc.mp4".to_string()),
        };
        let html = page.render().unwrap();
        assert!(html.contains("https://media.goprac.test/reviews/abc.mp4"));
    }

    #[test]
    fn test_review_page_without_video_shows_placeholder() {
        let page = ReviewPage {
            identity: None,
            video_url: None,
        };
        let html = page.render().unwrap();
        assert!(!html.contains("<video"));
        assert!(html.contains("No feedback video"));
    }

    #[test]
    fn test_review_page_greets_identity() {
        let page = ReviewPage {
            identity: Some(UserIdentity {
                id: "u1".to_string(),
                name: Some("Mina".to_string()),
                user_type: None,
            }),
            video_url: None,
        };
        let html = page.render().unwrap();
        assert!(html.contains("Mina"));
    }
}
