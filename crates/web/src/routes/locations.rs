//! Location listing API handler.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::LocationRepository;
use crate::error::Result;
use crate::models::location::Location;
use crate::state::AppState;

/// List selectable interview locations.
///
/// Returns the filtered, city-name-ordered location list as JSON. A store
/// fault surfaces as a 500 with an opaque body (see `AppError`); this
/// handler never retries - retry policy belongs to the caller.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Location>>> {
    let locations = LocationRepository::new(state.pool())
        .list_selectable()
        .await?;
    Ok(Json(locations))
}
