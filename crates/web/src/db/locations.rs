//! Location repository for database operations.
//!
//! Locations populate the interview-location `<select>` on the review page.
//! Queries here are read-only; this site never writes to the location table.

use sqlx::PgPool;

use goprac_core::LocationId;

use super::RepositoryError;
use crate::models::location::Location;

/// Location ids never shown to users.
///
/// These rows are synthetic entries kept in the table for other tooling.
/// The set is fixed; it is not configurable per request.
pub const EXCLUDED_LOCATION_IDS: [i32; 8] = [512, 518, 513, 516, 514, 515, 517, 519];

/// Database row for a location.
#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: i32,
    city_name: String,
}

/// Repository for location database operations.
pub struct LocationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LocationRepository<'a> {
    /// Create a new location repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all user-selectable locations, ordered by city name.
    ///
    /// Excludes [`EXCLUDED_LOCATION_IDS`] server-side. Returns an empty list
    /// (not an error) when the table is empty or every row is excluded.
    /// Ordering is ascending by `city_name`; rows with identical names keep
    /// whatever relative order the store returns.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_selectable(&self) -> Result<Vec<Location>, RepositoryError> {
        // Runtime query: the exclusion set binds as a Postgres array
        let rows = sqlx::query_as::<_, LocationRow>(
            r"
            SELECT id, city_name
            FROM location
            WHERE id <> ALL($1)
            ORDER BY city_name ASC
            ",
        )
        .bind(EXCLUDED_LOCATION_IDS.as_slice())
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Location {
                id: LocationId::new(r.id),
                city_name: r.city_name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_ids_are_the_fixed_set() {
        // The literal set is load-bearing; a changed or shrunk set would
        // leak synthetic rows into the selection UI.
        assert_eq!(EXCLUDED_LOCATION_IDS.len(), 8);
        for id in 512..=519 {
            assert!(EXCLUDED_LOCATION_IDS.contains(&id));
        }
    }
}
