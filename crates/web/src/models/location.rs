//! Location domain types.

use serde::Serialize;

use goprac_core::LocationId;

/// A selectable interview location (domain type).
///
/// Serializes with the `cityName` field name; that shape is the JSON API
/// contract consumed by the review page's location select.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    /// Unique location ID.
    pub id: LocationId,
    /// Human-readable city label.
    #[serde(rename = "cityName")]
    pub city_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_location_wire_shape() {
        let location = Location {
            id: LocationId::new(3),
            city_name: "Ansan".to_string(),
        };

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "cityName": "Ansan"}));
    }
}
