use serde::{Deserialize, Serialize};

use crate::models::trip::Trip;

/// The entire persisted application state: every trip plus the selection
/// pointer. Serialized field names match the storage slot written by
/// earlier versions of the app.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(rename = "currentTripId", default)]
    pub current_trip_id: Option<String>,
}

impl Document {
    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn trip_mut(&mut self, id: &str) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.id == id)
    }

    pub fn current_trip(&self) -> Option<&Trip> {
        self.current_trip_id.as_deref().and_then(|id| self.trip(id))
    }

    /// Re-establish the selection invariant: `current_trip_id`, when set,
    /// must name a trip that exists. A dangling or missing pointer falls
    /// back to the first trip, or to no selection at all.
    pub fn repair_selection(&mut self) {
        let valid = self
            .current_trip_id
            .as_deref()
            .is_some_and(|id| self.trips.iter().any(|t| t.id == id));
        if !valid {
            self.current_trip_id = self.trips.first().map(|t| t.id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repair_points_dangling_selection_at_first_trip() {
        let mut doc = Document {
            trips: vec![Trip::new("a", ""), Trip::new("b", "")],
            current_trip_id: Some("gone".into()),
        };
        doc.repair_selection();
        assert_eq!(doc.current_trip_id.as_deref(), Some(doc.trips[0].id.as_str()));
    }

    #[test]
    fn repair_clears_selection_when_no_trips_remain() {
        let mut doc = Document {
            trips: Vec::new(),
            current_trip_id: Some("gone".into()),
        };
        doc.repair_selection();
        assert!(doc.current_trip_id.is_none());
    }

    #[test]
    fn persisted_shape_uses_current_trip_id_key() {
        let doc = Document::default();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"currentTripId\":null"));
    }
}
