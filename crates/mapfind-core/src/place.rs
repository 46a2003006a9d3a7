use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Map code recorded when the model could not supply one.
pub const MAP_CODE_NOT_FOUND: &str = "Not Found";

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Returns `None` unless both values are finite and within
    /// `-90..=90` / `-180..=180`.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// One fully resolved lookup. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlace {
    /// Generation timestamp (RFC 3339, UTC, millisecond precision).
    pub id: String,
    /// The name as the user typed it.
    pub place_name: String,
    pub phone_number: String,
    pub map_code: String,
    pub address: String,
}

impl ResolvedPlace {
    /// Builds a place stamped with the current time as its id.
    #[must_use]
    pub fn new(place_name: &str, phone_number: &str, address: &str, map_code: &str) -> Self {
        Self {
            id: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            place_name: place_name.to_owned(),
            phone_number: phone_number.to_owned(),
            map_code: map_code.to_owned(),
            address: address.to_owned(),
        }
    }
}

/// A suggestion returned when a place name was too ambiguous to resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePlace {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Accumulated lookup results, newest first.
///
/// Insertion order is the only order; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultList(Vec<ResolvedPlace>);

impl ResultList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `place` at index 0.
    pub fn push_front(&mut self, place: ResolvedPlace) {
        self.0.insert(0, place);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ResolvedPlace> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedPlace> {
        self.0.iter()
    }
}

impl From<Vec<ResolvedPlace>> for ResultList {
    fn from(places: Vec<ResolvedPlace>) -> Self {
        Self(places)
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a ResolvedPlace;
    type IntoIter = std::slice::Iter<'a, ResolvedPlace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
