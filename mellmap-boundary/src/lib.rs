//! # mellmap-boundary
//!
//! Serializable data structures of the places API as seen by its clients.

use serde::{Deserialize, Serialize};
use strum::EnumString;

mod de;

#[cfg(feature = "builders")]
pub mod builders;

pub type PlaceId = i64;

/// The currency glyph every price starts with.
pub const CURRENCY_GLYPH: char = '₽';

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    pub id              : PlaceId,
    pub name            : String,
    pub district        : String,
    pub category        : String,
    #[serde(default, deserialize_with = "de::lenient_coord")]
    pub lat             : Option<f64>,
    #[serde(default, deserialize_with = "de::lenient_coord")]
    pub lng             : Option<f64>,
    pub address         : String,
    #[serde(default)]
    pub website         : Option<String>,
    pub price           : String,
    #[serde(default)]
    pub rating          : f64,
    #[serde(default)]
    pub description     : Option<String>,
    #[serde(default)]
    pub breakfast_time  : BreakfastTime,
    #[serde(default)]
    pub breakfast_hours : Option<String>,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub photos          : Vec<String>,
}

/// Request body of both the create and the update call.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewPlace {
    pub name            : String,
    pub district        : String,
    pub category        : String,
    pub lat             : f64,
    pub lng             : f64,
    pub address         : String,
    pub website         : Option<String>,
    pub price           : String,
    pub rating          : Option<f64>,
    pub description     : String,
    pub breakfast_time  : BreakfastTime,
    pub breakfast_hours : Option<String>,
    pub photos          : Vec<String>,
}

/// Reduced place record returned by the random picks endpoint.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceSummary {
    pub id              : PlaceId,
    pub name            : String,
    pub district        : String,
    pub category        : String,
    #[serde(default)]
    pub breakfast_time  : BreakfastTime,
    #[serde(default)]
    pub breakfast_hours : Option<String>,
    pub price           : String,
    #[serde(default)]
    pub rating          : f64,
    #[serde(default, deserialize_with = "de::null_as_empty")]
    pub photos          : Vec<String>,
}

#[derive(Default, EnumString)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, Hash))]
#[strum(serialize_all = "snake_case")]
pub enum BreakfastTime {
    #[default]
    AllDay,
    WeekendsOnly,
    SpecificTime,
    /// A value unknown to this client, kept verbatim.
    #[strum(default)]
    Other(String),
}

impl BreakfastTime {
    pub const KNOWN: [Self; 3] = [Self::AllDay, Self::WeekendsOnly, Self::SpecificTime];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AllDay => "all_day",
            Self::WeekendsOnly => "weekends_only",
            Self::SpecificTime => "specific_time",
            Self::Other(value) => value,
        }
    }

    /// Parses a wire value; unknown values end up in [`BreakfastTime::Other`].
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| Self::Other(raw.to_owned()))
    }

    #[must_use]
    pub const fn is_specific_time(&self) -> bool {
        matches!(self, Self::SpecificTime)
    }
}


impl Serialize for BreakfastTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BreakfastTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&value))
    }
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RandomMatchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast_time: Option<BreakfastTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

/// Acknowledgement of a successful mutation.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Status {
    pub status: String,
}

/// Error body of non-2xx responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{error}"))]
pub struct Error {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_place_from_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Кофемания",
            "district": "ЦАО",
            "category": "кафе",
            "breakfast_time": "specific_time",
            "breakfast_hours": "8:00–11:00",
            "lat": 55.7601,
            "lng": 37.6187,
            "address": "Большая Никитская, 13",
            "website": null,
            "price": "₽900",
            "rating": 4.6,
            "description": null,
            "photos": ["/photos/1.jpg", "/photos/2.jpg"]
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, 7);
        assert_eq!(place.breakfast_time, BreakfastTime::SpecificTime);
        assert_eq!(place.breakfast_hours.as_deref(), Some("8:00–11:00"));
        assert_eq!(place.lat, Some(55.7601));
        assert_eq!(place.website, None);
        assert_eq!(place.photos.len(), 2);
    }

    #[test]
    fn deserialize_null_photos_as_empty_list() {
        let json = r#"{
            "id": 1, "name": "a", "district": "b", "category": "c",
            "breakfast_time": "all_day", "lat": 1, "lng": 2,
            "address": "d", "price": "₽1", "rating": 3, "photos": null
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert!(place.photos.is_empty());
        assert_eq!(place.lat, Some(1.0));
    }

    #[test]
    fn keep_unknown_breakfast_time_verbatim() {
        let time: BreakfastTime = serde_json::from_str(r#""brunch""#).unwrap();
        assert_eq!(time, BreakfastTime::Other("brunch".into()));
        assert_eq!(serde_json::to_string(&time).unwrap(), r#""brunch""#);
    }

    #[test]
    fn parse_raw_breakfast_time_through_from_str() {
        assert_eq!(
            "weekends_only".parse::<BreakfastTime>().unwrap(),
            BreakfastTime::WeekendsOnly
        );
        assert_eq!(
            BreakfastTime::try_from("late").unwrap(),
            BreakfastTime::Other("late".into())
        );
        assert_eq!(BreakfastTime::from_raw(""), BreakfastTime::Other(String::new()));
    }

    #[test]
    fn serialize_known_breakfast_times_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&BreakfastTime::WeekendsOnly).unwrap(),
            r#""weekends_only""#
        );
        assert_eq!(BreakfastTime::from_raw("specific_time"), BreakfastTime::SpecificTime);
    }

    #[test]
    fn serialize_absent_optional_fields_of_new_place_as_null() {
        let place = NewPlace {
            name: "a".into(),
            district: "ЦАО".into(),
            category: "кафе".into(),
            lat: 55.0,
            lng: 37.0,
            address: "b".into(),
            website: None,
            price: "₽500".into(),
            rating: None,
            description: String::new(),
            breakfast_time: BreakfastTime::AllDay,
            breakfast_hours: None,
            photos: vec![],
        };
        let json = serde_json::to_value(&place).unwrap();
        assert!(json["website"].is_null());
        assert!(json["breakfast_hours"].is_null());
        assert!(json["rating"].is_null());
        assert_eq!(json["description"], "");
        assert_eq!(json["breakfast_time"], "all_day");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn display_backend_error_message() {
        let err: Error = serde_json::from_str(r#"{"error":"Не найдено"}"#).unwrap();
        assert_eq!(err.to_string(), "Не найдено");
    }
}
