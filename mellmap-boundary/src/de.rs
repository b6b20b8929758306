use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// Accepts numbers and numeric strings, maps everything else to `None`.
pub fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CoordVisitor)
}

pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

struct CoordVisitor;

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

impl<'de> Visitor<'de> for CoordVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a coordinate")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(finite(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.trim().parse().ok().and_then(finite))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Pos {
        #[serde(default, deserialize_with = "super::lenient_coord")]
        lat: Option<f64>,
    }

    fn lat(json: &str) -> Option<f64> {
        serde_json::from_str::<Pos>(json).unwrap().lat
    }

    #[test]
    fn accept_numbers_and_numeric_strings() {
        assert_eq!(lat(r#"{"lat":55.75}"#), Some(55.75));
        assert_eq!(lat(r#"{"lat":55}"#), Some(55.0));
        assert_eq!(lat(r#"{"lat":-3}"#), Some(-3.0));
        assert_eq!(lat(r#"{"lat":" 55.7 "}"#), Some(55.7));
    }

    #[test]
    fn map_non_numeric_values_to_none() {
        assert_eq!(lat(r#"{"lat":null}"#), None);
        assert_eq!(lat(r#"{"lat":"abc"}"#), None);
        assert_eq!(lat(r#"{"lat":"NaN"}"#), None);
        assert_eq!(lat(r#"{"lat":true}"#), None);
        assert_eq!(lat(r#"{"lat":[1,2]}"#), None);
        assert_eq!(lat(r#"{"lat":{"x":1}}"#), None);
        assert_eq!(lat("{}"), None);
    }
}
