use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use mellmap_boundary::RandomMatchQuery;

/// Encodes all set parameters, skipping the unset ones.
pub fn query_string(query: &RandomMatchQuery) -> String {
    let RandomMatchQuery {
        district,
        category,
        breakfast_time,
        max_price,
        min_rating,
    } = query;
    let params = [
        ("district", district.clone()),
        ("category", category.clone()),
        (
            "breakfast_time",
            breakfast_time.as_ref().map(|t| t.as_str().to_owned()),
        ),
        ("max_price", max_price.map(|p| p.to_string())),
        ("min_rating", min_rating.map(|r| r.to_string())),
    ];
    params
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value?;
            Some(format!(
                "{key}={}",
                utf8_percent_encode(&value, NON_ALPHANUMERIC)
            ))
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use mellmap_boundary::BreakfastTime;

    use super::*;

    #[test]
    fn empty_query() {
        assert_eq!(query_string(&RandomMatchQuery::default()), "");
    }

    #[test]
    fn encode_set_parameters_only() {
        let query = RandomMatchQuery {
            district: Some("ЦАО".into()),
            breakfast_time: Some(BreakfastTime::WeekendsOnly),
            max_price: Some(800),
            ..Default::default()
        };
        assert_eq!(
            query_string(&query),
            "district=%D0%A6%D0%90%D0%9E&breakfast_time=weekends%5Fonly&max_price=800"
        );
    }

    #[test]
    fn encode_fractional_rating() {
        let query = RandomMatchQuery {
            min_rating: Some(4.5),
            ..Default::default()
        };
        assert_eq!(query_string(&query), "min_rating=4%2E5");
    }
}
