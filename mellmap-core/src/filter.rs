use mellmap_boundary::{BreakfastTime, Place, RandomMatchQuery};

/// Two independent, optional criteria combined with AND.
///
/// `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceFilter {
    pub district: Option<String>,
    pub breakfast_time: Option<BreakfastTime>,
}

impl PlaceFilter {
    /// Builds a filter from raw `<select>` values where
    /// the empty string stands for "no selection".
    #[must_use]
    pub fn from_selection(district: &str, breakfast_time: &str) -> Self {
        Self {
            district: non_empty(district).map(ToOwned::to_owned),
            breakfast_time: non_empty(breakfast_time).map(BreakfastTime::from_raw),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.breakfast_time.is_none()
    }

    #[must_use]
    pub fn to_random_match_query(&self) -> RandomMatchQuery {
        RandomMatchQuery {
            district: self.district.clone(),
            breakfast_time: self.breakfast_time.clone(),
            ..Default::default()
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

pub trait MatchesFilter {
    fn matches(&self, filter: &PlaceFilter) -> bool;
}

impl MatchesFilter for Place {
    fn matches(&self, filter: &PlaceFilter) -> bool {
        let PlaceFilter {
            district,
            breakfast_time,
        } = filter;
        district.as_ref().is_none_or(|d| *d == self.district)
            && breakfast_time
                .as_ref()
                .is_none_or(|t| *t == self.breakfast_time)
    }
}

/// Selects the matching places without touching the backing list.
#[must_use]
pub fn filter_places(places: &[Place], filter: &PlaceFilter) -> Vec<Place> {
    places
        .iter()
        .filter(|p| p.matches(filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use mellmap_boundary::builders::*;

    use super::*;

    fn places() -> Vec<Place> {
        vec![
            Place::build()
                .id(1)
                .district("ЦАО")
                .breakfast(BreakfastTime::AllDay, None)
                .finish(),
            Place::build()
                .id(2)
                .district("ЦАО")
                .breakfast(BreakfastTime::WeekendsOnly, None)
                .finish(),
            Place::build()
                .id(3)
                .district("САО")
                .breakfast(BreakfastTime::AllDay, None)
                .finish(),
            Place::build()
                .id(4)
                .district("ЮАО")
                .breakfast(BreakfastTime::SpecificTime, Some("9:00–12:00"))
                .finish(),
        ]
    }

    fn ids(places: &[Place]) -> Vec<i64> {
        places.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_filter_yields_everything() {
        let all = places();
        let filter = PlaceFilter::from_selection("", "");
        assert!(filter.is_empty());
        assert_eq!(ids(&filter_places(&all, &filter)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filter_by_district_only() {
        let filter = PlaceFilter::from_selection("ЦАО", "");
        assert_eq!(ids(&filter_places(&places(), &filter)), vec![1, 2]);
    }

    #[test]
    fn filter_by_breakfast_time_only() {
        let filter = PlaceFilter::from_selection("", "all_day");
        assert_eq!(ids(&filter_places(&places(), &filter)), vec![1, 3]);
    }

    #[test]
    fn combine_filters_conjunctively() {
        let filter = PlaceFilter::from_selection("ЦАО", "all_day");
        assert_eq!(ids(&filter_places(&places(), &filter)), vec![1]);
        let filter = PlaceFilter::from_selection("САО", "weekends_only");
        assert!(filter_places(&places(), &filter).is_empty());
    }

    #[test]
    fn filtering_leaves_the_backing_list_untouched() {
        let all = places();
        let _ = filter_places(&all, &PlaceFilter::from_selection("ЮАО", ""));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn random_match_query_carries_the_filter() {
        let query = PlaceFilter::from_selection("ЦАО", "").to_random_match_query();
        assert_eq!(query.district.as_deref(), Some("ЦАО"));
        assert_eq!(query.breakfast_time, None);
        assert_eq!(query.max_price, None);
    }
}
