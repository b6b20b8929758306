use mellmap_boundary::{BreakfastTime, Place};

/// Human readable wording shown in the detail panel.
#[must_use]
pub fn describe(time: &BreakfastTime, hours: Option<&str>) -> String {
    match time {
        BreakfastTime::AllDay => "Весь день".to_owned(),
        BreakfastTime::WeekendsOnly => "Только по выходным".to_owned(),
        BreakfastTime::SpecificTime => match hours.filter(|h| !h.is_empty()) {
            Some(hours) => format!("в определённое время ({hours})"),
            None => "в определённое время".to_owned(),
        },
        BreakfastTime::Other(raw) => raw.clone(),
    }
}

#[must_use]
pub fn describe_place(place: &Place) -> String {
    describe(&place.breakfast_time, place.breakfast_hours.as_deref())
}

/// Label of a choice in filter and form selects.
#[must_use]
pub fn option_label(time: &BreakfastTime) -> &str {
    match time {
        BreakfastTime::AllDay => "Весь день",
        BreakfastTime::WeekendsOnly => "Только по выходным",
        BreakfastTime::SpecificTime => "В определённое время",
        BreakfastTime::Other(raw) => raw,
    }
}
