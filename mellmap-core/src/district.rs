/// Administrative okrugs of Moscow as stored in the `district` field.
pub const DISTRICTS: [&str; 12] = [
    "ЦАО", "САО", "СВАО", "ВАО", "ЮВАО", "ЮАО", "ЮЗАО", "ЗАО", "СЗАО", "ЗелАО", "НАО", "ТАО",
];

#[must_use]
pub fn is_known(district: &str) -> bool {
    DISTRICTS.contains(&district)
}

/// Options of a district select: the okrugs followed by any other
/// non-empty district found in `present`, each listed once.
///
/// Free-text districts stay selectable this way.
#[must_use]
pub fn choices<'a>(present: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut choices = DISTRICTS.map(ToOwned::to_owned).to_vec();
    for district in present {
        if district.is_empty() || choices.iter().any(|c| c == district) {
            continue;
        }
        choices.push(district.to_owned());
    }
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_districts_only_yield_the_okrugs() {
        assert_eq!(choices(["САО", "ЦАО"]), DISTRICTS.to_vec());
        assert_eq!(choices([]), DISTRICTS.to_vec());
        assert!(is_known("ЗелАО"));
        assert!(!is_known("Химки"));
    }

    #[test]
    fn append_free_text_districts_once_in_order() {
        let choices = choices(["Химки", "", "ЦАО", "Мытищи", "Химки"]);
        assert_eq!(choices.len(), DISTRICTS.len() + 2);
        assert_eq!(&choices[DISTRICTS.len()..], ["Химки", "Мытищи"]);
    }
}
