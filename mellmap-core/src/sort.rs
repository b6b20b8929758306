use std::cmp::Ordering;

use mellmap_boundary::Place;

/// String comparison used to order places for display.
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Locale-style comparison for Cyrillic and Latin text
/// that does not depend on a browser or ICU data.
///
/// Levels, in order of precedence:
/// 1. letters folded to lower case with `ё` treated as `е`
/// 2. `е` before `ё`
/// 3. lower case before upper case
/// 4. code points
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingCollator;

fn primary(c: char) -> char {
    match c {
        'ё' | 'Ё' => 'е',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

const fn secondary(c: char) -> u8 {
    match c {
        'ё' | 'Ё' => 1,
        _ => 0,
    }
}

fn tertiary(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

fn compare_level<K, F>(a: &str, b: &str, key: F) -> Ordering
where
    K: Ord,
    F: Fn(char) -> K,
{
    a.chars().map(&key).cmp(b.chars().map(&key))
}

impl Collator for FoldingCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_level(a, b, primary)
            .then_with(|| compare_level(a, b, secondary))
            .then_with(|| compare_level(a, b, tertiary))
            .then_with(|| a.cmp(b))
    }
}

/// Ascending by name, stable for equal names.
pub fn sort_by_name<C>(places: &mut [Place], collator: &C)
where
    C: Collator + ?Sized,
{
    places.sort_by(|a, b| collator.compare(&a.name, &b.name));
}

#[cfg(test)]
mod tests {
    use mellmap_boundary::builders::*;

    use super::*;

    fn names(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    fn places(names: &[&str]) -> Vec<Place> {
        names
            .iter()
            .map(|n| Place::build().name(n).finish())
            .collect()
    }

    #[test]
    fn sort_cyrillic_names_like_a_dictionary() {
        let mut places = places(&["Ёлки", "Аврора", "Берлога"]);
        sort_by_name(&mut places, &FoldingCollator);
        assert_eq!(names(&places), vec!["Аврора", "Берлога", "Ёлки"]);
    }

    #[test]
    fn code_point_order_differs() {
        let mut names = vec!["Ёлки", "Аврора", "Берлога"];
        names.sort_unstable();
        assert_eq!(names, vec!["Ёлки", "Аврора", "Берлога"]);
    }

    #[test]
    fn ignore_case_on_the_primary_level() {
        let mut places = places(&["банка", "Арка", "Вилка", "астра"]);
        sort_by_name(&mut places, &FoldingCollator);
        assert_eq!(names(&places), vec!["Арка", "астра", "банка", "Вилка"]);
    }

    #[test]
    fn break_ties_by_yo_then_case() {
        let c = FoldingCollator;
        assert_eq!(c.compare("елка", "ёлка"), Ordering::Less);
        assert_eq!(c.compare("ёлка", "елки"), Ordering::Less);
        assert_eq!(c.compare("cafe", "Cafe"), Ordering::Less);
        assert_eq!(c.compare("Cafe", "Cafe"), Ordering::Equal);
    }

    #[test]
    fn accept_closures_as_collator() {
        let mut places = places(&["b", "a"]);
        sort_by_name(&mut places, &|a: &str, b: &str| b.cmp(a));
        assert_eq!(names(&places), vec!["b", "a"]);
    }
}
