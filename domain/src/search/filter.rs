//! Advocate search predicate
//!
//! An advocate matches when the lowercased term is a substring of any of:
//! first name, last name, city, degree, one of the specialties, or the
//! decimal form of the years of experience. Phone numbers and ids are
//! never searched.

use super::term::SearchTerm;
use crate::advocate::entities::Advocate;

/// Build the predicate for `term`.
///
/// The term is folded once up front; each call only folds the advocate's
/// fields.
pub fn advocate_filter(term: &SearchTerm) -> impl Fn(&Advocate) -> bool + '_ {
    move |advocate| matches(advocate, term.folded())
}

/// Keep the advocates that match `term`, preserving their order.
pub fn filter_advocates(advocates: &[Advocate], term: &SearchTerm) -> Vec<Advocate> {
    if term.is_empty() {
        return advocates.to_vec();
    }
    let predicate = advocate_filter(term);
    advocates.iter().filter(|a| predicate(a)).cloned().collect()
}

fn matches(advocate: &Advocate, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    contains_folded(&advocate.first_name, needle)
        || contains_folded(&advocate.last_name, needle)
        || contains_folded(&advocate.city, needle)
        || contains_folded(&advocate.degree, needle)
        || advocate
            .specialties
            .iter()
            .any(|specialty| contains_folded(specialty, needle))
        || advocate.years_of_experience.to_string().contains(needle)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Advocate {
        Advocate::new("John", "Doe", "New York", "Law")
            .with_id(1)
            .with_specialties(["Criminal Defense", "Personal Injury"])
            .with_years_of_experience(5)
            .with_phone_number(1234567890)
    }

    fn roster() -> Vec<Advocate> {
        vec![
            john(),
            Advocate::new("Jane", "Smith", "Los Angeles", "Business Law")
                .with_id(2)
                .with_specialties(["Corporate Law", "Tax Law"])
                .with_years_of_experience(10)
                .with_phone_number(9876543210),
            Advocate::new("Michael", "Johnson", "Chicago", "Criminal Justice")
                .with_id(3)
                .with_specialties(["Criminal Defense", "DUI Defense"])
                .with_years_of_experience(3)
                .with_phone_number(5555555555),
            Advocate::new("Sarah", "Williams", "Houston", "Family Law")
                .with_id(4)
                .with_specialties(["Divorce", "Child Custody"])
                .with_years_of_experience(7)
                .with_phone_number(4444444444),
            Advocate::new("Robert", "Brown", "Phoenix", "Environmental Law")
                .with_id(5)
                .with_specialties(["Environmental Compliance", "Regulatory Law"])
                .with_years_of_experience(12)
                .with_phone_number(3333333333),
        ]
    }

    fn first_names(term: &str) -> Vec<String> {
        filter_advocates(&roster(), &SearchTerm::new(term))
            .into_iter()
            .map(|a| a.first_name)
            .collect()
    }

    fn hits(term: &str) -> bool {
        let term = SearchTerm::new(term);
        advocate_filter(&term)(&john())
    }

    #[test]
    fn test_matches_each_text_field_case_insensitively() {
        assert!(hits("john"));
        assert!(hits("DOE"));
        assert!(hits("new york"));
        assert!(hits("law"));
        assert!(hits("criminal"));
    }

    #[test]
    fn test_matches_years_of_experience() {
        assert!(hits("5"));
    }

    #[test]
    fn test_partial_matches() {
        assert!(hits("ohn"));
        assert!(hits("injury"));
    }

    #[test]
    fn test_no_match() {
        assert!(!hits("xyz"));
    }

    #[test]
    fn test_empty_term_matches() {
        assert!(hits(""));
        assert_eq!(first_names("").len(), 5);
    }

    #[test]
    fn test_phone_number_is_not_searched() {
        assert!(!hits("1234567890"));
    }

    #[test]
    fn test_whitespace_term_is_literal() {
        // "New York" contains a space.
        assert!(hits(" "));
        let lone = Advocate::new("Ann", "Lee", "Austin", "MSW");
        assert!(!advocate_filter(&SearchTerm::new(" "))(&lone));
    }

    #[test]
    fn test_unique_name_returns_one() {
        assert_eq!(first_names("sarah"), vec!["Sarah"]);
    }

    #[test]
    fn test_common_specialty_returns_two_in_order() {
        assert_eq!(first_names("criminal"), vec!["John", "Michael"]);
    }

    #[test]
    fn test_digit_matches_years_only() {
        // Phone numbers contain "1" too but are not searched.
        assert_eq!(first_names("1"), vec!["Jane", "Robert"]);
    }

    #[test]
    fn test_degree_word_across_roster() {
        assert_eq!(first_names("law"), vec!["John", "Jane", "Sarah", "Robert"]);
    }

    #[test]
    fn test_city_prefix() {
        let results = filter_advocates(&roster(), &SearchTerm::new("los"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].city, "Los Angeles");
    }

    #[test]
    fn test_fragment_across_fields() {
        assert_eq!(
            first_names("on"),
            vec!["John", "Michael", "Sarah", "Robert"]
        );
    }

    #[test]
    fn test_no_match_across_roster() {
        assert!(first_names("xyz").is_empty());
    }

    #[test]
    fn test_non_ascii_folding() {
        let advocate = Advocate::new("Zoë", "Ångström", "Malmö", "PsyD");
        assert!(advocate_filter(&SearchTerm::new("ÅNGSTRÖM"))(&advocate));
        assert!(advocate_filter(&SearchTerm::new("malmö"))(&advocate));
    }
}
