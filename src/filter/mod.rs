//! Spot filtering.
//!
//! A linear scan over the display list with three conjunctive predicates. No ranking:
//! results keep the order of the list they were drawn from.

use serde::{Deserialize, Serialize};

use crate::models::Spot;

/// Selection value meaning "no restriction".
pub const ALL: &str = "Todos";

/// Category, neighborhood and free-text selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub query: String,
}

impl SpotFilter {
    pub fn new(category: Option<&str>, neighborhood: Option<&str>, query: &str) -> Self {
        Self {
            category: category.map(String::from),
            neighborhood: neighborhood.map(String::from),
            query: query.to_string(),
        }
    }

    /// Whether a single spot passes all three predicates.
    pub fn matches(&self, spot: &Spot) -> bool {
        selection_matches(self.category.as_deref(), &spot.category)
            && selection_matches(self.neighborhood.as_deref(), &spot.neighborhood)
            && text_matches(&self.query, spot)
    }

    /// Visible subset of `spots`, in input order.
    pub fn apply(&self, spots: &[Spot]) -> Vec<Spot> {
        spots.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// `None`, empty, and [`ALL`] all mean unrestricted.
pub fn is_all(selection: Option<&str>) -> bool {
    match selection {
        None => true,
        Some(value) => value.is_empty() || value == ALL,
    }
}

fn selection_matches(selection: Option<&str>, value: &str) -> bool {
    is_all(selection) || selection == Some(value)
}

fn text_matches(query: &str, spot: &Spot) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    spot.name.to_lowercase().contains(&needle) || spot.description.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::featured_spots;

    fn ids(spots: &[Spot]) -> Vec<&str> {
        spots.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_identity_filter() {
        let spots = featured_spots();
        assert_eq!(SpotFilter::default().apply(&spots), spots);
        assert_eq!(SpotFilter::new(Some(ALL), Some(ALL), "").apply(&spots), spots);
    }

    #[test]
    fn test_category_filter() {
        let spots = featured_spots();
        let result = SpotFilter::new(Some("Bares"), None, "").apply(&spots);
        assert_eq!(ids(&result), vec!["1", "4"]);
    }

    #[test]
    fn test_neighborhood_filter() {
        let spots = featured_spots();
        let result = SpotFilter::new(None, Some("Santa Teresa"), "").apply(&spots);
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_conjunction() {
        let spots = featured_spots();
        let result = SpotFilter::new(Some("Bares"), Some("Santa Teresa"), "").apply(&spots);
        assert_eq!(ids(&result), vec!["1"]);

        let none = SpotFilter::new(Some("Bares"), Some("Urca"), "").apply(&spots);
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let spots = featured_spots();

        let by_name = SpotFilter::new(None, None, "CANASTRA").apply(&spots);
        assert_eq!(ids(&by_name), vec!["4"]);

        let by_description = SpotFilter::new(None, None, "pôr do sol").apply(&spots);
        assert_eq!(ids(&by_description), vec!["3"]);
    }

    #[test]
    fn test_result_preserves_input_order() {
        let mut spots = featured_spots();
        spots.reverse();
        let result = SpotFilter::new(Some("Bares"), None, "").apply(&spots);
        assert_eq!(ids(&result), vec!["4", "1"]);
    }

    #[test]
    fn test_conjunction_equals_predicate_intersection() {
        let spots = featured_spots();
        let categories = [None, Some("Bares"), Some("Passeios"), Some("Praias")];
        let neighborhoods = [None, Some("Santa Teresa"), Some("Urca"), Some("Ipanema")];
        let queries = ["", "bar", "a", "zzz"];

        for c in categories {
            for n in neighborhoods {
                for q in queries {
                    let filter = SpotFilter::new(c, n, q);
                    let expected: Vec<Spot> = spots
                        .iter()
                        .filter(|s| {
                            (c.is_none() || Some(s.category.as_str()) == c)
                                && (n.is_none() || Some(s.neighborhood.as_str()) == n)
                                && (s.name.to_lowercase().contains(q)
                                    || s.description.to_lowercase().contains(q))
                        })
                        .cloned()
                        .collect();
                    assert_eq!(filter.apply(&spots), expected, "{:?}", filter);
                }
            }
        }
    }
}
