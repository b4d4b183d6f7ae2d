//! Category Suggestions
//!
//! Fixed topical label groups offered while typing a new category.

use serde::Serialize;

pub const MAX_SUGGESTIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionGroup {
    Common,
    Cuisine,
    Dietary,
    Drinks,
    Meals,
}

impl SuggestionGroup {
    pub const ALL: [SuggestionGroup; 5] = [
        SuggestionGroup::Common,
        SuggestionGroup::Cuisine,
        SuggestionGroup::Dietary,
        SuggestionGroup::Drinks,
        SuggestionGroup::Meals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SuggestionGroup::Common => "Common",
            SuggestionGroup::Cuisine => "Cuisine",
            SuggestionGroup::Dietary => "Dietary",
            SuggestionGroup::Drinks => "Drinks",
            SuggestionGroup::Meals => "Meals",
        }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            SuggestionGroup::Common => &[
                "Appetizers", "Starters", "Mains", "Sides", "Desserts", "Specials", "Salads", "Soups",
            ],
            SuggestionGroup::Cuisine => &[
                "Italian", "Indian", "Chinese", "Japanese", "Mexican", "Thai", "Mediterranean", "American",
            ],
            SuggestionGroup::Dietary => &[
                "Vegetarian", "Vegan", "Gluten Free", "Dairy Free", "Halal", "Keto",
            ],
            SuggestionGroup::Drinks => &[
                "Drinks", "Hot Drinks", "Cold Drinks", "Cocktails", "Wine", "Beer", "Smoothies", "Juices",
            ],
            SuggestionGroup::Meals => &[
                "Breakfast", "Brunch", "Lunch", "Dinner", "Kids Menu", "Snacks",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub group: SuggestionGroup,
    pub label: &'static str,
}

/// Case-insensitive substring match over every group, skipping `exclude`
///
/// Blank input yields nothing.
pub fn suggest(input: &str, exclude: &[String]) -> Vec<Suggestion> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<Suggestion> = Vec::new();
    for group in SuggestionGroup::ALL {
        for label in group.labels() {
            if !label.to_lowercase().contains(&needle) {
                continue;
            }
            let taken = exclude.iter().any(|e| e.eq_ignore_ascii_case(label))
                || found.iter().any(|s| s.label == *label);
            if !taken {
                found.push(Suggestion { group, label: *label });
            }
        }
    }
    found.truncate(MAX_SUGGESTIONS);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_case_insensitive() {
        let labels: Vec<&str> = suggest("DRINK", &[]).iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Drinks", "Hot Drinks", "Cold Drinks"]);
    }

    #[test]
    fn test_excludes_existing_and_blank() {
        let existing = vec!["vegan".to_string()];
        let labels: Vec<&str> = suggest("veg", &existing).iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Vegetarian"]);
        assert!(suggest("   ", &[]).is_empty());
    }

    #[test]
    fn test_reports_group() {
        let found = suggest("brunch", &[]);
        assert_eq!(found, vec![Suggestion { group: SuggestionGroup::Meals, label: "Brunch" }]);
    }
}
