//! Dietary preference tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Closed set of dietary preferences a user can select.
///
/// Serialized as camelCase tags (`"glutenFree"`), which is also the format
/// accepted by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    LowCarb,
    Keto,
    Paleo,
}

impl DietaryPreference {
    /// All preferences in display order.
    pub const ALL: [Self; 7] = [
        Self::Vegetarian,
        Self::Vegan,
        Self::GlutenFree,
        Self::DairyFree,
        Self::LowCarb,
        Self::Keto,
        Self::Paleo,
    ];

    /// Serialized tag for this preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "glutenFree",
            Self::DairyFree => "dairyFree",
            Self::LowCarb => "lowCarb",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten-Free",
            Self::DairyFree => "Dairy-Free",
            Self::LowCarb => "Low-Carb",
            Self::Keto => "Keto",
            Self::Paleo => "Paleo",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownPreference {
                value: s.to_string(),
            })
    }
}

/// Set of selected preferences, kept in selection order.
///
/// Membership is toggled; duplicates are impossible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceSet(Vec<DietaryPreference>);

impl PreferenceSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `pref`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, pref: DietaryPreference) -> bool {
        if let Some(pos) = self.0.iter().position(|p| *p == pref) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(pref);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, pref: DietaryPreference) -> bool {
        self.0.contains(&pref)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[DietaryPreference] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<DietaryPreference> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = DietaryPreference>>(iter: I) -> Self {
        let mut set = Self::new();
        for pref in iter {
            if !set.contains(pref) {
                set.0.push(pref);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = PreferenceSet::new();
        assert!(set.toggle(DietaryPreference::Vegan));
        assert!(set.contains(DietaryPreference::Vegan));

        assert!(!set.toggle(DietaryPreference::Vegan));
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_keeps_selection_order() {
        let mut set = PreferenceSet::new();
        set.toggle(DietaryPreference::Keto);
        set.toggle(DietaryPreference::Vegan);
        set.toggle(DietaryPreference::Paleo);
        set.toggle(DietaryPreference::Vegan);

        assert_eq!(
            set.as_slice(),
            [DietaryPreference::Keto, DietaryPreference::Paleo]
        );
    }

    #[test]
    fn from_iter_drops_duplicates() {
        let set: PreferenceSet = [
            DietaryPreference::Keto,
            DietaryPreference::Keto,
            DietaryPreference::LowCarb,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_as_camel_case_tags() {
        let set: PreferenceSet = [DietaryPreference::GlutenFree, DietaryPreference::DairyFree]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["glutenFree","dairyFree"]"#);
    }

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!(
            "lowcarb".parse::<DietaryPreference>().unwrap(),
            DietaryPreference::LowCarb
        );
        assert_eq!(
            " glutenFree ".parse::<DietaryPreference>().unwrap(),
            DietaryPreference::GlutenFree
        );
        assert!("gluten-free".parse::<DietaryPreference>().is_err());
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(DietaryPreference::GlutenFree.label(), "Gluten-Free");
        assert_eq!(DietaryPreference::Vegetarian.label(), "Vegetarian");
    }
}
