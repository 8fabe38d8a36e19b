//! Work-type categories and the operator's selection of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An optional work-type category a criteria can enable.
///
/// Base work is not a member: it is always active and cannot be toggled.
/// The declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Work before the base window (조기).
    Early,
    /// Work beyond the base window (연장).
    Overtime,
    /// Work inside the night window (야간).
    Night,
    /// Work on holidays (휴일).
    Holiday,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Early,
        Category::Overtime,
        Category::Night,
        Category::Holiday,
    ];

    /// Returns the string representation of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Overtime => "overtime",
            Self::Night => "night",
            Self::Holiday => "holiday",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which optional categories are enabled.
///
/// This type is only a record of flags. The draft owns the invariant that a
/// section config exists exactly for the enabled categories, so mutation goes
/// through [`CriteriaDraft::set_category_enabled`](super::CriteriaDraft::set_category_enabled).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeSelection {
    /// Early work enabled.
    pub early: bool,
    /// Overtime work enabled.
    pub overtime: bool,
    /// Night work enabled.
    pub night: bool,
    /// Holiday work enabled.
    pub holiday: bool,
}

impl WorkTypeSelection {
    /// Returns whether the category is enabled.
    pub const fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Early => self.early,
            Category::Overtime => self.overtime,
            Category::Night => self.night,
            Category::Holiday => self.holiday,
        }
    }

    pub(crate) fn set(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Early => self.early = enabled,
            Category::Overtime => self.overtime = enabled,
            Category::Night => self.night = enabled,
            Category::Holiday => self.holiday = enabled,
        }
    }

    /// Iterates over the enabled categories in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.is_enabled(*category))
    }

    /// Returns the number of enabled optional categories.
    pub fn count(&self) -> usize {
        self.enabled().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_empty() {
        let selection = WorkTypeSelection::default();
        assert_eq!(selection.count(), 0);
        for category in Category::ALL {
            assert!(!selection.is_enabled(category));
        }
    }

    #[test]
    fn test_enabled_iterates_in_canonical_order() {
        let mut selection = WorkTypeSelection::default();
        selection.set(Category::Holiday, true);
        selection.set(Category::Early, true);
        selection.set(Category::Night, true);

        let enabled: Vec<Category> = selection.enabled().collect();
        assert_eq!(
            enabled,
            vec![Category::Early, Category::Night, Category::Holiday]
        );
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::Overtime).unwrap();
        assert_eq!(json, "\"overtime\"");
        assert_eq!(Category::Holiday.to_string(), "holiday");
    }
}
