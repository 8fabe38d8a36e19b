//! The in-progress criteria draft owned by the wizard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DraftDefaults;

use super::category::{Category, WorkTypeSelection};
use super::section::{
    EarlyConfig, HolidayConfig, MinuteUnit, NightConfig, OvertimeConfig, SectionConfig,
};

/// How computed minutes are rounded to the counting unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Drop the remainder (버림).
    #[default]
    Truncate,
    /// Round to the nearest unit (반올림).
    RoundNearest,
    /// Round up to the next unit (올림).
    RoundUp,
}

/// The wall-clock window that counts as one attendance day.
///
/// Bounds hold the text as entered; they are not cross-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// Window start.
    pub start: String,
    /// Window end.
    pub end: String,
}

/// Exclusions applied to all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonExclusionConfig {
    /// Whether exclusions apply at all.
    pub enabled: bool,
    /// Exclude time spent outside (외출).
    pub exclude_outside_time: bool,
    /// Exclude time after leaving mid-shift.
    pub exclude_mid_exit_time: bool,
}

impl CommonExclusionConfig {
    /// Returns the outside-time flag, honouring the master switch.
    pub const fn excludes_outside_time(&self) -> bool {
        self.enabled && self.exclude_outside_time
    }

    /// Returns the mid-exit flag, honouring the master switch.
    pub const fn excludes_mid_exit_time(&self) -> bool {
        self.enabled && self.exclude_mid_exit_time
    }
}

/// An uncommitted criteria definition.
///
/// The selection and the per-category sections are private: a section exists
/// exactly for the enabled categories, and [`set_category_enabled`](Self::set_category_enabled)
/// is the only way to change either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriteriaDraft {
    /// Criteria name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Counting unit for base work.
    pub unit: MinuteUnit,
    /// Rounding applied to counted minutes.
    pub rounding: RoundingMode,
    /// Attendance day window.
    pub day_window: DayWindow,
    /// Common exclusions.
    pub exclusion: CommonExclusionConfig,
    selection: WorkTypeSelection,
    sections: BTreeMap<Category, SectionConfig>,
}

impl CriteriaDraft {
    /// Creates an empty draft from configured defaults.
    pub fn from_defaults(defaults: &DraftDefaults) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            unit: defaults.unit,
            rounding: defaults.rounding,
            day_window: defaults.day_window.clone(),
            exclusion: defaults.exclusion,
            selection: WorkTypeSelection::default(),
            sections: BTreeMap::new(),
        }
    }

    /// Returns the category selection.
    pub fn selection(&self) -> &WorkTypeSelection {
        &self.selection
    }

    /// Returns whether a category is enabled.
    pub fn is_enabled(&self, category: Category) -> bool {
        self.selection.is_enabled(category)
    }

    /// Enables or disables a category.
    ///
    /// Enabling a disabled category installs its default section. Disabling
    /// drops the section and clears the overtime overlap flag for it. Setting
    /// a category to its current state is a no-op, so existing edits survive.
    pub fn set_category_enabled(&mut self, category: Category, enabled: bool) {
        if self.selection.is_enabled(category) == enabled {
            return;
        }

        self.selection.set(category, enabled);
        if enabled {
            self.sections
                .insert(category, SectionConfig::defaults_for(category));
        } else {
            self.sections.remove(&category);
            if let Some(overtime) = self.overtime_mut() {
                overtime.clear_overlap(category);
            }
        }
    }

    /// Returns the sections of enabled categories in canonical order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionConfig> {
        self.sections.values()
    }

    /// Returns the section for a category, if enabled.
    pub fn section(&self, category: Category) -> Option<&SectionConfig> {
        self.sections.get(&category)
    }

    /// Returns the early section, if enabled.
    pub fn early(&self) -> Option<&EarlyConfig> {
        match self.sections.get(&Category::Early) {
            Some(SectionConfig::Early(config)) => Some(config),
            _ => None,
        }
    }

    /// Returns the overtime section, if enabled.
    pub fn overtime(&self) -> Option<&OvertimeConfig> {
        match self.sections.get(&Category::Overtime) {
            Some(SectionConfig::Overtime(config)) => Some(config),
            _ => None,
        }
    }

    /// Returns the night section, if enabled.
    pub fn night(&self) -> Option<&NightConfig> {
        match self.sections.get(&Category::Night) {
            Some(SectionConfig::Night(config)) => Some(config),
            _ => None,
        }
    }

    /// Returns the holiday section, if enabled.
    pub fn holiday(&self) -> Option<&HolidayConfig> {
        match self.sections.get(&Category::Holiday) {
            Some(SectionConfig::Holiday(config)) => Some(config),
            _ => None,
        }
    }

    pub(crate) fn early_mut(&mut self) -> Option<&mut EarlyConfig> {
        match self.sections.get_mut(&Category::Early) {
            Some(SectionConfig::Early(config)) => Some(config),
            _ => None,
        }
    }

    /// Mutable overtime access; callers must re-apply overlap hygiene after
    /// editing, see [`Self::normalize_overlaps`].
    pub(crate) fn overtime_mut(&mut self) -> Option<&mut OvertimeConfig> {
        match self.sections.get_mut(&Category::Overtime) {
            Some(SectionConfig::Overtime(config)) => Some(config),
            _ => None,
        }
    }

    pub(crate) fn night_mut(&mut self) -> Option<&mut NightConfig> {
        match self.sections.get_mut(&Category::Night) {
            Some(SectionConfig::Night(config)) => Some(config),
            _ => None,
        }
    }

    pub(crate) fn holiday_mut(&mut self) -> Option<&mut HolidayConfig> {
        match self.sections.get_mut(&Category::Holiday) {
            Some(SectionConfig::Holiday(config)) => Some(config),
            _ => None,
        }
    }

    /// Drops overtime overlap flags for categories that are not selected.
    pub(crate) fn normalize_overlaps(&mut self) {
        let selection = self.selection;
        if let Some(overtime) = self.overtime_mut() {
            overtime.retain_selected_overlaps(&selection);
        }
    }
}

impl Default for CriteriaDraft {
    fn default() -> Self {
        Self::from_defaults(&DraftDefaults::default())
    }
}
