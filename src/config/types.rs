//! Configuration types for the criteria wizard.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{CommonExclusionConfig, DayWindow, MinuteUnit, RoundingMode};

/// Fallback subtitle for criteria created without a description.
pub const DEFAULT_FALLBACK_SUBTITLE: &str = "근무 시간 계산 기준";

/// Initial values of a freshly opened wizard draft.
///
/// Name, description and category selection always start empty; only the
/// step 2 settings and the common exclusions are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DraftDefaults {
    /// Counting unit for base work.
    pub unit: MinuteUnit,
    /// Rounding applied to counted minutes.
    pub rounding: RoundingMode,
    /// Attendance day window.
    pub day_window: DayWindow,
    /// Common exclusions.
    pub exclusion: CommonExclusionConfig,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            unit: MinuteUnit::One,
            rounding: RoundingMode::Truncate,
            day_window: DayWindow {
                start: "00:00".to_string(),
                end: "23:59".to_string(),
            },
            exclusion: CommonExclusionConfig {
                enabled: true,
                exclude_outside_time: true,
                exclude_mid_exit_time: true,
            },
        }
    }
}

/// The complete wizard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Subtitle used when the description is blank.
    pub fallback_subtitle: String,
    /// Initial draft values.
    pub draft: DraftDefaults,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            fallback_subtitle: DEFAULT_FALLBACK_SUBTITLE.to_string(),
            draft: DraftDefaults::default(),
        }
    }
}
