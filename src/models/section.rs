//! Per-category section configuration.
//!
//! Each optional category carries its own parameter bundle. The bundles are
//! modelled as a tagged union so a config for a disabled category cannot be
//! reached through the draft.

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, CriteriaResult};

use super::category::{Category, WorkTypeSelection};
use super::time_value::TimeValue;

/// Counting unit for worked minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum MinuteUnit {
    /// 1 minute.
    #[default]
    One,
    /// 5 minutes.
    Five,
    /// 10 minutes.
    Ten,
    /// 15 minutes.
    Fifteen,
    /// 30 minutes.
    Thirty,
}

impl MinuteUnit {
    /// All units in ascending order.
    pub const ALL: [MinuteUnit; 5] = [
        MinuteUnit::One,
        MinuteUnit::Five,
        MinuteUnit::Ten,
        MinuteUnit::Fifteen,
        MinuteUnit::Thirty,
    ];

    /// Returns the unit length in minutes.
    pub const fn minutes(&self) -> u16 {
        match self {
            Self::One => 1,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Thirty => 30,
        }
    }
}

impl TryFrom<u16> for MinuteUnit {
    type Error = CriteriaError;

    fn try_from(value: u16) -> CriteriaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.minutes() == value)
            .ok_or_else(|| CriteriaError::InvalidOption {
                option: "minute unit",
                value: value.to_string(),
            })
    }
}

impl From<MinuteUnit> for u16 {
    fn from(value: MinuteUnit) -> Self {
        value.minutes()
    }
}

/// Minimum/maximum minute bound for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum MinuteLimit {
    /// 30 minutes.
    Thirty,
    /// 60 minutes.
    Sixty,
    /// 120 minutes.
    OneTwenty,
    /// 180 minutes.
    OneEighty,
    /// 240 minutes.
    TwoForty,
}

impl MinuteLimit {
    /// All limits in ascending order.
    pub const ALL: [MinuteLimit; 5] = [
        MinuteLimit::Thirty,
        MinuteLimit::Sixty,
        MinuteLimit::OneTwenty,
        MinuteLimit::OneEighty,
        MinuteLimit::TwoForty,
    ];

    /// Returns the limit in minutes.
    pub const fn minutes(&self) -> u16 {
        match self {
            Self::Thirty => 30,
            Self::Sixty => 60,
            Self::OneTwenty => 120,
            Self::OneEighty => 180,
            Self::TwoForty => 240,
        }
    }
}

impl TryFrom<u16> for MinuteLimit {
    type Error = CriteriaError;

    fn try_from(value: u16) -> CriteriaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|limit| limit.minutes() == value)
            .ok_or_else(|| CriteriaError::InvalidOption {
                option: "minute limit",
                value: value.to_string(),
            })
    }
}

impl From<MinuteLimit> for u16 {
    fn from(value: MinuteLimit) -> Self {
        value.minutes()
    }
}

/// Unit and bounds shared by every category section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinuteRule {
    /// Counting unit.
    pub unit: MinuteUnit,
    /// Minimum recognised minutes.
    pub min: MinuteLimit,
    /// Maximum recognised minutes.
    pub max: MinuteLimit,
}

impl Default for MinuteRule {
    fn default() -> Self {
        Self {
            unit: MinuteUnit::One,
            min: MinuteLimit::Thirty,
            max: MinuteLimit::TwoForty,
        }
    }
}

/// How early work is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EarlyMode {
    /// Anything before the base window starts.
    #[default]
    BeforeBase,
    /// A fixed clock range.
    FixedRange,
}

/// Early work section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarlyConfig {
    /// Recognition mode.
    pub mode: EarlyMode,
    /// Range start, used only with [`EarlyMode::FixedRange`].
    pub fixed_start: String,
    /// Range end, used only with [`EarlyMode::FixedRange`].
    pub fixed_end: String,
    /// Unit and bounds.
    pub minutes: MinuteRule,
    /// Count early minutes as base work.
    pub merge_into_base: bool,
}

impl Default for EarlyConfig {
    fn default() -> Self {
        Self {
            mode: EarlyMode::BeforeBase,
            fixed_start: TimeValue::MIDNIGHT.to_string(),
            fixed_end: TimeValue::MIDNIGHT.to_string(),
            minutes: MinuteRule::default(),
            merge_into_base: false,
        }
    }
}

/// How overtime is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OvertimeMode {
    /// Anything beyond the base window.
    #[default]
    OverBase,
    /// Anything beyond a fixed clock time.
    FixedOver,
}

/// Which overlapping weight applies when only one is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapMode {
    /// Apply only the highest weight.
    #[default]
    HighestWeightOnly,
    /// Apply every overlapping weight.
    StackAll,
}

/// Categories overtime may overlap with under [`DuplicatePolicy::SplitByType`].
///
/// A flag only takes effect while its category is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapAllowance {
    /// Overlap with early work.
    pub early: bool,
    /// Overlap with night work.
    pub night: bool,
    /// Overlap with holiday work.
    pub holiday: bool,
}

impl OverlapAllowance {
    /// Returns the flag for a category. Overtime never overlaps itself.
    pub const fn allows(&self, category: Category) -> bool {
        match category {
            Category::Early => self.early,
            Category::Night => self.night,
            Category::Holiday => self.holiday,
            Category::Overtime => false,
        }
    }

    fn clear(&mut self, category: Category) {
        match category {
            Category::Early => self.early = false,
            Category::Night => self.night = false,
            Category::Holiday => self.holiday = false,
            Category::Overtime => {}
        }
    }

    fn retain_selected(&mut self, selection: &WorkTypeSelection) {
        for category in [Category::Early, Category::Night, Category::Holiday] {
            if !selection.is_enabled(category) {
                self.clear(category);
            }
        }
    }
}

/// How overtime interacts with other categories covering the same minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "policy")]
pub enum DuplicatePolicy {
    /// Recognise each work type separately.
    SplitByType {
        /// Categories overtime may overlap with.
        #[serde(default)]
        allow_overlap: OverlapAllowance,
    },
    /// Recognise at most one work type.
    CapOne {
        /// Weight selection among the overlapping types.
        #[serde(default)]
        cap_mode: CapMode,
    },
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::SplitByType {
            allow_overlap: OverlapAllowance::default(),
        }
    }
}

/// Overtime section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeConfig {
    /// Recognition mode.
    pub mode: OvertimeMode,
    /// Threshold, used only with [`OvertimeMode::FixedOver`].
    pub fixed_over_threshold: String,
    /// Unit and bounds.
    pub minutes: MinuteRule,
    /// Overlap handling.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            mode: OvertimeMode::OverBase,
            fixed_over_threshold: TimeValue::MIDNIGHT.to_string(),
            minutes: MinuteRule::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl OvertimeConfig {
    /// Returns whether overtime may overlap with `category` given the selection.
    pub fn allows_overlap_with(&self, category: Category, selection: &WorkTypeSelection) -> bool {
        match self.duplicate_policy {
            DuplicatePolicy::SplitByType { allow_overlap } => {
                selection.is_enabled(category) && allow_overlap.allows(category)
            }
            DuplicatePolicy::CapOne { .. } => false,
        }
    }

    pub(crate) fn clear_overlap(&mut self, category: Category) {
        if let DuplicatePolicy::SplitByType { allow_overlap } = &mut self.duplicate_policy {
            allow_overlap.clear(category);
        }
    }

    pub(crate) fn retain_selected_overlaps(&mut self, selection: &WorkTypeSelection) {
        if let DuplicatePolicy::SplitByType { allow_overlap } = &mut self.duplicate_policy {
            allow_overlap.retain_selected(selection);
        }
    }
}

/// Night work section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightConfig {
    /// Window start as entered.
    pub start: String,
    /// Window end as entered.
    pub end: String,
    /// The window ends on the following day.
    pub crosses_midnight: bool,
    /// Unit and bounds.
    pub minutes: MinuteRule,
    /// Count night minutes as base work.
    pub merge_into_base: bool,
}

impl Default for NightConfig {
    fn default() -> Self {
        Self {
            start: "22:00".to_string(),
            end: "06:00".to_string(),
            crosses_midnight: true,
            minutes: MinuteRule::default(),
            merge_into_base: false,
        }
    }
}

impl NightConfig {
    /// Parses the window bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidTimeFormat`] for the first bound that is
    /// not a valid `HH:MM` value.
    pub fn window(&self) -> CriteriaResult<(TimeValue, TimeValue)> {
        Ok((TimeValue::parse(&self.start)?, TimeValue::parse(&self.end)?))
    }
}

/// Source of holiday dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HolidayBasis {
    /// The public holiday calendar.
    #[default]
    Calendar,
    /// Dates defined by the operator.
    Custom,
}

/// Holiday work section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayConfig {
    /// Source of holiday dates.
    pub basis: HolidayBasis,
    /// Unit and bounds.
    pub minutes: MinuteRule,
    /// Count holiday minutes as base work.
    pub merge_into_base: bool,
}

/// A category section, tagged by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "category")]
pub enum SectionConfig {
    /// Early work.
    Early(EarlyConfig),
    /// Overtime work.
    Overtime(OvertimeConfig),
    /// Night work.
    Night(NightConfig),
    /// Holiday work.
    Holiday(HolidayConfig),
}

impl SectionConfig {
    /// Returns the documented defaults for a category.
    pub fn defaults_for(category: Category) -> Self {
        match category {
            Category::Early => Self::Early(EarlyConfig::default()),
            Category::Overtime => Self::Overtime(OvertimeConfig::default()),
            Category::Night => Self::Night(NightConfig::default()),
            Category::Holiday => Self::Holiday(HolidayConfig::default()),
        }
    }

    /// Returns the category this section belongs to.
    pub const fn category(&self) -> Category {
        match self {
            Self::Early(_) => Category::Early,
            Self::Overtime(_) => Category::Overtime,
            Self::Night(_) => Category::Night,
            Self::Holiday(_) => Category::Holiday,
        }
    }

    /// Returns the shared unit and bounds.
    pub const fn minutes(&self) -> &MinuteRule {
        match self {
            Self::Early(c) => &c.minutes,
            Self::Overtime(c) => &c.minutes,
            Self::Night(c) => &c.minutes,
            Self::Holiday(c) => &c.minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_unit_options_verbatim() {
        let minutes: Vec<u16> = MinuteUnit::ALL.iter().map(|u| u.minutes()).collect();
        assert_eq!(minutes, vec![1, 5, 10, 15, 30]);
    }

    #[test]
    fn test_minute_limit_options_verbatim() {
        let minutes: Vec<u16> = MinuteLimit::ALL.iter().map(|l| l.minutes()).collect();
        assert_eq!(minutes, vec![30, 60, 120, 180, 240]);
    }

    #[test]
    fn test_minute_unit_rejects_unlisted_value() {
        match MinuteUnit::try_from(7) {
            Err(CriteriaError::InvalidOption { option, value }) => {
                assert_eq!(option, "minute unit");
                assert_eq!(value, "7");
            }
            other => panic!("expected InvalidOption, got {:?}", other),
        }
        assert!(serde_json::from_str::<MinuteLimit>("45").is_err());
        assert_eq!(
            serde_json::from_str::<MinuteLimit>("180").unwrap(),
            MinuteLimit::OneEighty
        );
    }

    #[test]
    fn test_section_defaults() {
        let early = EarlyConfig::default();
        assert_eq!(early.mode, EarlyMode::BeforeBase);
        assert_eq!(early.fixed_start, "00:00");
        assert_eq!(early.minutes.min, MinuteLimit::Thirty);
        assert_eq!(early.minutes.max, MinuteLimit::TwoForty);
        assert!(!early.merge_into_base);

        let overtime = OvertimeConfig::default();
        assert_eq!(overtime.mode, OvertimeMode::OverBase);
        assert_eq!(
            overtime.duplicate_policy,
            DuplicatePolicy::SplitByType {
                allow_overlap: OverlapAllowance::default()
            }
        );

        let night = NightConfig::default();
        assert_eq!(night.start, "22:00");
        assert_eq!(night.end, "06:00");
        assert!(night.crosses_midnight);

        let holiday = HolidayConfig::default();
        assert_eq!(holiday.basis, HolidayBasis::Calendar);
        assert_eq!(holiday.minutes.unit, MinuteUnit::One);
    }

    #[test]
    fn test_overlap_requires_selected_category() {
        let mut overtime = OvertimeConfig::default();
        overtime.duplicate_policy = DuplicatePolicy::SplitByType {
            allow_overlap: OverlapAllowance {
                early: true,
                night: true,
                holiday: false,
            },
        };

        let selection = WorkTypeSelection {
            overtime: true,
            night: true,
            ..Default::default()
        };

        assert!(overtime.allows_overlap_with(Category::Night, &selection));
        assert!(!overtime.allows_overlap_with(Category::Early, &selection));
        assert!(!overtime.allows_overlap_with(Category::Holiday, &selection));
    }

    #[test]
    fn test_cap_one_never_allows_overlap() {
        let overtime = OvertimeConfig {
            duplicate_policy: DuplicatePolicy::CapOne {
                cap_mode: CapMode::StackAll,
            },
            ..Default::default()
        };
        let selection = WorkTypeSelection {
            early: true,
            overtime: true,
            night: true,
            holiday: true,
        };
        for category in Category::ALL {
            assert!(!overtime.allows_overlap_with(category, &selection));
        }
    }

    #[test]
    fn test_retain_selected_overlaps_clears_unselected() {
        let mut overtime = OvertimeConfig {
            duplicate_policy: DuplicatePolicy::SplitByType {
                allow_overlap: OverlapAllowance {
                    early: true,
                    night: true,
                    holiday: true,
                },
            },
            ..Default::default()
        };
        let selection = WorkTypeSelection {
            overtime: true,
            holiday: true,
            ..Default::default()
        };

        overtime.retain_selected_overlaps(&selection);

        assert_eq!(
            overtime.duplicate_policy,
            DuplicatePolicy::SplitByType {
                allow_overlap: OverlapAllowance {
                    early: false,
                    night: false,
                    holiday: true,
                }
            }
        );
    }

    #[test]
    fn test_night_window_reports_bad_bound() {
        let night = NightConfig {
            end: "6시".to_string(),
            ..Default::default()
        };
        match night.window() {
            Err(CriteriaError::InvalidTimeFormat { value }) => assert_eq!(value, "6시"),
            other => panic!("expected InvalidTimeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_section_config_is_tagged_by_category() {
        let section = SectionConfig::defaults_for(Category::Holiday);
        assert_eq!(section.category(), Category::Holiday);

        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["category"], "holiday");
        assert_eq!(json["basis"], "calendar");
        assert_eq!(json["minutes"]["max"], 240);
    }
}
