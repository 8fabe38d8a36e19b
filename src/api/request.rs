//! Request types for the criteria API.
//!
//! A [`CriteriaRequest`] carries a whole draft at once. The handlers replay
//! it through the wizard step by step, so the same gates apply as in an
//! interactive session.

use serde::{Deserialize, Serialize};

use crate::error::CriteriaResult;
use crate::models::{
    Category, CommonExclusionConfig, DayWindow, EarlyConfig, HolidayConfig, MinuteUnit,
    NightConfig, OvertimeConfig, RoundingMode,
};
use crate::wizard::Wizard;

/// Request body for `POST /criteria` and `POST /criteria/preview`.
///
/// Omitted step 2 settings keep the configured draft defaults. A category is
/// selected exactly when its section is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaRequest {
    /// Criteria name (step 1).
    pub name: String,
    /// Optional description (step 1).
    pub description: String,
    /// Counting unit for base work (step 2).
    pub unit: Option<MinuteUnit>,
    /// Rounding mode (step 2).
    pub rounding: Option<RoundingMode>,
    /// Attendance day window (step 2).
    pub day_window: Option<DayWindow>,
    /// Common exclusions (step 3).
    pub exclusion: Option<CommonExclusionConfig>,
    /// Early work section (step 3).
    pub early: Option<EarlyConfig>,
    /// Overtime section (step 3).
    pub overtime: Option<OvertimeConfig>,
    /// Night work section (step 3).
    pub night: Option<NightConfig>,
    /// Holiday work section (step 3).
    pub holiday: Option<HolidayConfig>,
    /// Accept a next-day rollover of the night window if one is proposed.
    pub accept_rollover: bool,
}

impl CriteriaRequest {
    /// Applies the step 1 fields.
    pub(crate) fn apply_basic_info(&self, wizard: &mut Wizard) -> CriteriaResult<()> {
        wizard.set_name(self.name.as_str())?;
        wizard.set_description(self.description.as_str())
    }

    /// Applies the step 2 fields that were supplied.
    pub(crate) fn apply_criteria(&self, wizard: &mut Wizard) -> CriteriaResult<()> {
        if let Some(unit) = self.unit {
            wizard.set_unit(unit)?;
        }
        if let Some(rounding) = self.rounding {
            wizard.set_rounding(rounding)?;
        }
        if let Some(window) = &self.day_window {
            wizard.set_day_window(window.start.as_str(), window.end.as_str())?;
        }
        Ok(())
    }

    /// Applies the step 3 selection and sections.
    ///
    /// Every category is toggled before any section is written, so overtime
    /// overlap flags are checked against the final selection.
    pub(crate) fn apply_work_types(&self, wizard: &mut Wizard) -> CriteriaResult<()> {
        if let Some(exclusion) = self.exclusion {
            wizard.set_exclusion(exclusion)?;
        }

        for category in Category::ALL {
            wizard.toggle_category(category, self.selects(category))?;
        }

        if let Some(early) = &self.early {
            wizard.edit_early(|config| *config = early.clone())?;
        }
        if let Some(overtime) = &self.overtime {
            wizard.edit_overtime(|config| *config = overtime.clone())?;
        }
        if let Some(night) = &self.night {
            wizard.edit_night(|config| *config = night.clone())?;
        }
        if let Some(holiday) = &self.holiday {
            wizard.edit_holiday(|config| *config = holiday.clone())?;
        }
        Ok(())
    }

    fn selects(&self, category: Category) -> bool {
        match category {
            Category::Early => self.early.is_some(),
            Category::Overtime => self.overtime.is_some(),
            Category::Night => self.night.is_some(),
            Category::Holiday => self.holiday.is_some(),
        }
    }
}
