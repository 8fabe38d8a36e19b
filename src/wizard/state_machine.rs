//! The four-step criteria wizard.
//!
//! [`Wizard`] owns the evolving draft, gates forward transitions through
//! [`can_advance`], and hands the compiled record to a registry on commit.
//! Every transition returns its outcome explicitly; surfacing it to the
//! operator is left to the caller.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::WizardConfig;
use crate::error::{CriteriaError, CriteriaResult};
use crate::models::{
    Category, CommonExclusionConfig, CriteriaDraft, CriteriaId, CriteriaRecord, DayWindow,
    EarlyConfig, HolidayConfig, MinuteUnit, NightConfig, OvertimeConfig, RoundingMode,
};
use crate::registry::CriteriaRegistry;

use super::compiler::{CriteriaPreview, compile, preview};
use super::validation::{BlockReason, ConfirmReason, ValidationOutcome, can_advance};

/// A wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: name and description.
    BasicInfo,
    /// Step 2: unit, rounding and day window.
    Criteria,
    /// Step 3: work types and their sections.
    WorkTypes,
    /// Step 4: read-only preview.
    Preview,
}

impl WizardStep {
    /// Returns the 1-based step number.
    pub const fn number(&self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Criteria => 2,
            Self::WorkTypes => 3,
            Self::Preview => 4,
        }
    }

    /// The following step, capped at [`WizardStep::Preview`].
    pub const fn next(&self) -> Self {
        match self {
            Self::BasicInfo => Self::Criteria,
            Self::Criteria => Self::WorkTypes,
            Self::WorkTypes | Self::Preview => Self::Preview,
        }
    }

    /// The preceding step, floored at [`WizardStep::BasicInfo`].
    pub const fn prev(&self) -> Self {
        match self {
            Self::BasicInfo | Self::Criteria => Self::BasicInfo,
            Self::WorkTypes => Self::Criteria,
            Self::Preview => Self::WorkTypes,
        }
    }
}

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// On a step, accepting input.
    Editing(WizardStep),
    /// Suspended on step 3 until the operator decides.
    AwaitingConfirmation(ConfirmReason),
    /// The draft was compiled and registered.
    Committed(CriteriaId),
    /// The wizard was closed and the draft discarded.
    Cancelled,
}

impl fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editing(step) => write!(f, "on step {}", step.number()),
            Self::AwaitingConfirmation(_) => f.write_str("awaiting confirmation"),
            Self::Committed(_) => f.write_str("committed"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Outcome of a forward transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The wizard is now on this step.
    Moved(WizardStep),
    /// The transition was refused; the draft and step are unchanged.
    Blocked(BlockReason),
    /// The wizard is suspended until `confirm_rollover` or `cancel_confirm`.
    AwaitingConfirmation(ConfirmReason),
}

/// The criteria-definition wizard.
///
/// # Example
///
/// ```
/// use worktime_criteria::models::Classification;
/// use worktime_criteria::registry::{CriteriaRegistry, InMemoryRegistry};
/// use worktime_criteria::wizard::{Transition, Wizard, WizardStep};
///
/// let registry = InMemoryRegistry::new();
/// let mut wizard = Wizard::new();
///
/// wizard.set_name("오전 근무")?;
/// assert_eq!(wizard.next()?, Transition::Moved(WizardStep::Criteria));
/// assert_eq!(wizard.next()?, Transition::Moved(WizardStep::WorkTypes));
/// assert_eq!(wizard.next()?, Transition::Moved(WizardStep::Preview));
///
/// let record = wizard.commit(&registry)?;
/// assert_eq!(record.classification, Classification::Base);
/// assert_eq!(registry.get_by_id(&record.id)?, record);
/// # Ok::<(), worktime_criteria::error::CriteriaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Wizard {
    config: Arc<WizardConfig>,
    phase: WizardPhase,
    draft: CriteriaDraft,
}

impl Wizard {
    /// Creates a wizard on step 1 with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Arc::new(WizardConfig::default()))
    }

    /// Creates a wizard on step 1 with the given configuration.
    pub fn with_config(config: Arc<WizardConfig>) -> Self {
        let draft = CriteriaDraft::from_defaults(&config.draft);
        Self {
            config,
            phase: WizardPhase::Editing(WizardStep::BasicInfo),
            draft,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Returns the current step, if the wizard is open.
    ///
    /// A pending confirmation reports step 3.
    pub fn current_step(&self) -> Option<WizardStep> {
        match self.phase {
            WizardPhase::Editing(step) => Some(step),
            WizardPhase::AwaitingConfirmation(_) => Some(WizardStep::WorkTypes),
            WizardPhase::Committed(_) | WizardPhase::Cancelled => None,
        }
    }

    /// Returns the draft.
    pub fn draft(&self) -> &CriteriaDraft {
        &self.draft
    }

    /// Returns the configuration.
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Opens the wizard: step 1 with a fresh default draft.
    pub fn open(&mut self) {
        self.reset();
    }

    /// Returns to step 1 with a fresh default draft, from any phase.
    pub fn reset(&mut self) {
        self.draft = CriteriaDraft::from_defaults(&self.config.draft);
        self.phase = WizardPhase::Editing(WizardStep::BasicInfo);
        debug!("Wizard reset to step 1");
    }

    /// Closes the wizard, discarding the draft.
    pub fn close(&mut self) {
        self.draft = CriteriaDraft::from_defaults(&self.config.draft);
        self.phase = WizardPhase::Cancelled;
        debug!("Wizard closed, draft discarded");
    }

    /// Requests a move to the next step.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidTransition`] if the wizard is not on a
    /// step (a confirmation is pending, or it is committed or cancelled).
    pub fn next(&mut self) -> CriteriaResult<Transition> {
        let step = self.editing_step("advance")?;

        match can_advance(step, &self.draft) {
            ValidationOutcome::Passed => {
                let to = step.next();
                self.phase = WizardPhase::Editing(to);
                debug!(from = step.number(), to = to.number(), "Wizard advanced");
                Ok(Transition::Moved(to))
            }
            ValidationOutcome::Blocked(reason) => {
                warn!(step = step.number(), reason = %reason, "Wizard step blocked");
                Ok(Transition::Blocked(reason))
            }
            ValidationOutcome::NeedsConfirmation(reason) => {
                self.phase = WizardPhase::AwaitingConfirmation(reason);
                debug!(step = step.number(), reason = %reason, "Wizard awaiting confirmation");
                Ok(Transition::AwaitingConfirmation(reason))
            }
        }
    }

    /// Moves to the previous step without validation.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidTransition`] if the wizard is not on a step.
    pub fn prev(&mut self) -> CriteriaResult<WizardStep> {
        let step = self.editing_step("go back")?;
        let to = step.prev();
        self.phase = WizardPhase::Editing(to);
        debug!(from = step.number(), to = to.number(), "Wizard went back");
        Ok(to)
    }

    /// Accepts the pending rollover: marks the night window as crossing
    /// midnight and moves straight to the preview.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidTransition`] if no confirmation is pending.
    pub fn confirm_rollover(&mut self) -> CriteriaResult<WizardStep> {
        match self.phase {
            WizardPhase::AwaitingConfirmation(ConfirmReason::NightWindowRollover) => {
                if let Some(night) = self.draft.night_mut() {
                    night.crosses_midnight = true;
                }
                self.phase = WizardPhase::Editing(WizardStep::Preview);
                debug!("Night rollover accepted, wizard on step 4");
                Ok(WizardStep::Preview)
            }
            phase => Err(invalid_transition("confirm rollover", phase)),
        }
    }

    /// Declines the pending confirmation and stays on step 3.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidTransition`] if no confirmation is pending.
    pub fn cancel_confirm(&mut self) -> CriteriaResult<WizardStep> {
        match self.phase {
            WizardPhase::AwaitingConfirmation(_) => {
                self.phase = WizardPhase::Editing(WizardStep::WorkTypes);
                debug!("Confirmation declined, wizard stays on step 3");
                Ok(WizardStep::WorkTypes)
            }
            phase => Err(invalid_transition("cancel confirmation", phase)),
        }
    }

    /// Compiles the draft and appends the record to `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidTransition`] unless the wizard is on
    /// step 4, or the registry's error if the append fails. In both cases the
    /// wizard stays where it was.
    pub fn commit<R>(&mut self, registry: &R) -> CriteriaResult<CriteriaRecord>
    where
        R: CriteriaRegistry + ?Sized,
    {
        if self.phase != WizardPhase::Editing(WizardStep::Preview) {
            return Err(invalid_transition("commit", self.phase));
        }

        let record = compile(&self.draft, &self.config);
        registry.append(record.clone())?;
        self.phase = WizardPhase::Committed(record.id);

        info!(
            criteria_id = %record.id,
            title = %record.title,
            classification = %record.classification,
            "Criteria committed"
        );
        Ok(record)
    }

    /// Returns the step 4 preview for the current draft.
    pub fn preview(&self) -> CriteriaPreview {
        preview(&self.draft, &self.config)
    }

    /// Sets the criteria name.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3.
    pub fn set_name(&mut self, name: impl Into<String>) -> CriteriaResult<()> {
        self.ensure_editable()?;
        self.draft.name = name.into();
        Ok(())
    }

    /// Sets the description.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3.
    pub fn set_description(&mut self, description: impl Into<String>) -> CriteriaResult<()> {
        self.ensure_editable()?;
        self.draft.description = description.into();
        Ok(())
    }

    /// Sets the counting unit.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3.
    pub fn set_unit(&mut self, unit: MinuteUnit) -> CriteriaResult<()> {
        self.ensure_editable()?;
        self.draft.unit = unit;
        Ok(())
    }

    /// Sets the rounding mode.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3.
    pub fn set_rounding(&mut self, rounding: RoundingMode) -> CriteriaResult<()> {
        self.ensure_editable()?;
        self.draft.rounding = rounding;
        Ok(())
    }

    /// Sets the attendance day window. The text is stored as entered.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3.
    pub fn set_day_window(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> CriteriaResult<()> {
        self.ensure_editable()?;
        self.draft.day_window = DayWindow {
            start: start.into(),
            end: end.into(),
        };
        Ok(())
    }

    /// Sets the common exclusions.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3.
    pub fn set_exclusion(&mut self, exclusion: CommonExclusionConfig) -> CriteriaResult<()> {
        self.ensure_editable()?;
        self.draft.exclusion = exclusion;
        Ok(())
    }

    /// Enables or disables a category, adding or dropping its section.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3.
    pub fn toggle_category(&mut self, category: Category, enabled: bool) -> CriteriaResult<()> {
        self.ensure_editable()?;
        self.draft.set_category_enabled(category, enabled);
        debug!(category = %category, enabled, "Category toggled");
        Ok(())
    }

    /// Edits the early section.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3,
    /// or [`CriteriaError::CategoryDisabled`] if early work is not selected.
    pub fn edit_early(&mut self, edit: impl FnOnce(&mut EarlyConfig)) -> CriteriaResult<()> {
        self.ensure_editable()?;
        let early = self.draft.early_mut().ok_or(CriteriaError::CategoryDisabled {
            category: Category::Early,
        })?;
        edit(early);
        Ok(())
    }

    /// Edits the overtime section.
    ///
    /// Overlap flags for unselected categories are dropped after the edit.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3,
    /// or [`CriteriaError::CategoryDisabled`] if overtime is not selected.
    pub fn edit_overtime(&mut self, edit: impl FnOnce(&mut OvertimeConfig)) -> CriteriaResult<()> {
        self.ensure_editable()?;
        let overtime = self
            .draft
            .overtime_mut()
            .ok_or(CriteriaError::CategoryDisabled {
                category: Category::Overtime,
            })?;
        edit(overtime);
        self.draft.normalize_overlaps();
        Ok(())
    }

    /// Edits the night section.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3,
    /// or [`CriteriaError::CategoryDisabled`] if night work is not selected.
    pub fn edit_night(&mut self, edit: impl FnOnce(&mut NightConfig)) -> CriteriaResult<()> {
        self.ensure_editable()?;
        let night = self.draft.night_mut().ok_or(CriteriaError::CategoryDisabled {
            category: Category::Night,
        })?;
        edit(night);
        Ok(())
    }

    /// Edits the holiday section.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::DraftFrozen`] unless the wizard is on steps 1-3,
    /// or [`CriteriaError::CategoryDisabled`] if holiday work is not selected.
    pub fn edit_holiday(&mut self, edit: impl FnOnce(&mut HolidayConfig)) -> CriteriaResult<()> {
        self.ensure_editable()?;
        let holiday = self
            .draft
            .holiday_mut()
            .ok_or(CriteriaError::CategoryDisabled {
                category: Category::Holiday,
            })?;
        edit(holiday);
        Ok(())
    }

    fn editing_step(&self, action: &'static str) -> CriteriaResult<WizardStep> {
        match self.phase {
            WizardPhase::Editing(step) => Ok(step),
            phase => Err(invalid_transition(action, phase)),
        }
    }

    fn ensure_editable(&self) -> CriteriaResult<()> {
        match self.phase {
            WizardPhase::Editing(step) if step != WizardStep::Preview => Ok(()),
            phase => Err(CriteriaError::DraftFrozen {
                state: phase.to_string(),
            }),
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_transition(action: &'static str, phase: WizardPhase) -> CriteriaError {
    CriteriaError::InvalidTransition {
        action,
        state: phase.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CapMode, Classification, DuplicatePolicy, EarlyMode, HolidayBasis, OverlapAllowance, Tag,
    };
    use crate::registry::{CriteriaFilter, InMemoryRegistry};

    fn wizard_on_step_three(name: &str) -> Wizard {
        let mut wizard = Wizard::new();
        wizard.set_name(name).unwrap();
        assert_eq!(wizard.next().unwrap(), Transition::Moved(WizardStep::Criteria));
        assert_eq!(wizard.next().unwrap(), Transition::Moved(WizardStep::WorkTypes));
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = Wizard::new();
        assert_eq!(wizard.phase(), WizardPhase::Editing(WizardStep::BasicInfo));
        assert_eq!(wizard.draft(), &CriteriaDraft::default());
    }

    #[test]
    fn test_next_blocked_without_name() {
        let mut wizard = Wizard::new();
        wizard.set_name("  ").unwrap();

        let transition = wizard.next().unwrap();

        assert_eq!(transition, Transition::Blocked(BlockReason::NameRequired));
        assert_eq!(wizard.current_step(), Some(WizardStep::BasicInfo));
    }

    #[test]
    fn test_next_caps_at_preview() {
        let mut wizard = wizard_on_step_three("기준");
        assert_eq!(wizard.next().unwrap(), Transition::Moved(WizardStep::Preview));
        assert_eq!(wizard.next().unwrap(), Transition::Moved(WizardStep::Preview));
    }

    #[test]
    fn test_prev_floors_at_step_one() {
        let mut wizard = wizard_on_step_three("기준");
        assert_eq!(wizard.prev().unwrap(), WizardStep::Criteria);
        assert_eq!(wizard.prev().unwrap(), WizardStep::BasicInfo);
        assert_eq!(wizard.prev().unwrap(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_prev_skips_validation() {
        let mut wizard = wizard_on_step_three("기준");
        wizard.prev().unwrap();
        wizard.prev().unwrap();
        wizard.set_name("").unwrap();
        assert_eq!(wizard.prev().unwrap(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_toggle_off_then_on_resets_section() {
        let mut wizard = wizard_on_step_three("기준");
        wizard.toggle_category(Category::Early, true).unwrap();
        wizard
            .edit_early(|early| {
                early.mode = EarlyMode::FixedRange;
                early.fixed_start = "05:30".to_string();
                early.merge_into_base = true;
            })
            .unwrap();

        wizard.toggle_category(Category::Early, false).unwrap();
        wizard.toggle_category(Category::Early, true).unwrap();

        assert_eq!(wizard.draft().early(), Some(&EarlyConfig::default()));
        assert_eq!(wizard.current_step(), Some(WizardStep::WorkTypes));
    }

    #[test]
    fn test_edit_disabled_section_fails() {
        let mut wizard = wizard_on_step_three("기준");
        let result = wizard.edit_holiday(|holiday| holiday.basis = HolidayBasis::Custom);
        assert!(matches!(
            result,
            Err(CriteriaError::CategoryDisabled {
                category: Category::Holiday
            })
        ));
    }

    #[test]
    fn test_edit_overtime_drops_unselected_overlaps() {
        let mut wizard = wizard_on_step_three("기준");
        wizard.toggle_category(Category::Overtime, true).unwrap();
        wizard.toggle_category(Category::Night, true).unwrap();

        wizard
            .edit_overtime(|overtime| {
                overtime.duplicate_policy = DuplicatePolicy::SplitByType {
                    allow_overlap: OverlapAllowance {
                        early: true,
                        night: true,
                        holiday: true,
                    },
                };
            })
            .unwrap();

        assert_eq!(
            wizard.draft().overtime().unwrap().duplicate_policy,
            DuplicatePolicy::SplitByType {
                allow_overlap: OverlapAllowance {
                    early: false,
                    night: true,
                    holiday: false,
                }
            }
        );
    }

    #[test]
    fn test_night_rollover_confirmation_flow() {
        let mut wizard = wizard_on_step_three("야간조");
        wizard.toggle_category(Category::Night, true).unwrap();
        wizard
            .edit_night(|night| {
                night.start = "22:00".to_string();
                night.end = "06:00".to_string();
                night.crosses_midnight = false;
            })
            .unwrap();

        let transition = wizard.next().unwrap();
        assert_eq!(
            transition,
            Transition::AwaitingConfirmation(ConfirmReason::NightWindowRollover)
        );
        assert_eq!(wizard.current_step(), Some(WizardStep::WorkTypes));
        assert!(!wizard.draft().night().unwrap().crosses_midnight);

        assert_eq!(wizard.confirm_rollover().unwrap(), WizardStep::Preview);
        assert!(wizard.draft().night().unwrap().crosses_midnight);
        assert_eq!(wizard.phase(), WizardPhase::Editing(WizardStep::Preview));
    }

    #[test]
    fn test_cancel_confirm_keeps_draft_on_step_three() {
        let mut wizard = wizard_on_step_three("야간조");
        wizard.toggle_category(Category::Night, true).unwrap();
        wizard
            .edit_night(|night| night.crosses_midnight = false)
            .unwrap();
        wizard.next().unwrap();
        let draft_before = wizard.draft().clone();

        assert_eq!(wizard.cancel_confirm().unwrap(), WizardStep::WorkTypes);
        assert_eq!(wizard.draft(), &draft_before);
        assert_eq!(wizard.phase(), WizardPhase::Editing(WizardStep::WorkTypes));
    }

    #[test]
    fn test_pending_confirmation_blocks_other_actions() {
        let mut wizard = wizard_on_step_three("야간조");
        wizard.toggle_category(Category::Night, true).unwrap();
        wizard
            .edit_night(|night| night.crosses_midnight = false)
            .unwrap();
        wizard.next().unwrap();

        assert!(matches!(
            wizard.next(),
            Err(CriteriaError::InvalidTransition { action: "advance", .. })
        ));
        assert!(wizard.prev().is_err());
        assert!(matches!(
            wizard.set_name("다른 이름"),
            Err(CriteriaError::DraftFrozen { .. })
        ));
    }

    #[test]
    fn test_confirm_without_pending_fails() {
        let mut wizard = Wizard::new();
        assert!(wizard.confirm_rollover().is_err());
        assert!(wizard.cancel_confirm().is_err());
    }

    #[test]
    fn test_preview_step_freezes_draft() {
        let mut wizard = wizard_on_step_three("기준");
        wizard.next().unwrap();

        match wizard.toggle_category(Category::Holiday, true) {
            Err(CriteriaError::DraftFrozen { state }) => assert_eq!(state, "on step 4"),
            other => panic!("expected DraftFrozen, got {:?}", other),
        }
        assert!(wizard.set_description("late edit").is_err());
        assert_eq!(wizard.draft().selection().count(), 0);
    }

    #[test]
    fn test_commit_only_from_preview() {
        let registry = InMemoryRegistry::new();
        let mut wizard = wizard_on_step_three("기준");

        match wizard.commit(&registry) {
            Err(CriteriaError::InvalidTransition { action, state }) => {
                assert_eq!(action, "commit");
                assert_eq!(state, "on step 3");
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }
        assert!(registry.list(&CriteriaFilter::default()).is_empty());
    }

    #[test]
    fn test_commit_appends_exactly_one_record() {
        let registry = InMemoryRegistry::new();
        let mut wizard = wizard_on_step_three("휴일 연장 기준");
        wizard.prev().unwrap();
        wizard.next().unwrap();
        wizard.toggle_category(Category::Holiday, true).unwrap();
        wizard.toggle_category(Category::Overtime, true).unwrap();
        wizard
            .edit_overtime(|overtime| {
                overtime.duplicate_policy = DuplicatePolicy::CapOne {
                    cap_mode: CapMode::HighestWeightOnly,
                }
            })
            .unwrap();
        wizard.next().unwrap();

        let record = wizard.commit(&registry).unwrap();

        assert_eq!(record.classification, Classification::HolidayOvertime);
        assert_eq!(
            record.tags,
            vec![
                Tag::base(),
                Tag::for_category(Category::Overtime),
                Tag::for_category(Category::Holiday)
            ]
        );
        assert_eq!(wizard.phase(), WizardPhase::Committed(record.id));
        assert_eq!(registry.list(&CriteriaFilter::default()), vec![record]);

        assert!(wizard.commit(&registry).is_err());
        assert_eq!(registry.list(&CriteriaFilter::default()).len(), 1);
    }

    #[test]
    fn test_close_discards_draft() {
        let mut wizard = wizard_on_step_three("기준");
        wizard.toggle_category(Category::Night, true).unwrap();

        wizard.close();

        assert_eq!(wizard.phase(), WizardPhase::Cancelled);
        assert_eq!(wizard.current_step(), None);
        assert_eq!(wizard.draft(), &CriteriaDraft::default());
        assert!(wizard.next().is_err());
    }

    #[test]
    fn test_reset_from_every_phase_restores_defaults() {
        let registry = InMemoryRegistry::new();

        let mut on_step = wizard_on_step_three("기준");
        on_step.set_unit(MinuteUnit::Thirty).unwrap();
        on_step.set_rounding(RoundingMode::RoundUp).unwrap();
        on_step.set_day_window("06:00", "05:59").unwrap();
        on_step
            .set_exclusion(CommonExclusionConfig {
                enabled: false,
                exclude_outside_time: false,
                exclude_mid_exit_time: false,
            })
            .unwrap();

        let mut pending = wizard_on_step_three("야간조");
        pending.toggle_category(Category::Night, true).unwrap();
        pending
            .edit_night(|night| night.crosses_midnight = false)
            .unwrap();
        pending.next().unwrap();

        let mut committed = wizard_on_step_three("기준");
        committed.next().unwrap();
        committed.commit(&registry).unwrap();

        let mut cancelled = wizard_on_step_three("기준");
        cancelled.close();

        for mut wizard in [on_step, pending, committed, cancelled] {
            wizard.reset();
            assert_eq!(wizard.phase(), WizardPhase::Editing(WizardStep::BasicInfo));

            let draft = wizard.draft();
            assert_eq!(draft.name, "");
            assert_eq!(draft.description, "");
            assert_eq!(draft.unit, MinuteUnit::One);
            assert_eq!(draft.rounding, RoundingMode::Truncate);
            assert_eq!(draft.day_window.start, "00:00");
            assert_eq!(draft.day_window.end, "23:59");
            assert_eq!(draft.selection().count(), 0);
            assert_eq!(draft.sections().count(), 0);
            assert!(draft.exclusion.enabled);
            assert!(draft.exclusion.exclude_outside_time);
            assert!(draft.exclusion.exclude_mid_exit_time);
        }
    }

    #[test]
    fn test_open_uses_configured_defaults() {
        let mut config = WizardConfig::default();
        config.draft.unit = MinuteUnit::Ten;
        let mut wizard = Wizard::with_config(Arc::new(config));
        wizard.set_unit(MinuteUnit::Five).unwrap();

        wizard.open();

        assert_eq!(wizard.draft().unit, MinuteUnit::Ten);
    }

    #[test]
    fn test_preview_is_side_effect_free() {
        let mut wizard = wizard_on_step_three("미리보기");
        wizard.toggle_category(Category::Night, true).unwrap();
        let before = wizard.draft().clone();

        let preview = wizard.preview();

        assert_eq!(preview.title, "미리보기");
        assert_eq!(preview.classification, Classification::Night);
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.current_step(), Some(WizardStep::WorkTypes));
    }
}
