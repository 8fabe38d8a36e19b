//! Step gating for the criteria wizard.
//!
//! Validation never fails with an error: a step either passes, is blocked with
//! a user-correctable reason, or needs an explicit decision from the operator.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CriteriaDraft, TimeValue};

use super::WizardStep;

/// Why a forward transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BlockReason {
    /// The criteria name is empty or whitespace.
    NameRequired,
    /// A night window bound is not a valid `HH:MM` value.
    InvalidNightTime {
        /// The offending text.
        value: String,
    },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => f.write_str("name required"),
            Self::InvalidNightTime { value } => {
                write!(f, "night window time '{}' must be HH:MM", value)
            }
        }
    }
}

/// Why a forward transition is waiting on the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmReason {
    /// The night window ends before it starts and does not cross midnight.
    NightWindowRollover,
}

impl fmt::Display for ConfirmReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NightWindowRollover => {
                f.write_str("end time precedes start time — apply next-day rollover?")
            }
        }
    }
}

/// Result of checking whether a step may be left forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The step may be left.
    Passed,
    /// The step may not be left until the draft is corrected.
    Blocked(BlockReason),
    /// The step may be left only after the operator decides.
    NeedsConfirmation(ConfirmReason),
}

impl ValidationOutcome {
    /// Returns true if the outcome allows the transition.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Checks whether the wizard may advance from `step` with `draft`.
///
/// # Example
///
/// ```
/// use worktime_criteria::models::CriteriaDraft;
/// use worktime_criteria::wizard::{BlockReason, ValidationOutcome, WizardStep, can_advance};
///
/// let mut draft = CriteriaDraft::default();
/// assert_eq!(
///     can_advance(WizardStep::BasicInfo, &draft),
///     ValidationOutcome::Blocked(BlockReason::NameRequired)
/// );
///
/// draft.name = "오전 근무".to_string();
/// assert!(can_advance(WizardStep::BasicInfo, &draft).is_passed());
/// ```
pub fn can_advance(step: WizardStep, draft: &CriteriaDraft) -> ValidationOutcome {
    match step {
        WizardStep::BasicInfo => validate_basic_info(draft),
        WizardStep::Criteria => ValidationOutcome::Passed,
        WizardStep::WorkTypes => validate_work_types(draft),
        WizardStep::Preview => ValidationOutcome::Passed,
    }
}

fn validate_basic_info(draft: &CriteriaDraft) -> ValidationOutcome {
    if draft.name.trim().is_empty() {
        ValidationOutcome::Blocked(BlockReason::NameRequired)
    } else {
        ValidationOutcome::Passed
    }
}

/// Only the night window is cross-checked; other sections are accepted as-is.
fn validate_work_types(draft: &CriteriaDraft) -> ValidationOutcome {
    let Some(night) = draft.night() else {
        return ValidationOutcome::Passed;
    };

    let parse = |text: &str| {
        TimeValue::parse(text).map_err(|_| BlockReason::InvalidNightTime {
            value: text.to_string(),
        })
    };
    let (start, end) = match (parse(&night.start), parse(&night.end)) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(reason), _) | (_, Err(reason)) => return ValidationOutcome::Blocked(reason),
    };

    let ordering = TimeValue::compare_with_rollover(start, end, night.crosses_midnight);
    if !night.crosses_midnight && ordering == Ordering::Greater {
        ValidationOutcome::NeedsConfirmation(ConfirmReason::NightWindowRollover)
    } else {
        ValidationOutcome::Passed
    }
}
