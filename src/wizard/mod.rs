//! The criteria-definition wizard.
//!
//! This module contains the step state machine, the validation that gates
//! each forward transition, and the compiler that turns a finished draft
//! into a criteria record.

mod compiler;
mod state_machine;
mod validation;

pub use compiler::{CriteriaPreview, PreviewRow, build_tags, classify, compile, preview};
pub use state_machine::{Transition, Wizard, WizardPhase, WizardStep};
pub use validation::{BlockReason, ConfirmReason, ValidationOutcome, can_advance};
