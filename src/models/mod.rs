//! Core data models for the work-time criteria engine.
//!
//! This module contains the value types, the wizard draft, and the committed
//! record produced from it.

mod category;
mod draft;
mod record;
mod section;
mod time_value;

pub use category::{Category, WorkTypeSelection};
pub use draft::{CommonExclusionConfig, CriteriaDraft, DayWindow, RoundingMode};
pub use record::{Classification, CriteriaId, CriteriaRecord, Tag, Tone};
pub use section::{
    CapMode, DuplicatePolicy, EarlyConfig, EarlyMode, HolidayBasis, HolidayConfig, MinuteLimit,
    MinuteRule, MinuteUnit, NightConfig, OverlapAllowance, OvertimeConfig, OvertimeMode,
    SectionConfig,
};
pub use time_value::{MINUTES_PER_DAY, TimeValue};
