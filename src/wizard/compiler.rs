//! Compilation of a validated draft into a criteria record.
//!
//! [`compile`] and [`preview`] share the same derivation of title, subtitle,
//! tags and classification; only `compile` assigns an id and timestamp.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::WizardConfig;
use crate::models::{
    CapMode, Category, Classification, CommonExclusionConfig, CriteriaDraft, CriteriaId,
    CriteriaRecord, DayWindow, DuplicatePolicy, EarlyMode, HolidayBasis, MinuteUnit,
    OvertimeMode, RoundingMode, Tag, WorkTypeSelection,
};

/// The hypothetical record for a draft, plus summary rows for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaPreview {
    /// Title the record would get.
    pub title: String,
    /// Subtitle the record would get.
    pub subtitle: String,
    /// Description as entered, trimmed; empty when none was given.
    pub description: String,
    /// Counting unit for base work.
    pub unit: MinuteUnit,
    /// Rounding applied to counted minutes.
    pub rounding: RoundingMode,
    /// Attendance day window.
    pub day_window: DayWindow,
    /// Tags the record would get.
    pub tags: Vec<Tag>,
    /// Classification the record would get.
    pub classification: Classification,
    /// One row per work type, base first.
    pub rows: Vec<PreviewRow>,
    /// Duplicate handling summary, present when overtime is selected.
    pub duplicate_summary: Option<String>,
    /// Common exclusion summary.
    pub exclusion_summary: String,
}

/// A work-type row of the preview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    /// Work-type label.
    pub work_type: String,
    /// Whether the work type is in use.
    pub enabled: bool,
    /// Settings summary, empty when not in use.
    pub note: String,
}

/// Compiles a validated draft into a new, active record.
///
/// # Example
///
/// ```
/// use worktime_criteria::config::WizardConfig;
/// use worktime_criteria::models::{Classification, CriteriaDraft};
/// use worktime_criteria::wizard::compile;
///
/// let mut draft = CriteriaDraft::default();
/// draft.name = "  오전 근무 ".to_string();
///
/// let record = compile(&draft, &WizardConfig::default());
/// assert_eq!(record.title, "오전 근무");
/// assert_eq!(record.subtitle, "근무 시간 계산 기준");
/// assert_eq!(record.classification, Classification::Base);
/// assert!(record.active);
/// ```
pub fn compile(draft: &CriteriaDraft, config: &WizardConfig) -> CriteriaRecord {
    CriteriaRecord {
        id: CriteriaId::new(),
        title: title(draft),
        subtitle: subtitle(draft, config),
        tags: build_tags(draft.selection()),
        active: true,
        classification: classify(draft.selection()),
        created_at: Utc::now(),
    }
}

/// Builds the step 4 preview without side effects.
pub fn preview(draft: &CriteriaDraft, config: &WizardConfig) -> CriteriaPreview {
    CriteriaPreview {
        title: title(draft),
        subtitle: subtitle(draft, config),
        description: draft.description.trim().to_string(),
        unit: draft.unit,
        rounding: draft.rounding,
        day_window: draft.day_window.clone(),
        tags: build_tags(draft.selection()),
        classification: classify(draft.selection()),
        rows: preview_rows(draft),
        duplicate_summary: draft.overtime().map(|overtime| {
            let summary = match overtime.duplicate_policy {
                DuplicatePolicy::SplitByType { .. } => "근무 유형별 분리 인정",
                DuplicatePolicy::CapOne {
                    cap_mode: CapMode::HighestWeightOnly,
                } => "최대 1개만 인정 (가장 높은 가중치)",
                DuplicatePolicy::CapOne {
                    cap_mode: CapMode::StackAll,
                } => "최대 1개만 인정 (겹친 가중치 모두)",
            };
            summary.to_string()
        }),
        exclusion_summary: exclusion_summary(&draft.exclusion),
    }
}

/// Builds the tag list: base first, then enabled categories in canonical order.
pub fn build_tags(selection: &WorkTypeSelection) -> Vec<Tag> {
    std::iter::once(Tag::base())
        .chain(selection.enabled().map(Tag::for_category))
        .collect()
}

/// Derives the classification by priority.
///
/// Early and overtime on their own do not change the classification.
pub fn classify(selection: &WorkTypeSelection) -> Classification {
    if selection.holiday && selection.overtime {
        Classification::HolidayOvertime
    } else if selection.holiday {
        Classification::Holiday
    } else if selection.night {
        Classification::Night
    } else {
        Classification::Base
    }
}

fn title(draft: &CriteriaDraft) -> String {
    draft.name.trim().to_string()
}

fn subtitle(draft: &CriteriaDraft, config: &WizardConfig) -> String {
    let description = draft.description.trim();
    if description.is_empty() {
        config.fallback_subtitle.clone()
    } else {
        description.to_string()
    }
}

fn preview_rows(draft: &CriteriaDraft) -> Vec<PreviewRow> {
    let mut rows = vec![PreviewRow {
        work_type: "기본근무".to_string(),
        enabled: true,
        note: "기본 근무".to_string(),
    }];

    for category in Category::ALL {
        let work_type = match category {
            Category::Early => "조기근무",
            Category::Overtime => "연장근무",
            Category::Night => "야간근무",
            Category::Holiday => "휴일근무",
        };
        let enabled = draft.is_enabled(category);
        rows.push(PreviewRow {
            work_type: work_type.to_string(),
            enabled,
            note: if enabled {
                category_note(draft, category)
            } else {
                String::new()
            },
        });
    }

    rows
}

fn category_note(draft: &CriteriaDraft, category: Category) -> String {
    let note = match category {
        Category::Early => draft.early().map(|early| match early.mode {
            EarlyMode::BeforeBase => "기본근무 시작 이전".to_string(),
            EarlyMode::FixedRange => {
                format!("특정 구간 {}~{}", early.fixed_start, early.fixed_end)
            }
        }),
        Category::Overtime => draft.overtime().map(|overtime| match overtime.mode {
            OvertimeMode::OverBase => "기본근무 초과".to_string(),
            OvertimeMode::FixedOver => format!("특정시간 초과 {}", overtime.fixed_over_threshold),
        }),
        Category::Night => draft.night().map(|night| {
            let rollover = if night.crosses_midnight { " (+1일)" } else { "" };
            format!("{}~{}{}", night.start, night.end, rollover)
        }),
        Category::Holiday => draft.holiday().map(|holiday| match holiday.basis {
            HolidayBasis::Calendar => "공휴일 캘린더 기준".to_string(),
            HolidayBasis::Custom => "사용자 지정".to_string(),
        }),
    };
    note.unwrap_or_default()
}

fn exclusion_summary(exclusion: &CommonExclusionConfig) -> String {
    if !exclusion.enabled {
        return "미사용".to_string();
    }

    let parts: Vec<&str> = [
        exclusion.excludes_outside_time().then_some("외출 시간"),
        exclusion.excludes_mid_exit_time().then_some("중간 이탈 시간"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}
