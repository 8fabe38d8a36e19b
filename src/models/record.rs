//! Committed criteria records.
//!
//! A [`CriteriaRecord`] is produced once by the compiler from a validated
//! draft and then owned by the registry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CriteriaError;

use super::category::Category;

/// Unique identifier of a criteria record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaId(Uuid);

impl CriteriaId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CriteriaId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CriteriaId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CriteriaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CriteriaId {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CriteriaError::CriteriaNotFound { id: s.to_string() })
    }
}

/// Display colour of a tag chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Neutral, used for base work.
    Slate,
    /// Early work.
    Green,
    /// Overtime work.
    Orange,
    /// Night work.
    Blue,
    /// Holiday work.
    Purple,
}

/// A display tag attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Chip label.
    pub label: String,
    /// Chip colour.
    pub tone: Tone,
}

impl Tag {
    /// The base-work tag carried by every record.
    pub fn base() -> Self {
        Self {
            label: "기본".to_string(),
            tone: Tone::Slate,
        }
    }

    /// The tag for an optional category.
    pub fn for_category(category: Category) -> Self {
        let (label, tone) = match category {
            Category::Early => ("조기", Tone::Green),
            Category::Overtime => ("연장", Tone::Orange),
            Category::Night => ("야간", Tone::Blue),
            Category::Holiday => ("휴일", Tone::Purple),
        };
        Self {
            label: label.to_string(),
            tone,
        }
    }
}

/// Coarse classification used to filter criteria lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Base work only, or early/overtime without night or holiday.
    #[serde(rename = "base")]
    Base,
    /// Night work without holiday work.
    #[serde(rename = "night")]
    Night,
    /// Holiday work without overtime.
    #[serde(rename = "holiday")]
    Holiday,
    /// Holiday work combined with overtime.
    ///
    /// Also accepted as `holiday overtime`, the form an unescaped `+` takes
    /// after query-string decoding.
    #[serde(rename = "holiday+overtime", alias = "holiday overtime")]
    HolidayOvertime,
}

impl Classification {
    /// Returns the string representation of the classification.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Night => "night",
            Self::Holiday => "holiday",
            Self::HolidayOvertime => "holiday+overtime",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Self::Base),
            "night" => Ok(Self::Night),
            "holiday" => Ok(Self::Holiday),
            "holiday+overtime" | "holiday overtime" => Ok(Self::HolidayOvertime),
            _ => Err(CriteriaError::InvalidOption {
                option: "classification",
                value: s.to_string(),
            }),
        }
    }
}

/// A committed work-time criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaRecord {
    /// Unique identifier.
    pub id: CriteriaId,
    /// Display title.
    pub title: String,
    /// Display subtitle.
    pub subtitle: String,
    /// Ordered display tags, base first.
    pub tags: Vec<Tag>,
    /// Whether the criteria is in use.
    pub active: bool,
    /// Classification used for filtering.
    pub classification: Classification,
    /// When the record was compiled.
    pub created_at: DateTime<Utc>,
}
