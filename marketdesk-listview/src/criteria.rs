//! Filter, sort and page criteria.
//!
//! Criteria are plain values: a screen builds a fresh set on every user
//! interaction and hands it to the engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ListError, ListResult};

/// The "no constraint" value of a categorical filter.
pub const ALL: &str = "all";

/// Value of a categorical (exact-match) filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    /// No constraint.
    #[default]
    All,
    /// The field must equal this value exactly.
    Only(String),
}

impl Choice {
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Choice> for String {
    fn from(value: Choice) -> Self {
        match value {
            Choice::All => ALL.to_string(),
            Choice::Only(v) => v,
        }
    }
}

/// Inclusive numeric bounds; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// True when neither bound is set.
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// The set of active constraints narrowing a list.
///
/// A record is kept only when every constraint holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free text matched case-insensitively against the schema's searchable
    /// fields. Empty means no constraint.
    #[serde(default)]
    pub search: String,
    /// Exact-match constraints keyed by field name.
    #[serde(default)]
    pub choices: BTreeMap<String, Choice>,
    /// Inclusive numeric bounds keyed by field name.
    #[serde(default)]
    pub ranges: BTreeMap<String, NumericRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_choice(mut self, field: &str, choice: impl Into<Choice>) -> Self {
        self.choices.insert(field.to_string(), choice.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, field: &str, range: NumericRange) -> Self {
        self.ranges.insert(field.to_string(), range);
        self
    }

    /// True when no constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.choices.values().all(Choice::is_all)
            && self.ranges.values().all(NumericRange::is_open)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// The active sort: one field and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    #[serde(alias = "order")]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: &str) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction.as_str())
    }
}

/// Parses `field`, `field:asc` or `field:desc`.
impl FromStr for SortKey {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.rsplit_once(':') {
            Some((field, "asc")) => (field, SortDirection::Ascending),
            Some((field, "desc")) => (field, SortDirection::Descending),
            Some((_, other)) => {
                return Err(ListError::InvalidSortKey(format!(
                    "unknown direction {other:?} (expected asc or desc)"
                )));
            }
            None => (s, SortDirection::Ascending),
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(ListError::InvalidSortKey("empty field name".to_string()));
        }

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// A 1-indexed page number and a page size.
///
/// Both are at least 1; the constructor enforces it so the engine never
/// has to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
}

impl PageWindow {
    pub fn new(page: usize, page_size: usize) -> ListResult<Self> {
        if page == 0 {
            return Err(ListError::ZeroPage);
        }
        if page_size == 0 {
            return Err(ListError::ZeroPageSize);
        }
        Ok(Self { page, page_size })
    }

    /// Page 1 at the given size.
    pub fn first(page_size: usize) -> ListResult<Self> {
        Self::new(1, page_size)
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first record on this page.
    pub const fn start(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// One past the index of the last record on this page.
    pub const fn end(&self) -> usize {
        self.start().saturating_add(self.page_size)
    }

    /// Same size, different page. Page 0 is clamped to 1.
    #[must_use]
    pub const fn with_page(self, page: usize) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            page_size: self.page_size,
        }
    }

    #[must_use]
    pub const fn first_page(self) -> Self {
        self.with_page(1)
    }
}

impl<'de> Deserialize<'de> for PageWindow {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            page: usize,
            #[serde(alias = "page_size")]
            page_size: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.page, raw.page_size).map_err(serde::de::Error::custom)
    }
}
