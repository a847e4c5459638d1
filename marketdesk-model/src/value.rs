//! Field values as seen by the list engine.

use marketdesk_types::Timestamp;
use std::borrow::Cow;
use std::cmp::Ordering;

/// A single field of a record, borrowed where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Bool(bool),
    Timestamp(Timestamp),
    /// A nested list, represented by its length.
    List(usize),
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value.
    pub fn text(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }

    /// Owned text value, for fields computed on the fly.
    pub fn owned(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the value. Text holding a number (`"49.99"`) counts.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::List(len) => Some(*len as f64),
            _ => None,
        }
    }

    /// Temporal view of the value. Text is parsed with [`Timestamp::parse`].
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            Self::Text(s) => Timestamp::parse(s).ok(),
            _ => None,
        }
    }

    /// Exact match against a filter value, compared in string form.
    ///
    /// Numbers use their shortest display form, so `3.0` matches `"3"`.
    pub fn matches_exact(&self, expected: &str) -> bool {
        match self {
            Self::Text(s) => s == expected,
            Self::Number(n) => n.to_string() == expected,
            Self::Bool(b) => (if *b { "true" } else { "false" }) == expected,
            Self::Timestamp(ts) => ts.to_string() == expected,
            Self::List(_) => false,
        }
    }

    /// Case-insensitive substring test. `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            Self::Text(s) => s.to_lowercase().contains(needle),
            _ => false,
        }
    }

    /// Three-way comparison by natural order.
    ///
    /// Text compares lexicographically, numbers numerically (total order,
    /// so NaN never makes the comparison inconsistent), timestamps
    /// chronologically. Values of different kinds order by kind.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Timestamp(_) => 2,
            Self::Text(_) => 3,
            Self::List(_) => 4,
        }
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Timestamp> for FieldValue<'_> {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::text(value)
    }
}
