//! The list pipeline: filter, then sort, then page.
//!
//! Every stage is a pure function of its inputs. Stages borrow the caller's
//! records and return new vectors of references; the input slice is never
//! reordered or mutated.

use marketdesk_model::{FieldType, FieldValue, ListRecord, RecordSchema, TypedRecord};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::criteria::{Choice, FilterCriteria, PageWindow, SortDirection, SortKey};

/// Everything needed to compute one visible page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filter: FilterCriteria,
    pub sort: SortKey,
    pub window: PageWindow,
}

/// One page of a list plus what the pagination controls need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Records left after filtering, across all pages.
    pub total: usize,
    /// Never less than 1, even for an empty result.
    pub total_pages: usize,
    pub window: PageWindow,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.window.page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.window.page() < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListPage<U> {
        ListPage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            total_pages: self.total_pages,
            window: self.window,
        }
    }
}

impl<T: Clone> ListPage<&T> {
    /// Detaches the page from the borrowed record collection.
    pub fn cloned(self) -> ListPage<T> {
        self.map(Clone::clone)
    }
}

/// Returns the records inside `window`, in order.
///
/// A window starting past the end yields an empty vector.
pub fn paginate<T: Clone>(records: &[T], window: PageWindow) -> Vec<T> {
    let start = window.start();
    if start >= records.len() {
        return Vec::new();
    }
    let end = window.end().min(records.len());
    records[start..end].to_vec()
}

/// Number of pages needed to show `total` records, at least 1.
///
/// `page_size` must be at least 1; [`PageWindow`] guarantees it.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Filter/sort/page engine bound to one record schema.
///
/// The schema decides which fields free-text search reads and which fields
/// sort chronologically.
#[derive(Debug, Clone)]
pub struct ListView {
    schema: RecordSchema,
}

impl ListView {
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    /// Engine for a typed entity.
    pub fn of<R: TypedRecord>() -> Self {
        Self::new(R::schema())
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Keeps the records satisfying every constraint in `criteria`,
    /// preserving their relative order.
    pub fn filter_records<'a, R: ListRecord>(
        &self,
        records: &'a [R],
        criteria: &FilterCriteria,
    ) -> Vec<&'a R> {
        let needle = criteria.search.to_lowercase();
        let kept: Vec<&R> = records
            .iter()
            .filter(|record| self.matches(*record, criteria, &needle))
            .collect();

        debug!(
            "Filtered {} {} records down to {}",
            records.len(),
            self.schema.entity_type,
            kept.len()
        );
        kept
    }

    fn matches<R: ListRecord>(&self, record: &R, criteria: &FilterCriteria, needle: &str) -> bool {
        if !needle.is_empty()
            && !self
                .schema
                .searchable_fields()
                .filter_map(|name| record.field(name))
                .any(|value| value.contains_lowercase(needle))
        {
            return false;
        }

        for (field, choice) in &criteria.choices {
            if let Choice::Only(expected) = choice {
                match record.field(field) {
                    Some(value) if value.matches_exact(expected) => {}
                    _ => return false,
                }
            }
        }

        for (field, range) in &criteria.ranges {
            if range.is_open() {
                continue;
            }
            match record.field(field).and_then(|v| v.as_number()) {
                Some(n) if range.contains(n) => {}
                _ => return false,
            }
        }

        true
    }

    /// Orders records by `key` with a stable sort.
    ///
    /// Records whose key is missing, or unparsable for a date-time field,
    /// go last in either direction.
    pub fn sort_records<'a, R: ListRecord>(&self, records: &[&'a R], key: &SortKey) -> Vec<&'a R> {
        let field_type = self.schema.field_type(&key.field);
        let mut keyed: Vec<(Option<FieldValue<'a>>, &'a R)> = records
            .iter()
            .map(|record| (sort_value(*record, &key.field, field_type), *record))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => {
                let ord = a.natural_cmp(b);
                match key.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        debug!("Sorted {} {} records by {}", keyed.len(), self.schema.entity_type, key);
        keyed.into_iter().map(|(_, record)| record).collect()
    }

    /// Runs filter, sort and page in that order.
    pub fn run<'a, R: ListRecord>(&self, records: &'a [R], query: &ListQuery) -> ListPage<&'a R> {
        let filtered = self.filter_records(records, &query.filter);
        let sorted = self.sort_records(&filtered, &query.sort);
        let total = sorted.len();

        ListPage {
            items: paginate(&sorted, query.window),
            total,
            total_pages: total_pages(total, query.window.page_size()),
            window: query.window,
        }
    }
}

/// Extracts a field normalised to what the schema says it holds, so text
/// dates compare chronologically and numeric strings compare numerically.
fn sort_value<'a, R: ListRecord>(
    record: &'a R,
    field: &str,
    field_type: Option<FieldType>,
) -> Option<FieldValue<'a>> {
    let value = record.field(field)?;
    match field_type {
        Some(FieldType::DateTime) => value.as_timestamp().map(FieldValue::Timestamp),
        Some(FieldType::Number) => match value {
            FieldValue::Number(_) => Some(value),
            other => other.as_number().map(FieldValue::Number),
        },
        _ => Some(value),
    }
}
