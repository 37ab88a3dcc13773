//! Record views.
//!
//! Everything here is a pure function of a record collection and the active
//! filter, recomputed on every change rather than cached.

use std::{borrow::Borrow, cmp::Reverse};

use rustc_hash::FxHashSet;

use crate::domain::records::models::{Category, MarineRecord};

/// Category selector value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(Category::from(value))
        }
    }
}

/// Free-text query plus category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub query: String,

    /// Raw selector value, [`ALL_CATEGORIES`] or a stored category.
    pub category: String,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::new("", ALL_CATEGORIES)
    }
}

impl RecordFilter {
    #[must_use]
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Whether the filter can exclude anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != ALL_CATEGORIES
    }

    #[must_use]
    pub fn matches(&self, record: &MarineRecord) -> bool {
        matches_query(record, &self.query) && matches_category(record, &self.category)
    }
}

/// Case-insensitive substring match on species, location and observer name.
#[must_use]
pub fn matches_query(record: &MarineRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    [&record.species, &record.location, &record.observer_name]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Whether `record` passes the category selector, where [`ALL_CATEGORIES`]
/// passes everything and any other value must equal the stored category.
#[must_use]
pub fn matches_category(record: &MarineRecord, selector: &str) -> bool {
    CategoryFilter::from(selector).matches(&record.category)
}

/// Sort newest observation first.
pub fn sort_by_observation<R: Borrow<MarineRecord>>(records: &mut [R]) {
    records.sort_by_key(|record| Reverse(record.borrow().observed_at()));
}

/// Put a freshly created record at the front of a local collection.
pub fn insert_created(records: &mut Vec<MarineRecord>, created: MarineRecord) {
    records.insert(0, created);
}

/// Aggregate counts over a whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub total: usize,
    pub categories: usize,
    pub observers: usize,
}

impl RecordStats {
    #[must_use]
    pub fn from_records(records: &[MarineRecord]) -> Self {
        let categories: FxHashSet<&Category> = records.iter().map(|r| &r.category).collect();
        let observers: FxHashSet<&str> = records.iter().map(|r| r.observer_name.as_str()).collect();

        Self {
            total: records.len(),
            categories: categories.len(),
            observers: observers.len(),
        }
    }
}

/// Why a view has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyView {
    /// The collection itself is empty.
    NoRecords,

    /// Records exist but the active filter excluded all of them.
    NoMatches,
}

/// Sorted, filtered records ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsView<'a> {
    pub records: Vec<&'a MarineRecord>,
    pub stats: RecordStats,
}

impl<'a> RecordsView<'a> {
    /// Derive the visible records from the full collection.
    ///
    /// Statistics always describe the full collection, not the filtered view.
    #[must_use]
    pub fn derive(records: &'a [MarineRecord], filter: &RecordFilter) -> Self {
        let mut visible: Vec<&MarineRecord> = records
            .iter()
            .filter(|record| filter.matches(record))
            .collect();

        sort_by_observation(visible.as_mut_slice());

        Self {
            records: visible,
            stats: RecordStats::from_records(records),
        }
    }

    #[must_use]
    pub fn empty_reason(&self) -> Option<EmptyView> {
        if !self.records.is_empty() {
            None
        } else if self.stats.total == 0 {
            Some(EmptyView::NoRecords)
        } else {
            Some(EmptyView::NoMatches)
        }
    }
}
