//! The filter chain: successive narrowing of an in-memory record set.
//!
//! `TicketFilter` owns the unfiltered rows for its whole lifetime and keeps
//! the working set in a separate slot that starts out *unset*. The
//! distinction between "no filter has run" and "a filter ran and kept
//! nothing" is the one invariant this module exists to protect: once any
//! stage has executed, every later stage narrows the stage before it, even
//! when that stage kept zero records. An empty working set must never fall
//! back to the original rows.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::SiftError;
use crate::record::{COL_CREATED, COL_ENGINEERS, COL_STATUS, Record};

/// Format of filter boundary dates, e.g. `2024-04-12`.
pub const BOUNDARY_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of the `created` column, e.g. `April 12, 2024 2:01 PM`.
/// chrono accepts unpadded day and hour here when parsing.
pub const CREATED_FORMAT: &str = "%B %d, %Y %I:%M %p";

/// A fluent chain of narrowing filters over a ticket record set.
///
/// Each filter consumes the chain and returns it, so stages compose with
/// `?` in a single expression:
///
/// ```
/// use ticket_sift::{Record, TicketFilter};
///
/// let rows = vec![
///     Record::from_pairs([
///         ("ID", "301"),
///         ("Engineers", "Jimmie Dean, Duke Ellington"),
///         ("Status", "Complete"),
///         ("created", "April 12, 2024 2:01 PM"),
///     ]),
///     Record::from_pairs([
///         ("ID", "302"),
///         ("Engineers", "Carol D"),
///         ("Status", "In Progress"),
///         ("created", "March 10, 2025 9:00 AM"),
///     ]),
/// ];
///
/// let kept = TicketFilter::new(rows)
///     .assignee("Duke")?
///     .status("complete")?
///     .into_results();
///
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].get("ID"), Some("301"));
/// # Ok::<(), ticket_sift::SiftError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TicketFilter {
    rows: Vec<Record>,
    /// `None` until the first filter runs; `Some` — possibly empty —
    /// afterwards. Never reset to `None`.
    narrowed: Option<Vec<Record>>,
}

impl TicketFilter {
    /// Start a chain over the full unfiltered record set.
    pub fn new(rows: Vec<Record>) -> Self {
        Self {
            rows,
            narrowed: None,
        }
    }

    /// The working set the next stage reads: the narrowed rows once any
    /// filter has run, the originals before that.
    fn current(&self) -> &[Record] {
        self.narrowed.as_deref().unwrap_or(&self.rows)
    }

    /// Run one narrowing stage. `keep` may fail on a malformed record, in
    /// which case the whole run fails.
    fn narrow<F>(mut self, stage: &str, keep: F) -> Result<Self, SiftError>
    where
        F: Fn(&Record) -> Result<bool, SiftError>,
    {
        let before = self.current().len();
        let mut kept = Vec::new();
        for record in self.current() {
            if keep(record)? {
                kept.push(record.clone());
            }
        }
        debug!(stage, before, after = kept.len(), "filter stage applied");
        self.narrowed = Some(kept);
        Ok(self)
    }

    /// Keep records whose `Engineers` column contains `name` as a
    /// case-sensitive substring. Partial names match: "Duke" matches
    /// "Jimmie Dean, Duke Ellington".
    ///
    /// Rejecting an empty `name` is the caller's job; an empty string
    /// matches every record.
    pub fn assignee(self, name: &str) -> Result<Self, SiftError> {
        self.narrow("assignee", |record| {
            let engineers = record.get(COL_ENGINEERS).ok_or(SiftError::SchemaError {
                column: COL_ENGINEERS,
            })?;
            Ok(engineers.contains(name))
        })
    }

    /// Keep records whose `Status` column equals `status`, ignoring case.
    pub fn status(self, status: &str) -> Result<Self, SiftError> {
        let wanted = status.to_lowercase();
        self.narrow("status", |record| {
            let actual = record.get(COL_STATUS).ok_or(SiftError::SchemaError {
                column: COL_STATUS,
            })?;
            Ok(actual.to_lowercase() == wanted)
        })
    }

    /// Keep records created within `[start, end]`, inclusive on both ends.
    ///
    /// `start` and `end` are `YYYY-MM-DD`; each record's `created` value is
    /// parsed with [`CREATED_FORMAT`] and the time of day discarded. Any
    /// boundary or record timestamp that fails to parse fails the run.
    pub fn created_between(self, start: &str, end: &str) -> Result<Self, SiftError> {
        let start = parse_boundary(start)?;
        let end = parse_boundary(end)?;
        self.narrow("created_between", |record| {
            let created = record.get(COL_CREATED).ok_or(SiftError::SchemaError {
                column: COL_CREATED,
            })?;
            let date = parse_created(created)?;
            Ok(start <= date && date <= end)
        })
    }

    /// The current working set, read-only. Before any filter has run this
    /// is the full original collection.
    pub fn results(&self) -> &[Record] {
        self.current()
    }

    /// Consume the chain, yielding the current working set. Before any
    /// filter has run this is the full original collection.
    pub fn into_results(self) -> Vec<Record> {
        match self.narrowed {
            Some(narrowed) => narrowed,
            None => self.rows,
        }
    }
}

/// Parse a `YYYY-MM-DD` filter boundary.
fn parse_boundary(value: &str) -> Result<NaiveDate, SiftError> {
    NaiveDate::parse_from_str(value, BOUNDARY_DATE_FORMAT).map_err(|_| SiftError::ParseError {
        value: value.to_string(),
        expected: BOUNDARY_DATE_FORMAT,
    })
}

/// Parse a `created` timestamp down to its calendar date.
fn parse_created(value: &str) -> Result<NaiveDate, SiftError> {
    NaiveDateTime::parse_from_str(value, CREATED_FORMAT)
        .map(|dt| dt.date())
        .map_err(|_| SiftError::ParseError {
            value: value.to_string(),
            expected: CREATED_FORMAT,
        })
}
