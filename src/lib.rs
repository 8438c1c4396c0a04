//! # ticket-sift
//!
//! Filter, deduplicate, and re-export ticket tracker CSV dumps.
//!
//! Ticket trackers export one CSV file per view, with a fixed set of
//! columns (`ID`, `Engineers`, `Status`, `created`, plus opaque payload).
//! This library concatenates those exports into one working set, narrows
//! it through a chain of filters, collapses duplicate identifiers, and
//! writes the survivors back out as a single CSV.
//!
//! ## Pipeline
//!
//! Data flows one direction, with no feedback and no concurrency:
//!
//! - **Source** ([`io::load_dir`]): reads every `*.csv` in a directory
//!   into one unordered record set
//! - **Filter chain** ([`TicketFilter`]): assignee substring, status
//!   equality, inclusive creation-date range
//! - **Dedup** ([`dedupe`]): one record per `ID`, later occurrence wins,
//!   sorted by identifier
//! - **Sink** ([`io::write_csv`]): serializes the result, header taken
//!   from the first record
//!
//! ## Example
//!
//! ```
//! use ticket_sift::{Record, TicketFilter, dedupe};
//!
//! let rows = vec![
//!     Record::from_pairs([
//!         ("ID", "302"),
//!         ("Engineers", "Duke Ellington"),
//!         ("Status", "In Progress"),
//!         ("created", "March 10, 2025 9:00 AM"),
//!     ]),
//!     Record::from_pairs([
//!         ("ID", "301"),
//!         ("Engineers", "Jimmie Dean, Duke Ellington"),
//!         ("Status", "Complete"),
//!         ("created", "April 12, 2024 2:01 PM"),
//!     ]),
//! ];
//!
//! let kept = TicketFilter::new(rows).assignee("Duke")?.into_results();
//! let report = dedupe(kept)?;
//!
//! assert_eq!(report.len(), 2);
//! assert_eq!(report[0].get("ID"), Some("301"));
//! # Ok::<(), ticket_sift::SiftError>(())
//! ```

pub mod dedup;
pub mod error;
pub mod filter;
pub mod io;
pub mod logging;
pub mod record;

pub use dedup::dedupe;
pub use error::SiftError;
pub use filter::{BOUNDARY_DATE_FORMAT, CREATED_FORMAT, TicketFilter};
pub use record::{COL_CREATED, COL_ENGINEERS, COL_ID, COL_STATUS, Record};
