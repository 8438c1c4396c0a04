//! Ticket record type: an ordered mapping from column name to string value.
//!
//! Tracker exports carry a dozen-odd columns; the pipeline only ever
//! inspects four of them and passes the rest through untouched. Field
//! order is significant because the CSV sink writes its header row in
//! the order the first record's fields were read.

/// Column holding the ticket identifier (the dedup key).
pub const COL_ID: &str = "ID";
/// Column holding the comma-separated assignee names.
pub const COL_ENGINEERS: &str = "Engineers";
/// Column holding the ticket status.
pub const COL_STATUS: &str = "Status";
/// Column holding the creation timestamp, e.g. `April 12, 2024 2:01 PM`.
pub const COL_CREATED: &str = "created";

/// One ticket entry: column name/value pairs in file order.
///
/// Lookup is a linear scan, which is fine at export widths; what matters
/// is that iteration order matches the order fields were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from name/value pairs, preserving their order.
    pub fn from_pairs<N, V, I>(pairs: I) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (N, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    /// The value of the named column, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a column value, replacing an existing column in place or
    /// appending a new one at the end.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.into(),
            None => self.fields.push((name.to_string(), value.into())),
        }
    }

    /// Column names in field order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Column values in field order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
