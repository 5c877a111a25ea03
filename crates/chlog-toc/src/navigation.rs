//! Navigation list data types.

use std::ops::Deref;

/// A heading selected for the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadingRecord {
    /// Value of the heading's `id` attribute, `None` when it has none.
    pub id: Option<String>,
    /// Trimmed text content of the heading.
    pub label: String,
}

impl HeadingRecord {
    /// In-page anchor for this heading (`#id`), `None` without an id.
    #[must_use]
    pub fn href(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("#{id}"))
    }
}

/// Ordered headings for the table of contents.
///
/// The order is always the document order of the source headings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NavigationList(Vec<HeadingRecord>);

impl NavigationList {
    pub(crate) fn push(&mut self, record: HeadingRecord) {
        self.0.push(record);
    }

    /// Consume the list, returning the records.
    #[must_use]
    pub fn into_inner(self) -> Vec<HeadingRecord> {
        self.0
    }
}

impl Deref for NavigationList {
    type Target = [HeadingRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<HeadingRecord>> for NavigationList {
    fn from(records: Vec<HeadingRecord>) -> Self {
        Self(records)
    }
}

impl IntoIterator for NavigationList {
    type Item = HeadingRecord;
    type IntoIter = std::vec::IntoIter<HeadingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NavigationList {
    type Item = &'a HeadingRecord;
    type IntoIter = std::slice::Iter<'a, HeadingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
