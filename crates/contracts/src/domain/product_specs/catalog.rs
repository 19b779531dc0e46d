use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::ProductRecord;

/// The loaded product record set.
///
/// An ordered sequence of records, loaded once per page session and read-only
/// thereafter. Records are kept in catalog order; filtering never re-sorts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<ProductRecord>);

impl Catalog {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.0
    }

    /// Records whose `category` equals the given context, case-sensitive
    /// exact match, in catalog order. An empty match is not an error.
    pub fn in_category<'a>(
        &'a self,
        category: &'a CategoryContext,
    ) -> impl Iterator<Item = &'a ProductRecord> {
        self.0
            .iter()
            .filter(move |record| record.category == category.as_str())
    }

    /// Resolve a record by identifier. Linear scan; an identifier that
    /// matches nothing yields `None`.
    pub fn find(&self, id: &str) -> Option<&ProductRecord> {
        self.0.iter().find(|record| record.id == id)
    }
}

/// The active comparison category for the page session.
///
/// Resolved once at initialization and never re-derived; switching category
/// is a full page navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryContext(String);

impl CategoryContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
