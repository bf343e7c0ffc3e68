use std::collections::HashSet;

/// Excludes configured database names from traversal.
///
/// Some namespaces (internal staging databases, scratch schemas) must never
/// be walked; their tables contribute nothing to the snapshot. The filter is
/// a plain membership test with no side effects.
#[derive(Debug, Clone, Default)]
pub struct BlacklistFilter {
    databases: HashSet<String>,
}

impl BlacklistFilter {
    /// Build a filter over the configured set of database names.
    pub fn new(databases: HashSet<String>) -> Self {
        Self { databases }
    }

    /// Whether `database` is excluded from traversal.
    pub fn is_excluded(&self, database: &str) -> bool {
        self.databases.contains(database)
    }
}
