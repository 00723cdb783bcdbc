//! Ordered, immutable route table.
//!
//! # Matching
//! - Query string and hash are ignored
//! - Case-insensitive, one trailing slash tolerated
//! - Entries are tried in registration order, first match wins
//!
//! Construction rejects empty names, paths without a leading `/`, and any
//! duplicate path or name.

use std::collections::HashSet;

use snafu::prelude::*;

use super::entry::{match_key, RouteEntry};
use crate::error::{
    DuplicateNameSnafu, DuplicatePathSnafu, EmptyNameSnafu, InvalidPathSnafu, Result,
};
use crate::router::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V: Copy> RouteTable<V> {
    /// Validate and freeze the given entries.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self> {
        let mut paths = HashSet::with_capacity(entries.len());
        let mut names = HashSet::with_capacity(entries.len());

        for entry in &entries {
            ensure!(
                entry.path().starts_with('/'),
                InvalidPathSnafu { path: entry.path() }
            );
            ensure!(
                !entry.name().is_empty(),
                EmptyNameSnafu { path: entry.path() }
            );
            ensure!(
                paths.insert(entry.match_key()),
                DuplicatePathSnafu { path: entry.path() }
            );
            ensure!(
                names.insert(entry.name().to_string()),
                DuplicateNameSnafu { name: entry.name() }
            );
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its symbolic name (exact, case-sensitive).
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Look up an entry by an app-relative path. Query and hash are ignored.
    pub fn by_path(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.match_path(&Location::parse(path))
    }

    /// Match a parsed location against the table.
    pub fn match_path(&self, location: &Location) -> Option<&RouteEntry<V>> {
        let key = match_key(location.path());
        self.entries.iter().find(|entry| entry.match_key() == key)
    }

    /// Position of the entry in registration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }
}

impl<'a, V> IntoIterator for &'a RouteTable<V> {
    type Item = &'a RouteEntry<V>;
    type IntoIter = std::slice::Iter<'a, RouteEntry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestView {
        Home,
        Settings,
        Profile,
    }

    fn table() -> RouteTable<TestView> {
        RouteTable::new(vec![
            RouteEntry::new("/", "home", TestView::Home),
            RouteEntry::new("/settings", "Settings", TestView::Settings),
            RouteEntry::new("/profile", "Profile", TestView::Profile),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_by_name_and_path() {
        let table = table();
        assert_eq!(table.len(), 3);

        let by_name = table.by_name("Settings").unwrap();
        assert_eq!(by_name.path(), "/settings");

        let by_path = table.by_path("/settings").unwrap();
        assert_eq!(by_path.name(), "Settings");
        assert_eq!(by_name, by_path);

        assert!(table.by_name("settings").is_none());
        assert!(table.by_path("/nothing").is_none());
    }

    #[test]
    fn test_match_ignores_case_query_and_trailing_slash() {
        let table = table();
        assert_eq!(table.by_path("/Settings/").unwrap().view(), TestView::Settings);
        assert_eq!(table.by_path("/profile?tab=2#top").unwrap().view(), TestView::Profile);
        assert_eq!(table.by_path("/").unwrap().view(), TestView::Home);
        assert!(table.by_path("/profile/extra").is_none());
    }

    #[test]
    fn test_preserves_order() {
        let names: Vec<_> = table().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, ["home", "Settings", "Profile"]);
        assert_eq!(table().position("Profile"), Some(2));
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/settings", "a", TestView::Settings),
            RouteEntry::new("/Settings/", "b", TestView::Profile),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicatePath { path } if path == "/Settings/"));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = RouteTable::new(vec![
            RouteEntry::new("/a", "Same", TestView::Settings),
            RouteEntry::new("/b", "Same", TestView::Profile),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateName { name } if name == "Same"));
    }

    #[test]
    fn test_rejects_invalid_entries() {
        let err = RouteTable::new(vec![RouteEntry::new("settings", "Settings", TestView::Settings)])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));

        let err = RouteTable::new(vec![RouteEntry::new("/settings", "", TestView::Settings)])
            .unwrap_err();
        assert!(matches!(err, Error::EmptyName { .. }));
    }
}
