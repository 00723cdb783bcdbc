//! A single `{path, name, view}` registration.

/// One navigable location: a path pattern, a symbolic name, and the view it mounts.
///
/// The view is an opaque handle supplied by the rendering layer. The table only
/// compares it by identity and never looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    path: String,
    name: String,
    view: V,
}

impl<V: Copy> RouteEntry<V> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> V {
        self.view
    }

    /// Key used for matching: lowercase, one trailing slash dropped.
    pub(crate) fn match_key(&self) -> String {
        match_key(&self.path)
    }
}

pub(crate) fn match_key(path: &str) -> String {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    trimmed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_key_normalization() {
        assert_eq!(match_key("/"), "/");
        assert_eq!(match_key("/BaseMap"), "/basemap");
        assert_eq!(match_key("/basemap/"), "/basemap");
        assert_eq!(match_key("/a/b//"), "/a/b/");
    }

    #[test]
    fn test_entry_accessors() {
        let entry = RouteEntry::new("/basemap", "BaseMap", 7u8);
        assert_eq!(entry.path(), "/basemap");
        assert_eq!(entry.name(), "BaseMap");
        assert_eq!(entry.view(), 7);
    }
}
