//! Base URL normalization and app-relative locations.

use std::fmt;

use snafu::prelude::*;

use crate::error::{InvalidBaseUrlSnafu, Result};

/// The prefix every application route is mounted under.
///
/// Stored without a trailing slash; the root mount is stored as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Normalize a configured base such as `/app/`, `app`, `https://host/app/` or ``.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        ensure!(
            !raw.contains(['?', '#']) && !raw.contains(char::is_whitespace),
            InvalidBaseUrlSnafu { base: raw }
        );

        let path = strip_origin(raw);
        let path = path.trim_end_matches('/');
        let normalized = if path.is_empty() || path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Ok(Self(normalized))
    }

    /// The normalized prefix, `""` when mounted at the root.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The navigation root, always ending in `/`.
    pub fn root(&self) -> String {
        format!("{}/", self.0)
    }

    /// Strip the base from an absolute path. `None` if the path lies outside it.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.0.is_empty() {
            return Some(path);
        }
        let prefix = path.get(..self.0.len())?;
        if !prefix.eq_ignore_ascii_case(&self.0) {
            return None;
        }
        let rest = &path[self.0.len()..];
        match rest.chars().next() {
            None => Some("/"),
            Some('/' | '?' | '#') => Some(rest),
            Some(_) => None,
        }
    }

    /// Join an app-relative location onto the base.
    pub fn join(&self, location: &Location) -> String {
        format!("{}{}", self.0, location)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root())
    }
}

/// Drop a leading `scheme://authority` if present.
///
/// Only a `://` that precedes the first `/`, `?` or `#` counts, so URLs
/// carried in a query or hash are left alone.
pub(crate) fn strip_origin(url: &str) -> &str {
    let Some((scheme, after)) = url.split_once("://") else {
        return url;
    };
    if !is_scheme(scheme) {
        return url;
    }
    match after.find(['/', '?', '#']) {
        Some(end) => &after[end..],
        None => "",
    }
}

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// An app-relative location: `path?query#hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self { path, query, hash }
    }

    pub fn root() -> Self {
        Self::parse("/")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{hash}")?;
        }
        Ok(())
    }
}
