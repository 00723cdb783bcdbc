//! History-backed router over a `RouteTable`.

use snafu::prelude::*;

use super::history::History;
use super::location::{strip_origin, BaseUrl, Location};
use crate::error::{Result, UnknownRouteSnafu};
use crate::route::{RouteEntry, RouteTable};

/// Router mounted under a base URL.
///
/// Navigation only rewrites the in-memory history. Locations that match no
/// entry are kept as-is so the host can render its not-found view.
#[derive(Debug, Clone)]
pub struct AppRouter<V> {
    table: RouteTable<V>,
    base: BaseUrl,
    history: History<Location>,
}

impl<V: Copy> AppRouter<V> {
    /// Build a router rooted at `base_url`, starting at `/`.
    pub fn new(base_url: &str, routes: Vec<RouteEntry<V>>) -> Result<Self> {
        let base = BaseUrl::parse(base_url)?;
        let table = RouteTable::new(routes)?;
        tracing::debug!(base = %base, routes = table.len(), "router created");

        Ok(Self {
            table,
            base,
            history: History::new(Location::root()),
        })
    }

    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Navigation root, e.g. `/app/`.
    pub fn root(&self) -> String {
        self.base.root()
    }

    pub fn routes(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn current(&self) -> &Location {
        self.history.current()
    }

    pub fn current_route(&self) -> Option<&RouteEntry<V>> {
        self.table.match_path(self.history.current())
    }

    pub fn current_view(&self) -> Option<V> {
        self.current_route().map(RouteEntry::view)
    }

    /// The full URL of the current location, base included.
    pub fn current_url(&self) -> String {
        self.base.join(self.history.current())
    }

    /// Match a full URL without navigating. URLs outside the base never match.
    pub fn resolve(&self, url: &str) -> Option<&RouteEntry<V>> {
        let location = self.base.strip(strip_origin(url)).map(Location::parse)?;
        self.table.match_path(&location)
    }

    /// Full URL for a named route.
    pub fn href(&self, name: &str) -> Result<String> {
        let entry = self.table.by_name(name).context(UnknownRouteSnafu { name })?;
        Ok(self.base.join(&Location::parse(entry.path())))
    }

    /// Navigate by route name.
    pub fn navigate_to(&mut self, name: &str) -> Result<&RouteEntry<V>> {
        let path = self
            .table
            .by_name(name)
            .context(UnknownRouteSnafu { name })?
            .path()
            .to_string();
        self.go(Location::parse(&path));
        self.table.by_name(name).context(UnknownRouteSnafu { name })
    }

    /// Navigate to an app-relative location. Unmatched paths are still recorded.
    pub fn push(&mut self, path: &str) -> Option<&RouteEntry<V>> {
        self.go(Location::parse(path));
        self.current_route()
    }

    /// Navigate to a full URL, origin and base included.
    ///
    /// A URL outside the base becomes a not-found location carrying the raw path.
    pub fn visit(&mut self, url: &str) -> Option<&RouteEntry<V>> {
        let path = strip_origin(url);
        let location = match self.base.strip(path) {
            Some(relative) => Location::parse(relative),
            None => {
                tracing::info!(url, base = %self.base, "url outside base");
                Location::parse(path)
            }
        };
        self.go(location);
        self.current_route()
    }

    /// Swap the current location without adding a history entry.
    pub fn replace(&mut self, path: &str) -> Option<&RouteEntry<V>> {
        let location = Location::parse(path);
        tracing::debug!(from = %self.current(), to = %location, "replace");
        self.history.replace(location);
        self.current_route()
    }

    pub fn back(&mut self) -> bool {
        let moved = self.history.back();
        if moved {
            tracing::debug!(to = %self.current(), "back");
        }
        moved
    }

    pub fn forward(&mut self) -> bool {
        let moved = self.history.forward();
        if moved {
            tracing::debug!(to = %self.current(), "forward");
        }
        moved
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn go(&mut self, location: Location) {
        let from = self.current().to_string();
        let to = location.to_string();
        if !self.history.push(location) {
            return;
        }
        match self.current_route() {
            Some(entry) => tracing::debug!(%from, %to, route = entry.name(), "navigate"),
            None => tracing::info!(%from, %to, "no route matched"),
        }
    }
}
