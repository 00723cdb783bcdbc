//! Navigation history with back and forward stacks.

/// Session history: the current entry plus what lies behind and ahead of it.
///
/// # Example
/// ```
/// use route_nexus::History;
///
/// let mut history = History::new("/");
/// history.push("/basemap");
/// assert_eq!(history.current(), &"/basemap");
/// history.back();
/// assert_eq!(history.current(), &"/");
/// history.forward();
/// assert_eq!(history.current(), &"/basemap");
/// ```
#[derive(Debug, Clone)]
pub struct History<T: Clone + PartialEq> {
    current: T,
    back: Vec<T>,
    forward: Vec<T>,
}

impl<T: Clone + PartialEq> History<T> {
    /// Create a new history starting at the given entry.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Get the current entry.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Push a new entry. The forward stack is discarded.
    /// Returns false if the entry equals the current one.
    pub fn push(&mut self, entry: T) -> bool {
        if self.current == entry {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, entry);
        self.back.push(previous);
        self.forward.clear();
        true
    }

    /// Replace the current entry without recording history.
    pub fn replace(&mut self, entry: T) {
        self.current = entry;
    }

    /// Go back to the previous entry. Returns true if successful.
    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(prev) => {
                let current = std::mem::replace(&mut self.current, prev);
                self.forward.push(current);
                true
            }
            None => false,
        }
    }

    /// Go forward to the entry left by `back`. Returns true if successful.
    pub fn forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.current, next);
                self.back.push(current);
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Number of entries behind the current one.
    pub fn len(&self) -> usize {
        self.back.len()
    }

    pub fn is_empty(&self) -> bool {
        self.back.is_empty()
    }

    /// Drop all back and forward entries.
    pub fn clear(&mut self) {
        self.back.clear();
        self.forward.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestRoute {
        Home,
        Settings,
        Profile,
    }

    #[test]
    fn test_history_navigation() {
        let mut history = History::new(TestRoute::Home);

        assert_eq!(history.current(), &TestRoute::Home);
        assert!(!history.can_go_back());

        history.push(TestRoute::Settings);
        assert_eq!(history.current(), &TestRoute::Settings);
        assert!(history.can_go_back());

        history.push(TestRoute::Profile);
        assert_eq!(history.current(), &TestRoute::Profile);
        assert_eq!(history.len(), 2);

        assert!(history.back());
        assert_eq!(history.current(), &TestRoute::Settings);

        assert!(history.back());
        assert_eq!(history.current(), &TestRoute::Home);

        assert!(!history.back());
        assert_eq!(history.current(), &TestRoute::Home);
    }

    #[test]
    fn test_history_forward() {
        let mut history = History::new(TestRoute::Home);
        history.push(TestRoute::Settings);
        history.push(TestRoute::Profile);
        history.back();
        history.back();
        assert!(history.can_go_forward());

        assert!(history.forward());
        assert_eq!(history.current(), &TestRoute::Settings);

        // A fresh push drops what was ahead.
        history.push(TestRoute::Home);
        assert!(!history.can_go_forward());
        assert!(!history.forward());
        assert_eq!(history.current(), &TestRoute::Home);
    }

    #[test]
    fn test_history_no_duplicate_push() {
        let mut history = History::new(TestRoute::Home);
        assert!(!history.push(TestRoute::Home));
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_history_replace() {
        let mut history = History::new(TestRoute::Home);
        history.push(TestRoute::Settings);
        history.replace(TestRoute::Profile);
        assert_eq!(history.current(), &TestRoute::Profile);
        assert_eq!(history.len(), 1);
        history.clear();
        assert!(!history.can_go_back());
    }
}
