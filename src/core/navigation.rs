//! Selected navigation tab

use super::options::Tab;

/// Tab bar state. Only explicit user selection changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Tab,
}

impl NavigationState {
    pub fn new(current: Tab) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Tab {
        self.current
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.current == tab
    }

    /// Select a tab. Returns true when the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.current != tab;
        self.current = tab;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_learn() {
        let nav = NavigationState::default();
        assert_eq!(nav.current(), Tab::Learn);
        assert!(nav.is_active(Tab::Learn));
        assert!(!nav.is_active(Tab::Profile));
    }

    #[test]
    fn test_select() {
        let mut nav = NavigationState::default();
        assert!(nav.select(Tab::Profile));
        assert_eq!(nav.current(), Tab::Profile);
        assert!(!nav.select(Tab::Profile));
        assert!(nav.select(Tab::Scenarios));
        assert!(nav.is_active(Tab::Scenarios));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut nav = NavigationState::default();
        for tab in Tab::ALL {
            nav.select(tab);
            let active = Tab::ALL.into_iter().filter(|t| nav.is_active(*t)).count();
            assert_eq!(active, 1);
        }
    }
}
