/// Top-level console tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Genres,
    Users,
    Wallet,
}

#[allow(clippy::derivable_impls)]
impl Default for Tab {
    fn default() -> Self {
        Tab::Genres
    }
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Genres, Tab::Users, Tab::Wallet];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Genres => "Genres",
            Tab::Users => "Users",
            Tab::Wallet => "Wallet",
        }
    }

    /// Stable key used by the tab bar
    pub fn key(self) -> &'static str {
        match self {
            Tab::Genres => "genres",
            Tab::Users => "users",
            Tab::Wallet => "wallet",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Tab::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// Which panel is rendered. Selecting a tab touches nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabRouter {
    active: Tab,
}

impl TabRouter {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_genres() {
        assert_eq!(TabRouter::default().active(), Tab::Genres);
    }

    #[test]
    fn test_select_any_order() {
        let mut router = TabRouter::default();
        router.select(Tab::Wallet);
        assert_eq!(router.active(), Tab::Wallet);
        router.select(Tab::Users);
        assert_eq!(router.active(), Tab::Users);
        router.select(Tab::Genres);
        assert_eq!(router.active(), Tab::Genres);
    }

    #[test]
    fn test_key_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(Tab::from_key("settings"), None);
    }
}
