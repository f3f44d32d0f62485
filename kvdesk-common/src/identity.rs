/// Identifier the console starts with
pub const DEFAULT_USER_ID: &str = "user:1234";

/// The one user identifier shared by the profile and wallet panels.
///
/// Handlers read it when they run, never at render time, so a change is picked
/// up by the very next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveIdentifier(String);

impl Default for ActiveIdentifier {
    fn default() -> Self {
        Self(DEFAULT_USER_ID.to_string())
    }
}

impl ActiveIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    pub fn set(&mut self, id: impl Into<String>) {
        self.0 = id.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placeholder() {
        assert_eq!(ActiveIdentifier::default().get(), "user:1234");
    }

    #[test]
    fn test_set_replaces_value() {
        let mut id = ActiveIdentifier::default();
        id.set("user:42");
        assert_eq!(id.get(), "user:42");
    }
}
