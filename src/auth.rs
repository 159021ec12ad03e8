//! Static login gate
//!
//! A plain credential comparison in front of the dashboard. This is a UI
//! gate, not a security boundary; credentials come from configuration and
//! default to the built-in demo pair.

/// The configured username/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a login attempt against the configured pair
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "1234")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials() {
        let creds = Credentials::default();
        assert!(creds.verify("admin", "1234"));
    }

    #[test]
    fn test_rejects_wrong_pair() {
        let creds = Credentials::default();
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("root", "1234"));
        assert!(!creds.verify("", ""));
        // Exact match only
        assert!(!creds.verify("Admin", "1234"));
    }
}
