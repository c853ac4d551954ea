//! Session-local admin authorization.

/// Credential check backing the admin login gate.
///
/// Injected into the client state so the gate stays replaceable and
/// testable; the grant itself is session-scoped and never persisted.
pub trait AuthPolicy: Send {
    /// Whether the pair grants an admin session.
    fn check_credentials(&self, username: &str, password: &str) -> bool;
}

/// Fixed local credential pair for the single-user install.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new("admin", "layar123")
    }
}

impl AuthPolicy for StaticCredentials {
    fn check_credentials(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pair_is_accepted() {
        let policy = StaticCredentials::default();
        assert!(policy.check_credentials("admin", "layar123"));
    }

    #[test]
    fn anything_else_is_rejected() {
        let policy = StaticCredentials::new("admin", "s3cret");
        assert!(!policy.check_credentials("admin", "wrong"));
        assert!(!policy.check_credentials("root", "s3cret"));
        assert!(!policy.check_credentials("", ""));
    }
}
