/// Account credentials for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Time-stamped username and email so each run registers a fresh account.
    pub fn generate(stamp: i64, password: &str) -> Self {
        Self {
            username: format!("verify_users_{stamp}"),
            email: format!("verify_{stamp}@example.com"),
            password: password.to_string(),
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }
}
