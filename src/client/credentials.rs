use std::fmt;

/// Login details for one account
///
/// The password is kept out of `Debug` output so credentials can be logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Form field carrying the username or email address
    pub const USERNAME_FIELD: &'static str = "edEmailOrName";

    /// Form field carrying the password
    pub const PASSWORD_FIELD: &'static str = "edPW";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login form body
    pub fn form(&self) -> [(&'static str, &str); 2] {
        [
            (Self::USERNAME_FIELD, self.username.as_str()),
            (Self::PASSWORD_FIELD, self.password.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
