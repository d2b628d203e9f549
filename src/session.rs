//! Session State
//!
//! Current logged-in user. A zero id with an empty name means logged out.

use crate::api::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: u64,
    pub username: String,
}

impl Session {
    pub fn login(&mut self, user_id: u64, username: impl Into<String>) {
        self.user_id = user_id;
        self.username = username.into();
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id != 0
    }

    /// Whether the current user owns a row with the given owner name
    pub fn owns(&self, owner: &str) -> bool {
        self.is_logged_in() && self.username == owner
    }
}

/// Parse the user id typed at login; 0 is the logged-out id
pub fn parse_user_id(input: &str) -> Result<u64, ApiError> {
    match input.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ApiError::InvalidInput("user id must be a positive number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let mut session = Session::default();
        session.login(42, "ann");
        assert!(session.is_logged_in());
        assert_eq!(session.user_id, 42);
        assert_eq!(session.username, "ann");

        session.logout();
        assert_eq!(session, Session { user_id: 0, username: String::new() });
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_owns_requires_login() {
        let session = Session::default();
        assert!(!session.owns(""));

        let mut session = Session::default();
        session.login(3, "bob");
        assert!(session.owns("bob"));
        assert!(!session.owns("ann"));
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id(" 42 "), Ok(42));
        assert_eq!(
            parse_user_id("0"),
            Err(ApiError::InvalidInput("user id must be a positive number"))
        );
        assert!(matches!(parse_user_id("ann"), Err(ApiError::InvalidInput(_))));
        assert!(matches!(parse_user_id(""), Err(ApiError::InvalidInput(_))));
    }
}
