use crate::endpoints::LOGIN_PAGE;
use crate::models::User;

/// What the session guard decided for the current page load.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCheck {
    Authenticated(User),
    Unauthenticated,
}

impl SessionCheck {
    /// Any failure reaching `/api/user`, whether a status, transport or decode
    /// error, counts as unauthenticated.
    pub fn from_outcome<E>(outcome: Result<User, E>) -> Self {
        match outcome {
            Ok(user) => SessionCheck::Authenticated(user),
            Err(_) => SessionCheck::Unauthenticated,
        }
    }

    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            SessionCheck::Authenticated(_) => None,
            SessionCheck::Unauthenticated => Some(LOGIN_PAGE),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionCheck::Authenticated(user) => Some(user),
            SessionCheck::Unauthenticated => None,
        }
    }
}
