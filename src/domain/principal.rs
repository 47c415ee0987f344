use super::{Email, UserId};

/// The authenticated identity attached to a request. Anonymous requests are
/// represented by the absence of a `Principal`, never by an error from the
/// identity resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub id: UserId,
    pub email: Email,
}

impl Principal {
    pub fn new(id: UserId, email: Email) -> Self {
        Self { id, email }
    }
}
