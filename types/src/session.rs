use crate::UserProfile;

/// Whether someone is signed in, and who.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn(UserProfile),
}

impl Session {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::SignedOut => None,
            Session::SignedIn(user) => Some(user),
        }
    }

    pub fn sign_in(&mut self, user: UserProfile) {
        *self = Session::SignedIn(user);
    }

    /// Clear the current user, returning who was signed in.
    pub fn sign_out(&mut self) -> Option<UserProfile> {
        match std::mem::take(self) {
            Session::SignedOut => None,
            Session::SignedIn(user) => Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgeGroup, SkinType};

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            name: name.into(),
            email: format!("{name}@example.com"),
            skin_type: SkinType::Oily,
            age_group: AgeGroup::Mature,
        }
    }

    #[test]
    fn starts_signed_out() {
        let session = Session::default();
        assert_eq!(session, Session::SignedOut);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn sign_in_then_out() {
        let mut session = Session::default();
        session.sign_in(profile("kai"));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("kai"));

        assert_eq!(session.sign_out(), Some(profile("kai")));
        assert_eq!(session, Session::SignedOut);
        assert_eq!(session.sign_out(), None);
    }

    #[test]
    fn sign_in_replaces_user() {
        let mut session = Session::SignedIn(profile("kai"));
        session.sign_in(profile("lee"));
        assert_eq!(session.user(), Some(&profile("lee")));
    }
}
