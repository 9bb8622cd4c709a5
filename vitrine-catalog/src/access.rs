//! Access control for the styleguide surface.
//!
//! Authentication stays with the host framework; the view layer only sees a
//! [`UserProfile`] snapshot and asks an injected [`AccessPolicy`] whether the
//! styleguide may be shown. Denied users get a not-found outcome, never a
//! permission error, so the styleguide's existence is not leaked.

/// Snapshot of the requesting user, as handed over by the host framework.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl UserProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_active: true,
            ..Self::default()
        }
    }

    pub fn staff(username: impl Into<String>) -> Self {
        Self {
            is_staff: true,
            ..Self::new(username)
        }
    }

    pub fn superuser(username: impl Into<String>) -> Self {
        Self {
            is_superuser: true,
            ..Self::new(username)
        }
    }
}

/// Decides whether a user may see the styleguide.
///
/// Any `Fn(&UserProfile) -> bool` closure is a policy, so hosts can plug in
/// whatever predicate their settings carry.
pub trait AccessPolicy: Send + Sync {
    fn allows(&self, user: &UserProfile) -> bool;
}

impl<F> AccessPolicy for F
where
    F: Fn(&UserProfile) -> bool + Send + Sync,
{
    fn allows(&self, user: &UserProfile) -> bool {
        self(user)
    }
}

/// Default policy: staff and superusers only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffAccess;

impl AccessPolicy for StaffAccess {
    fn allows(&self, user: &UserProfile) -> bool {
        user.is_staff || user.is_superuser
    }
}
