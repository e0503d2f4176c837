//! Access control for user operations
//!
//! A pure decision function from (caller role, operation, target) to
//! allow/deny. It holds no state and performs no I/O: denial must be
//! decidable before any lookup or mutation, so a caller without the
//! privilege class never learns whether the target exists.

use uuid::Uuid;

use crate::models::Role;

/// Identity extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: Uuid,
    pub role: Role,
}

/// Operations gated by access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create a user with an explicit role.
    CreateUser,
    /// Read a user's profile.
    RetrieveUser,
    /// Change a user's non-role profile fields.
    UpdateProfile,
    /// Change a user's role.
    UpdateRole,
    /// List users.
    ListUsers,
}

/// Authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        self == Access::Allow
    }
}

/// Decide whether `caller` may perform `operation` against `target`.
///
/// Ownership means the target is the caller's own record. Operations
/// without a target resource (create, list) ignore the argument.
pub fn authorize(caller: &Caller, operation: Operation, target: Option<Uuid>) -> Access {
    let owns_target = target == Some(caller.id);

    let allowed = match operation {
        Operation::CreateUser | Operation::UpdateRole => caller.role == Role::Admin,
        Operation::ListUsers => caller.role >= Role::Manager,
        Operation::RetrieveUser | Operation::UpdateProfile => {
            if owns_target {
                caller.role >= Role::Authenticated
            } else {
                // Managers may read and update other users' profiles;
                // role changes stay admin-only above.
                caller.role >= Role::Manager
            }
        }
    };

    if allowed { Access::Allow } else { Access::Deny }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(role: Role) -> Caller {
        Caller {
            id: Uuid::new_v4(),
            role,
        }
    }

    fn decide(role: Role, operation: Operation, own: bool) -> Access {
        let c = caller(role);
        let target = if own { Some(c.id) } else { Some(Uuid::new_v4()) };
        authorize(&c, operation, target)
    }

    #[test]
    fn test_create_user_is_admin_only() {
        let target = None;
        assert_eq!(
            authorize(&caller(Role::Admin), Operation::CreateUser, target),
            Access::Allow
        );
        assert_eq!(
            authorize(&caller(Role::Manager), Operation::CreateUser, target),
            Access::Deny
        );
        assert_eq!(
            authorize(&caller(Role::Authenticated), Operation::CreateUser, target),
            Access::Deny
        );
        assert_eq!(
            authorize(&caller(Role::Anonymous), Operation::CreateUser, target),
            Access::Deny
        );
    }

    #[test]
    fn test_retrieve_own_profile() {
        assert_eq!(decide(Role::Admin, Operation::RetrieveUser, true), Access::Allow);
        assert_eq!(decide(Role::Manager, Operation::RetrieveUser, true), Access::Allow);
        assert_eq!(
            decide(Role::Authenticated, Operation::RetrieveUser, true),
            Access::Allow
        );
        assert_eq!(decide(Role::Anonymous, Operation::RetrieveUser, true), Access::Deny);
    }

    #[test]
    fn test_retrieve_other_profile() {
        assert_eq!(decide(Role::Admin, Operation::RetrieveUser, false), Access::Allow);
        assert_eq!(decide(Role::Manager, Operation::RetrieveUser, false), Access::Allow);
        assert_eq!(
            decide(Role::Authenticated, Operation::RetrieveUser, false),
            Access::Deny
        );
        assert_eq!(
            decide(Role::Anonymous, Operation::RetrieveUser, false),
            Access::Deny
        );
    }

    #[test]
    fn test_update_own_profile() {
        assert_eq!(decide(Role::Admin, Operation::UpdateProfile, true), Access::Allow);
        assert_eq!(decide(Role::Manager, Operation::UpdateProfile, true), Access::Allow);
        assert_eq!(
            decide(Role::Authenticated, Operation::UpdateProfile, true),
            Access::Allow
        );
        assert_eq!(decide(Role::Anonymous, Operation::UpdateProfile, true), Access::Deny);
    }

    #[test]
    fn test_update_other_profile() {
        assert_eq!(decide(Role::Admin, Operation::UpdateProfile, false), Access::Allow);
        assert_eq!(decide(Role::Manager, Operation::UpdateProfile, false), Access::Allow);
        assert_eq!(
            decide(Role::Authenticated, Operation::UpdateProfile, false),
            Access::Deny
        );
    }

    #[test]
    fn test_update_role_is_admin_only() {
        for own in [true, false] {
            assert_eq!(decide(Role::Admin, Operation::UpdateRole, own), Access::Allow);
            assert_eq!(decide(Role::Manager, Operation::UpdateRole, own), Access::Deny);
            assert_eq!(
                decide(Role::Authenticated, Operation::UpdateRole, own),
                Access::Deny
            );
        }
    }

    #[test]
    fn test_list_users() {
        let target = None;
        assert_eq!(
            authorize(&caller(Role::Admin), Operation::ListUsers, target),
            Access::Allow
        );
        assert_eq!(
            authorize(&caller(Role::Manager), Operation::ListUsers, target),
            Access::Allow
        );
        assert_eq!(
            authorize(&caller(Role::Authenticated), Operation::ListUsers, target),
            Access::Deny
        );
        assert_eq!(
            authorize(&caller(Role::Anonymous), Operation::ListUsers, target),
            Access::Deny
        );
    }

    #[test]
    fn test_anonymous_is_denied_everything() {
        let operations = [
            Operation::CreateUser,
            Operation::RetrieveUser,
            Operation::UpdateProfile,
            Operation::UpdateRole,
            Operation::ListUsers,
        ];

        for operation in operations {
            for own in [true, false] {
                assert_eq!(decide(Role::Anonymous, operation, own), Access::Deny);
            }
        }
    }

    #[test]
    fn test_decision_ignores_target_for_untargeted_operations() {
        let c = caller(Role::Admin);
        assert_eq!(authorize(&c, Operation::ListUsers, None), Access::Allow);
        assert_eq!(authorize(&c, Operation::ListUsers, Some(c.id)), Access::Allow);
    }
}
