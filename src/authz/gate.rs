//! Pure authorization decision logic.
//!
//! `allow` is the single place the ALLOW/DENY decision is made. The server
//! route guards and the client-side guard both call it, so the UI can never
//! drift from what the API enforces. It is a pure function: no I/O, no
//! mutation, no logging; denial is a return value, not an error.

use super::permission::Permission;
use super::principal::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// What a guarded route or UI subtree demands of the caller.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// The principal must hold this permission.
    Permission(Permission),
    /// The principal must hold at least one of these permissions.
    AnyOf(Vec<Permission>),
    /// The principal must hold every one of these permissions.
    AllOf(Vec<Permission>),
    /// The principal must hold at least one of these roles.
    AnyRole(Vec<String>),
}

impl Requirement {
    pub fn permission(p: Permission) -> Self {
        Requirement::Permission(p)
    }

    pub fn any_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Requirement::AnyOf(permissions.into_iter().collect())
    }

    pub fn all_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Requirement::AllOf(permissions.into_iter().collect())
    }

    pub fn any_role(roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Requirement::AnyRole(roles.into_iter().map(Into::into).collect())
    }

    /// Description used in 403 bodies and access-denied views.
    pub fn describe(&self) -> String {
        match self {
            Requirement::Permission(p) => p.describe().to_string(),
            Requirement::AnyOf(ps) if ps.len() == 1 => ps[0].describe().to_string(),
            _ => "Forbidden".to_string(),
        }
    }
}

impl From<Permission> for Requirement {
    fn from(p: Permission) -> Self {
        Requirement::Permission(p)
    }
}

/// Decide whether `principal` satisfies `requirement`.
///
/// The `system.admin` sentinel is the one superuser escape hatch: a
/// principal holding it passes every check, including role checks. That rule
/// lives here and nowhere else.
pub fn allow(principal: &Principal, requirement: &Requirement) -> Decision {
    if principal.has_permission(Permission::SystemAdmin) {
        return Decision::Allow;
    }

    let satisfied = match requirement {
        Requirement::Permission(p) => principal.has_permission(*p),
        Requirement::AnyOf(ps) => ps.iter().any(|p| principal.has_permission(*p)),
        Requirement::AllOf(ps) => ps.iter().all(|p| principal.has_permission(*p)),
        Requirement::AnyRole(roles) => roles.iter().any(|r| principal.has_role(r)),
    };

    if satisfied {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::roles::RoleMap;
    use uuid::Uuid;

    fn principal_with_roles(roles: &[&str], map: &RoleMap) -> Principal {
        Principal::from_roles(
            Uuid::new_v4(),
            "test",
            roles.iter().map(|r| r.to_string()).collect(),
            map,
        )
    }

    #[test]
    fn test_role_grant_implies_allow() {
        let map = RoleMap::builtin().unwrap();
        for role in map.all_roles() {
            let principal = principal_with_roles(&[role.name.as_str()], &map);
            for p in &role.permissions {
                assert!(
                    allow(&principal, &Requirement::permission(*p)).is_allow(),
                    "role {} should allow {}",
                    role.name,
                    p
                );
            }
        }
    }

    #[test]
    fn test_system_admin_allows_everything() {
        let map = RoleMap::builtin().unwrap();
        let admin = principal_with_roles(&["Admin"], &map);
        for p in Permission::list_all() {
            assert!(allow(&admin, &Requirement::permission(*p)).is_allow());
        }
        // even role checks for roles the admin does not hold
        assert!(allow(&admin, &Requirement::any_role(["Interviewer"])).is_allow());
    }

    #[test]
    fn test_unknown_roles_deny_every_permission() {
        let map = RoleMap::builtin().unwrap();
        let ghost = principal_with_roles(&["Wizard", "Necromancer"], &map);
        for p in Permission::list_all() {
            assert!(!allow(&ghost, &Requirement::permission(*p)).is_allow());
        }
    }

    #[test]
    fn test_any_of_and_all_of() {
        let map = RoleMap::builtin().unwrap();
        let interviewer = principal_with_roles(&["Interviewer"], &map);

        assert!(allow(
            &interviewer,
            &Requirement::any_of([Permission::CandidatesDelete, Permission::InterviewsEdit]),
        )
        .is_allow());
        assert!(!allow(&interviewer, &Requirement::any_of([Permission::CandidatesDelete])).is_allow());

        assert!(allow(
            &interviewer,
            &Requirement::all_of([Permission::CandidatesView, Permission::InterviewsView]),
        )
        .is_allow());
        assert!(!allow(
            &interviewer,
            &Requirement::all_of([Permission::CandidatesView, Permission::CandidatesDelete]),
        )
        .is_allow());
    }

    #[test]
    fn test_role_requirement() {
        let map = RoleMap::builtin().unwrap();
        let interviewer = principal_with_roles(&["Interviewer"], &map);
        assert!(allow(&interviewer, &Requirement::any_role(["Interviewer", "Manager"])).is_allow());
        assert!(!allow(&interviewer, &Requirement::any_role(["Manager"])).is_allow());
    }

    #[test]
    fn test_allow_is_pure_and_deterministic() {
        let map = RoleMap::builtin().unwrap();
        let principal = principal_with_roles(&["Interviewer"], &map);
        let before = principal.clone();
        let requirement = Requirement::permission(Permission::InterviewsEdit);

        let first = allow(&principal, &requirement);
        let second = allow(&principal, &requirement);

        assert_eq!(first, second);
        assert_eq!(principal.permissions, before.permissions);
        assert_eq!(principal.roles, before.roles);
    }
}
