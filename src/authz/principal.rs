use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use super::permission::Permission;
use super::roles::RoleMap;

/// Authenticated identity plus its resolved permission set.
///
/// Constructed by the identity resolver at the start of each request (or at
/// login on the client) and discarded afterwards. The permission set is
/// always recomputed from the role map, never persisted, so a role change
/// takes effect on the next resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
    pub permissions: HashSet<Permission>,
}

impl Principal {
    /// Build a principal whose permission set is the union of the grants of
    /// `roles`. Role names that the map does not know contribute nothing.
    pub fn from_roles(
        id: Uuid,
        username: impl Into<String>,
        roles: Vec<String>,
        role_map: &RoleMap,
    ) -> Self {
        let mut permissions = HashSet::new();
        for role in &roles {
            permissions.extend(role_map.permissions_for(role));
        }
        Self {
            id,
            username: username.into(),
            roles,
            permissions,
        }
    }

    /// Add user-specific permission overrides on top of the role grants.
    /// The invariant `permissions ⊇ union of role grants` is preserved
    /// because overrides only ever add.
    pub fn with_overrides(mut self, extra: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions.extend(extra);
        self
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Wire identifiers of the permission set, sorted for stable output.
    pub fn permission_identifiers(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.permissions.iter().map(|p| p.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_are_union_of_role_grants() {
        let map = RoleMap::builtin().unwrap();
        let principal = Principal::from_roles(
            Uuid::new_v4(),
            "pat",
            vec!["Interviewer".to_string(), "Employee".to_string()],
            &map,
        );

        let mut expected = map.permissions_for("Interviewer");
        expected.extend(map.permissions_for("Employee"));
        assert_eq!(principal.permissions, expected);
    }

    #[test]
    fn test_unknown_roles_contribute_nothing() {
        let map = RoleMap::builtin().unwrap();
        let principal =
            Principal::from_roles(Uuid::new_v4(), "ghost", vec!["Wizard".to_string()], &map);
        assert!(principal.permissions.is_empty());
    }

    #[test]
    fn test_overrides_only_add() {
        let map = RoleMap::builtin().unwrap();
        let base = Principal::from_roles(
            Uuid::new_v4(),
            "lee",
            vec!["Manager".to_string()],
            &map,
        );
        let role_grants = base.permissions.clone();
        let principal = base.with_overrides([Permission::ReportsExport]);

        assert!(principal.has_permission(Permission::ReportsExport));
        assert!(principal.permissions.is_superset(&role_grants));
    }
}
