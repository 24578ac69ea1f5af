use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::permission::Permission;

/// Default role definitions shipped with the binary. Deployments can point
/// `HRMS_ROLES_FILE` at their own copy; the format is the same.
pub const DEFAULT_ROLES_YAML: &str = include_str!("../../config/roles.yaml");

/// A named bundle of permissions. Static configuration, loaded once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Role {
    pub name: String,
    pub description: String,
    pub permissions: HashSet<Permission>,
}

/// Raw on-disk shape of the roles artifact. Permissions are kept as strings
/// here so a typo can be reported with the offending role name instead of a
/// bare serde error.
#[derive(Debug, Deserialize)]
struct RolesFile {
    roles: Vec<RoleEntry>,
}

#[derive(Debug, Deserialize)]
struct RoleEntry {
    name: String,
    #[serde(default)]
    description: String,
    permissions: Vec<String>,
}

/// Configuration errors are fatal at startup: the process must not accept
/// traffic with a role map it could not fully validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse roles file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("roles file defines no roles")]
    EmptyRoles,

    #[error("duplicate role name '{0}'")]
    DuplicateRole(String),

    #[error("role '{role}' grants no permissions")]
    EmptyRole { role: String },

    #[error("role '{role}' references unknown permission '{permission}'")]
    UnknownPermission { role: String, permission: String },
}

/// Immutable role → permission-set mapping. Built once in `main`, wrapped in
/// an `Arc`, and dependency-injected everywhere authorization decisions are
/// made. Read-only after construction, so it is freely shared across
/// concurrent requests without synchronization.
#[derive(Debug, Clone)]
pub struct RoleMap {
    roles: Vec<Role>,
    by_name: HashMap<String, usize>,
}

impl RoleMap {
    /// Parse and validate a roles artifact. Any inconsistency is a
    /// `ConfigError`; callers treat that as fatal before serving.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let file: RolesFile = serde_yaml::from_str(yaml)?;
        if file.roles.is_empty() {
            return Err(ConfigError::EmptyRoles);
        }

        let mut roles = Vec::with_capacity(file.roles.len());
        let mut by_name = HashMap::new();

        for entry in file.roles {
            if by_name.contains_key(&entry.name) {
                return Err(ConfigError::DuplicateRole(entry.name));
            }
            if entry.permissions.is_empty() {
                return Err(ConfigError::EmptyRole { role: entry.name });
            }

            let mut permissions = HashSet::with_capacity(entry.permissions.len());
            for raw in &entry.permissions {
                let permission =
                    raw.parse::<Permission>()
                        .map_err(|_| ConfigError::UnknownPermission {
                            role: entry.name.clone(),
                            permission: raw.clone(),
                        })?;
                permissions.insert(permission);
            }

            by_name.insert(entry.name.clone(), roles.len());
            roles.push(Role {
                name: entry.name,
                description: entry.description,
                permissions,
            });
        }

        Ok(Self { roles, by_name })
    }

    /// Role map built from the embedded default artifact. The shipped file
    /// is covered by tests, so this cannot fail in a released binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml(DEFAULT_ROLES_YAML)
    }

    /// Permissions granted by a role. Unknown roles grant nothing; they are
    /// not an error so that a stale role name in a token degrades to "no
    /// access" instead of a 500.
    pub fn permissions_for(&self, role_name: &str) -> HashSet<Permission> {
        self.by_name
            .get(role_name)
            .map(|&i| self.roles[i].permissions.clone())
            .unwrap_or_default()
    }

    /// All configured roles, in artifact order.
    pub fn all_roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn contains(&self, role_name: &str) -> bool {
        self.by_name.contains_key(role_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roles_load() {
        let map = RoleMap::builtin().expect("shipped roles file is valid");
        for name in ["Admin", "HR Manager", "Recruiter", "Manager", "Interviewer", "Employee"] {
            assert!(map.contains(name), "missing role {name}");
        }
    }

    #[test]
    fn test_admin_holds_every_permission() {
        let map = RoleMap::builtin().unwrap();
        let admin = map.permissions_for("Admin");
        for p in Permission::list_all() {
            assert!(admin.contains(p), "Admin missing {p}");
        }
    }

    #[test]
    fn test_unknown_role_grants_nothing() {
        let map = RoleMap::builtin().unwrap();
        assert!(map.permissions_for("Wizard").is_empty());
    }

    #[test]
    fn test_unknown_permission_fails_load() {
        let yaml = r#"
roles:
  - name: Broken
    permissions: [candidates.view, candidates.explode]
"#;
        match RoleMap::from_yaml(yaml) {
            Err(ConfigError::UnknownPermission { role, permission }) => {
                assert_eq!(role, "Broken");
                assert_eq!(permission, "candidates.explode");
            }
            other => panic!("expected UnknownPermission, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_role_fails_load() {
        let yaml = r#"
roles:
  - name: Twin
    permissions: [candidates.view]
  - name: Twin
    permissions: [jobs.view]
"#;
        assert!(matches!(
            RoleMap::from_yaml(yaml),
            Err(ConfigError::DuplicateRole(name)) if name == "Twin"
        ));
    }

    #[test]
    fn test_empty_roles_fails_load() {
        assert!(matches!(
            RoleMap::from_yaml("roles: []"),
            Err(ConfigError::EmptyRoles)
        ));
    }
}
