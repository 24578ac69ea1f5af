//! Credential -> Principal resolution.
//!
//! Two credential forms are accepted, matching the original backend:
//! - HS256 JWTs minted by `POST /auth/login`, whose claims carry role names
//!   (and optional per-user permission overrides). The effective permission
//!   set is recomputed from the role map on every resolution.
//! - Static demo tokens recognized by prefix (`admin-token-*`, `hr-token-*`,
//!   ...), kept for parity with the original mock backend and for local
//!   development. They resolve to canned principals derived from the same
//!   role map.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::authz::{Permission, Principal, RoleMap};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub roles: Vec<String>,
    /// User-specific permission grants on top of the role bundles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(
        sub: Uuid,
        username: String,
        roles: Vec<String>,
        overrides: Vec<String>,
        expiry_hours: u64,
    ) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub,
            username,
            roles,
            overrides,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token generation error: {0}")]
    Generation(String),
    #[error("signing secret is not configured")]
    MissingSecret,
}

/// Why a credential failed to resolve. Both variants map to HTTP 401; the
/// message distinction ("No token provided" vs "Invalid token") is part of
/// the API contract and tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("No token provided")]
    NoToken,
    #[error("Invalid token")]
    InvalidToken,
}

/// Demo token prefixes and the role each maps to. Principal ids are fixed so
/// repeated resolutions of the same demo token agree.
const DEMO_TOKENS: &[(&str, &str, &str, u128)] = &[
    ("admin-token-", "admin", "Admin", 0xA001),
    ("hr-token-", "hr.manager", "HR Manager", 0xA002),
    ("recruiter-token-", "recruiter", "Recruiter", 0xA003),
    ("manager-token-", "manager", "Manager", 0xA004),
    ("interviewer-token-", "interviewer", "Interviewer", 0xA005),
    ("employee-token-", "employee", "Employee", 0xA006),
];

/// Stateless resolver from bearer credentials to principals. Holds the role
/// map and signing secret it was constructed with; no ambient configuration,
/// so tests can build one with whatever roles they need.
#[derive(Clone)]
pub struct IdentityResolver {
    role_map: Arc<RoleMap>,
    secret: String,
}

impl IdentityResolver {
    pub fn new(role_map: Arc<RoleMap>, secret: impl Into<String>) -> Self {
        Self {
            role_map,
            secret: secret.into(),
        }
    }

    pub fn role_map(&self) -> &RoleMap {
        &self.role_map
    }

    /// Resolve a bearer credential to a principal, failing closed on
    /// anything that does not verify.
    pub fn resolve(&self, credential: Option<&str>) -> Result<Principal, ResolveError> {
        let token = match credential {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => return Err(ResolveError::NoToken),
        };

        for (prefix, username, role, id) in DEMO_TOKENS {
            if token.starts_with(prefix) {
                return Ok(Principal::from_roles(
                    Uuid::from_u128(*id),
                    *username,
                    vec![role.to_string()],
                    &self.role_map,
                ));
            }
        }

        self.resolve_jwt(token)
    }

    fn resolve_jwt(&self, token: &str) -> Result<Principal, ResolveError> {
        if self.secret.is_empty() {
            return Err(ResolveError::InvalidToken);
        }

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();
        let data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|_| ResolveError::InvalidToken)?;
        let claims = data.claims;

        let mut overrides = Vec::with_capacity(claims.overrides.len());
        for raw in &claims.overrides {
            // A token carrying a permission the catalog does not know was
            // not minted by this build; reject it outright.
            let permission = raw
                .parse::<Permission>()
                .map_err(|_| ResolveError::InvalidToken)?;
            overrides.push(permission);
        }

        Ok(
            Principal::from_roles(claims.sub, claims.username, claims.roles, &self.role_map)
                .with_overrides(overrides),
        )
    }

    /// Sign a token for the given claims.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), claims, &encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> IdentityResolver {
        let role_map = Arc::new(RoleMap::builtin().unwrap());
        IdentityResolver::new(role_map, "test-secret")
    }

    #[test]
    fn test_missing_or_blank_credential_is_no_token() {
        let r = resolver();
        assert_eq!(r.resolve(None).unwrap_err(), ResolveError::NoToken);
        assert_eq!(r.resolve(Some("")).unwrap_err(), ResolveError::NoToken);
        assert_eq!(r.resolve(Some("   ")).unwrap_err(), ResolveError::NoToken);
    }

    #[test]
    fn test_unrecognized_credential_is_invalid_token() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("not-a-real-token")).unwrap_err(),
            ResolveError::InvalidToken
        );
    }

    #[test]
    fn test_demo_prefixes_resolve_to_canned_principals() {
        let r = resolver();
        let admin = r.resolve(Some("admin-token-xyz")).unwrap();
        assert_eq!(admin.roles, vec!["Admin".to_string()]);
        assert!(admin.has_permission(Permission::SystemAdmin));

        let interviewer = r.resolve(Some("interviewer-token-1")).unwrap();
        assert!(interviewer.has_permission(Permission::InterviewsEdit));
        assert!(!interviewer.has_permission(Permission::CandidatesDelete));
    }

    #[test]
    fn test_admin_permissions_strictly_contain_hr() {
        let r = resolver();
        let admin = r.resolve(Some("admin-token-1")).unwrap();
        let hr = r.resolve(Some("hr-token-1")).unwrap();

        assert!(admin.permissions.is_superset(&hr.permissions));
        assert!(admin.permissions.len() > hr.permissions.len());
    }

    #[test]
    fn test_jwt_round_trip_recomputes_permissions_from_roles() {
        let r = resolver();
        let claims = Claims::new(
            Uuid::new_v4(),
            "pat.interviewer".to_string(),
            vec!["Interviewer".to_string()],
            vec!["reports.view".to_string()],
            1,
        );
        let token = r.issue(&claims).unwrap();

        let principal = r.resolve(Some(&token)).unwrap();
        assert_eq!(principal.username, "pat.interviewer");
        assert!(principal.has_permission(Permission::InterviewsEdit));
        assert!(principal.has_permission(Permission::ReportsView));
        assert!(!principal.has_permission(Permission::CandidatesDelete));
    }

    #[test]
    fn test_jwt_with_unknown_override_is_rejected() {
        let r = resolver();
        let claims = Claims::new(
            Uuid::new_v4(),
            "odd".to_string(),
            vec!["Employee".to_string()],
            vec!["reports.teleport".to_string()],
            1,
        );
        let token = r.issue(&claims).unwrap();
        assert_eq!(
            r.resolve(Some(&token)).unwrap_err(),
            ResolveError::InvalidToken
        );
    }

    #[test]
    fn test_expired_jwt_is_rejected() {
        let r = resolver();
        // well past the default 60-second validation leeway
        let issued = Utc::now() - Duration::hours(2);
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "late".to_string(),
            roles: vec!["HR Manager".to_string()],
            overrides: vec![],
            exp: (issued + Duration::hours(1)).timestamp(),
            iat: issued.timestamp(),
        };
        let token = r.issue(&claims).unwrap();
        assert_eq!(
            r.resolve(Some(&token)).unwrap_err(),
            ResolveError::InvalidToken
        );
    }

    #[test]
    fn test_tampered_jwt_is_rejected() {
        let r = resolver();
        let other = IdentityResolver::new(Arc::new(RoleMap::builtin().unwrap()), "other-secret");
        let claims = Claims::new(
            Uuid::new_v4(),
            "eve".to_string(),
            vec!["Admin".to_string()],
            vec![],
            1,
        );
        let token = other.issue(&claims).unwrap();
        assert_eq!(
            r.resolve(Some(&token)).unwrap_err(),
            ResolveError::InvalidToken
        );
    }
}
