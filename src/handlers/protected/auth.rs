use axum::extract::State;
use axum::Extension;
use serde_json::{json, Value};

use crate::authz::{Permission, Principal};
use crate::middleware::response::{ApiResponse, JsonResult};
use crate::state::AppState;

/// GET /api/auth/whoami - the authenticated principal as the client caches
/// it: identity, roles and the effective permission set.
pub async fn whoami(Extension(principal): Extension<Principal>) -> JsonResult {
    Ok(ApiResponse::success(json!({
        "id": principal.id,
        "username": principal.username,
        "roles": principal.roles,
        "permissions": principal.permission_identifiers(),
    })))
}

/// GET /api/auth/permissions - the full permission catalog with descriptions
/// plus the configured roles. Drives the client's permission pickers and
/// role display.
pub async fn permissions_get(State(state): State<AppState>) -> JsonResult {
    let catalog: Vec<Value> = Permission::list_all()
        .iter()
        .map(|p| {
            json!({
                "id": p.as_str(),
                "description": p.describe(),
            })
        })
        .collect();

    let roles: Vec<Value> = state
        .role_map
        .all_roles()
        .iter()
        .map(|role| {
            let mut permissions: Vec<&'static str> =
                role.permissions.iter().map(|p| p.as_str()).collect();
            permissions.sort_unstable();
            json!({
                "name": role.name,
                "description": role.description,
                "permissions": permissions,
            })
        })
        .collect();

    Ok(ApiResponse::success(json!({
        "permissions": catalog,
        "roles": roles,
    })))
}
