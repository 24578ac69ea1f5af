// POST /auth/login - authenticate against the seed user directory and
// return a signed token plus the resolved principal.
//
// The directory is the mock backend's seed data; there is no password
// hashing or account store here, matching the original service. The token
// the client receives is the same credential every /api request re-presents,
// and the permission set in the response is exactly what the server-side
// gate will enforce.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::config;
use crate::error::ApiError;
use crate::identity::Claims;
use crate::middleware::response::{ApiResponse, JsonResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

struct SeedUser {
    id: u128,
    username: &'static str,
    password: &'static str,
    roles: &'static [&'static str],
    /// Per-user permission grants on top of the role bundles.
    overrides: &'static [&'static str],
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        id: 0x1001,
        username: "admin",
        password: "admin123",
        roles: &["Admin"],
        overrides: &[],
    },
    SeedUser {
        id: 0x1002,
        username: "hr.manager",
        password: "hr123",
        roles: &["HR Manager"],
        overrides: &[],
    },
    SeedUser {
        id: 0x1003,
        username: "recruiter",
        password: "recruiter123",
        roles: &["Recruiter"],
        overrides: &[],
    },
    SeedUser {
        id: 0x1004,
        username: "manager",
        password: "manager123",
        roles: &["Manager"],
        overrides: &[],
    },
    SeedUser {
        id: 0x1005,
        username: "interviewer",
        password: "interview123",
        roles: &["Interviewer"],
        overrides: &[],
    },
    SeedUser {
        id: 0x1006,
        username: "employee",
        password: "employee123",
        roles: &["Employee"],
        overrides: &[],
    },
    SeedUser {
        id: 0x1007,
        username: "finance.lead",
        password: "finance123",
        roles: &["Manager"],
        overrides: &["reports.export"],
    },
];

/// POST /auth/login
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> JsonResult {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let user = SEED_USERS
        .iter()
        .find(|u| u.username == payload.username && u.password == payload.password)
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let expiry_hours = config::config().security.jwt_expiry_hours;
    let claims = Claims::new(
        Uuid::from_u128(user.id),
        user.username.to_string(),
        user.roles.iter().map(|r| r.to_string()).collect(),
        user.overrides.iter().map(|p| p.to_string()).collect(),
        expiry_hours,
    );
    let token = state.resolver.issue(&claims)?;

    // Resolve the freshly minted token so the response carries exactly the
    // principal the server guards will see on subsequent requests.
    let principal = state.resolver.resolve(Some(&token))?;

    tracing::info!(user = %principal.username, "login succeeded");

    Ok(ApiResponse::success(login_body(&token, expiry_hours, principal)))
}

fn login_body(token: &str, expiry_hours: u64, principal: crate::authz::Principal) -> Value {
    json!({
        "token": token,
        "token_type": "Bearer",
        "expires_in": expiry_hours * 3600,
        "user": {
            "id": principal.id,
            "username": principal.username,
            "roles": principal.roles,
            "permissions": principal.permission_identifiers(),
        }
    })
}
