use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/users
pub async fn users_get() -> JsonResult {
    Ok(ApiResponse::success(json!([
        { "id": Uuid::from_u128(0x1001), "username": "admin", "roles": ["Admin"] },
        { "id": Uuid::from_u128(0x1002), "username": "hr.manager", "roles": ["HR Manager"] },
        { "id": Uuid::from_u128(0x1005), "username": "interviewer", "roles": ["Interviewer"] },
    ])))
}

/// POST /api/users
pub async fn users_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "id": Uuid::new_v4(),
        "user": body,
    })))
}

/// DELETE /api/users/:id
pub async fn user_delete(Path(id): Path<Uuid>) -> JsonResult {
    Ok(ApiResponse::success(json!({ "deleted": id })))
}
