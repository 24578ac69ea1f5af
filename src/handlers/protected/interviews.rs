use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/interviews
pub async fn interviews_get() -> JsonResult {
    Ok(ApiResponse::success(json!([
        {
            "id": Uuid::from_u128(0x4001),
            "candidate": "Sara Lindqvist",
            "interviewer": "interviewer",
            "scheduled_at": "2026-09-03T10:00:00Z",
            "status": "scheduled",
        },
        {
            "id": Uuid::from_u128(0x4002),
            "candidate": "Deepak Rao",
            "interviewer": "hr.manager",
            "scheduled_at": "2026-09-04T14:30:00Z",
            "status": "scheduled",
        },
    ])))
}

/// POST /api/interviews
pub async fn interviews_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "id": Uuid::new_v4(),
        "status": "scheduled",
        "interview": body,
    })))
}

/// PUT /api/interviews/:id
pub async fn interview_put(Path(id): Path<Uuid>, Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::success(json!({
        "id": id,
        "updated": body,
    })))
}

/// DELETE /api/interviews/:id
pub async fn interview_delete(Path(id): Path<Uuid>) -> JsonResult {
    Ok(ApiResponse::success(json!({ "deleted": id })))
}
