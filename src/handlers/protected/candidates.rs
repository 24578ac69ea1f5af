// Candidate pipeline endpoints. Mock-backed, like the original dashboard:
// the interesting part is which permission guards each verb in `routes.rs`.

use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/candidates
pub async fn candidates_get() -> JsonResult {
    Ok(ApiResponse::success(json!([
        {
            "id": Uuid::from_u128(0x2001),
            "name": "Sara Lindqvist",
            "position": "Senior Backend Engineer",
            "stage": "technical_interview",
            "applied_at": "2026-07-02",
        },
        {
            "id": Uuid::from_u128(0x2002),
            "name": "Deepak Rao",
            "position": "Product Designer",
            "stage": "screening",
            "applied_at": "2026-07-18",
        },
        {
            "id": Uuid::from_u128(0x2003),
            "name": "Amelia Okafor",
            "position": "HR Generalist",
            "stage": "offer",
            "applied_at": "2026-06-21",
        },
    ])))
}

/// POST /api/candidates
pub async fn candidates_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "id": Uuid::new_v4(),
        "stage": "applied",
        "candidate": body,
    })))
}

/// GET /api/candidates/:id
pub async fn candidate_get(Path(id): Path<Uuid>) -> JsonResult {
    Ok(ApiResponse::success(json!({
        "id": id,
        "name": "Sara Lindqvist",
        "position": "Senior Backend Engineer",
        "stage": "technical_interview",
        "notes": ["Strong systems background", "Available from September"],
    })))
}

/// PUT /api/candidates/:id
pub async fn candidate_put(Path(id): Path<Uuid>, Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::success(json!({
        "id": id,
        "updated": body,
    })))
}

/// DELETE /api/candidates/:id
pub async fn candidate_delete(Path(id): Path<Uuid>) -> JsonResult {
    Ok(ApiResponse::success(json!({ "deleted": id })))
}
