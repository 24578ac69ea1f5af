use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/jobs
pub async fn jobs_get() -> JsonResult {
    Ok(ApiResponse::success(json!([
        {
            "id": Uuid::from_u128(0x3001),
            "title": "Senior Backend Engineer",
            "department": "Engineering",
            "status": "open",
            "applicants": 24,
        },
        {
            "id": Uuid::from_u128(0x3002),
            "title": "Product Designer",
            "department": "Design",
            "status": "open",
            "applicants": 11,
        },
        {
            "id": Uuid::from_u128(0x3003),
            "title": "HR Generalist",
            "department": "People",
            "status": "closed",
            "applicants": 37,
        },
    ])))
}

/// POST /api/jobs
pub async fn jobs_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "id": Uuid::new_v4(),
        "status": "draft",
        "job": body,
    })))
}

/// PUT /api/jobs/:id
pub async fn job_put(Path(id): Path<Uuid>, Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::success(json!({
        "id": id,
        "updated": body,
    })))
}

/// DELETE /api/jobs/:id
pub async fn job_delete(Path(id): Path<Uuid>) -> JsonResult {
    Ok(ApiResponse::success(json!({ "deleted": id })))
}
