use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/calendar/events
pub async fn events_get() -> JsonResult {
    Ok(ApiResponse::success(json!([
        {
            "id": Uuid::from_u128(0x6001),
            "title": "Interview: Sara Lindqvist",
            "starts_at": "2026-09-03T10:00:00Z",
            "kind": "interview",
        },
        {
            "id": Uuid::from_u128(0x6002),
            "title": "Quarterly review planning",
            "starts_at": "2026-09-05T09:00:00Z",
            "kind": "meeting",
        },
    ])))
}

/// POST /api/calendar/events
pub async fn events_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "id": Uuid::new_v4(),
        "event": body,
    })))
}
