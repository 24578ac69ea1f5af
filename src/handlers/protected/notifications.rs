use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/notifications
pub async fn notifications_get() -> JsonResult {
    Ok(ApiResponse::success(json!([
        {
            "id": Uuid::from_u128(0x7001),
            "message": "Offer accepted: Amelia Okafor",
            "read": false,
        },
        {
            "id": Uuid::from_u128(0x7002),
            "message": "3 interviews scheduled for this week",
            "read": true,
        },
    ])))
}

/// POST /api/notifications/send
pub async fn notifications_send_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "id": Uuid::new_v4(),
        "sent_at": Utc::now(),
        "notification": body,
    })))
}
