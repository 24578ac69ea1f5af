use axum::Json;
use serde_json::{json, Value};

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/admin/settings
pub async fn settings_get() -> JsonResult {
    Ok(ApiResponse::success(json!({
        "company_name": "Acme HR",
        "timezone": "UTC",
        "working_days": ["mon", "tue", "wed", "thu", "fri"],
        "interview_reminder_hours": 24,
    })))
}

/// PUT /api/admin/settings
pub async fn settings_put(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::success(json!({ "settings": body })))
}
