use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/reports - headline hiring metrics for the dashboard widgets.
pub async fn reports_get() -> JsonResult {
    Ok(ApiResponse::success(json!({
        "headcount": 112,
        "open_positions": 7,
        "candidates_in_pipeline": 48,
        "interviews_this_week": 9,
        "time_to_hire_days": 31,
    })))
}

/// POST /api/reports/export - queue a report export.
pub async fn reports_export_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "export_id": Uuid::new_v4(),
        "requested_at": Utc::now(),
        "format": body.get("format").cloned().unwrap_or_else(|| json!("csv")),
        "status": "queued",
    })))
}
