use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::{ApiResponse, JsonResult};

/// GET /api/employees
pub async fn employees_get() -> JsonResult {
    Ok(ApiResponse::success(json!([
        {
            "id": Uuid::from_u128(0x5001),
            "name": "Jonas Weber",
            "department": "Engineering",
            "title": "Staff Engineer",
            "started_at": "2021-03-01",
        },
        {
            "id": Uuid::from_u128(0x5002),
            "name": "Priya Natarajan",
            "department": "People",
            "title": "HR Manager",
            "started_at": "2019-11-15",
        },
    ])))
}

/// POST /api/employees
pub async fn employees_post(Json(body): Json<Value>) -> JsonResult {
    Ok(ApiResponse::created(json!({
        "id": Uuid::new_v4(),
        "employee": body,
    })))
}
