pub mod auth;
pub mod permission;
pub mod response;

pub use auth::authenticate;
pub use permission::require;
pub use response::{ApiResponse, ApiResult, JsonResult};
