// Protected handlers (/api/*): authentication middleware runs first, then
// the per-route permission guards. By the time any of these execute, the
// request carries a resolved `Principal` extension and the authorization
// gate has already allowed it.
//
// The business handlers are thin mock-data responders, as in the original
// dashboard backend; the substance of this tier is the guard wiring in
// `routes.rs`.

pub mod admin;
pub mod auth;
pub mod calendar;
pub mod candidates;
pub mod employees;
pub mod interviews;
pub mod jobs;
pub mod notifications;
pub mod reports;
pub mod users;
