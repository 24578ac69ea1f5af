//! Route table and guard wiring.
//!
//! Every /api route sits behind two layers: the authentication middleware
//! (outermost, resolves the bearer credential to a `Principal` or answers
//! 401) and a per-verb permission guard (answers 403 before the handler can
//! run). Public routes carry neither.

use axum::handler::Handler;
use axum::routing::{delete, get, post, put};
use axum::{middleware, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::authz::{Permission, Requirement};
use crate::handlers::{protected, public};
use crate::middleware::{authenticate, require};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected API
        .merge(api_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(public::auth::login_post))
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/whoami", get(protected::auth::whoami))
        .route("/api/auth/permissions", get(protected::auth::permissions_get))
        .merge(user_routes())
        .merge(employee_routes())
        .merge(candidate_routes())
        .merge(job_routes())
        .merge(interview_routes())
        .merge(report_routes())
        .merge(calendar_routes())
        .merge(notification_routes())
        .merge(admin_routes())
        // Outermost layer for the whole protected tier: credential -> Principal
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}

fn user_routes() -> Router<AppState> {
    use protected::users;

    Router::new()
        .route(
            "/api/users",
            get(users::users_get.layer(require(Permission::UsersView)))
                .post(users::users_post.layer(require(Permission::UsersCreate))),
        )
        .route(
            "/api/users/:id",
            delete(users::user_delete.layer(require(Permission::UsersDelete))),
        )
}

fn employee_routes() -> Router<AppState> {
    use protected::employees;

    Router::new().route(
        "/api/employees",
        get(employees::employees_get.layer(require(Permission::EmployeesView)))
            .post(employees::employees_post.layer(require(Permission::EmployeesCreate))),
    )
}

fn candidate_routes() -> Router<AppState> {
    use protected::candidates;

    Router::new()
        .route(
            "/api/candidates",
            get(candidates::candidates_get.layer(require(Permission::CandidatesView)))
                .post(candidates::candidates_post.layer(require(Permission::CandidatesCreate))),
        )
        .route(
            "/api/candidates/:id",
            get(candidates::candidate_get.layer(require(Permission::CandidatesView)))
                .put(candidates::candidate_put.layer(require(Permission::CandidatesEdit)))
                .delete(candidates::candidate_delete.layer(require(Permission::CandidatesDelete))),
        )
}

fn job_routes() -> Router<AppState> {
    use protected::jobs;

    Router::new()
        .route(
            "/api/jobs",
            get(jobs::jobs_get.layer(require(Permission::JobsView)))
                .post(jobs::jobs_post.layer(require(Permission::JobsCreate))),
        )
        .route(
            "/api/jobs/:id",
            put(jobs::job_put.layer(require(Permission::JobsEdit)))
                .delete(jobs::job_delete.layer(require(Permission::JobsDelete))),
        )
}

fn interview_routes() -> Router<AppState> {
    use protected::interviews;

    Router::new()
        .route(
            "/api/interviews",
            get(interviews::interviews_get.layer(require(Permission::InterviewsView)))
                .post(interviews::interviews_post.layer(require(Permission::InterviewsCreate))),
        )
        .route(
            "/api/interviews/:id",
            put(interviews::interview_put.layer(require(Permission::InterviewsEdit)))
                .delete(interviews::interview_delete.layer(require(Permission::InterviewsDelete))),
        )
}

fn report_routes() -> Router<AppState> {
    use protected::reports;

    Router::new()
        .route(
            "/api/reports",
            get(reports::reports_get.layer(require(Permission::ReportsView))),
        )
        .route(
            "/api/reports/export",
            post(reports::reports_export_post.layer(require(Permission::ReportsExport))),
        )
}

fn calendar_routes() -> Router<AppState> {
    use protected::calendar;

    Router::new().route(
        "/api/calendar/events",
        get(calendar::events_get.layer(require(Permission::CalendarView)))
            .post(calendar::events_post.layer(require(Permission::CalendarEdit))),
    )
}

fn notification_routes() -> Router<AppState> {
    use protected::notifications;

    Router::new()
        .route(
            "/api/notifications",
            get(notifications::notifications_get.layer(require(Permission::NotificationsView))),
        )
        .route(
            "/api/notifications/send",
            post(
                notifications::notifications_send_post
                    .layer(require(Permission::NotificationsSend)),
            ),
        )
}

fn admin_routes() -> Router<AppState> {
    use protected::admin;

    Router::new()
        .route(
            "/api/admin/settings",
            get(admin::settings_get.layer(require(Permission::SystemSettings)))
                .put(admin::settings_put.layer(require(Permission::SystemSettings))),
        )
        // Role-based check on top of the permission guards: the admin area
        // is only reachable by the Admin role (system.admin holders pass
        // any check).
        .route_layer(require(Requirement::any_role(["Admin"])))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "HRMS API (Rust)",
            "version": version,
            "description": "HR management dashboard backend with role-based access control",
            "endpoints": {
                "home": "/ (public)",
                "login": "/auth/login (public - token acquisition)",
                "auth": "/api/auth/* (protected - session info and permission catalog)",
                "users": "/api/users (protected)",
                "employees": "/api/employees (protected)",
                "candidates": "/api/candidates[/:id] (protected)",
                "jobs": "/api/jobs[/:id] (protected)",
                "interviews": "/api/interviews[/:id] (protected)",
                "reports": "/api/reports, /api/reports/export (protected)",
                "calendar": "/api/calendar/events (protected)",
                "notifications": "/api/notifications[/send] (protected)",
                "admin": "/api/admin/* (restricted to the Admin role)",
            }
        }
    }))
}

async fn health(axum::extract::State(state): axum::extract::State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": Utc::now(),
            "roles_loaded": state.role_map.all_roles().len(),
        }
    }))
}
