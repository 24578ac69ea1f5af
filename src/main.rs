use std::sync::Arc;

use anyhow::Context;

use hrms_api_rust::authz::RoleMap;
use hrms_api_rust::{app, config, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up HRMS_JWT_SECRET, HRMS_ROLES_FILE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting HRMS API in {:?} mode", config.environment);

    // Role configuration is fatal when invalid: refuse to serve traffic
    // with a role map that did not fully validate.
    let role_map = match load_role_map() {
        Ok(map) => map,
        Err(e) => {
            tracing::error!("invalid role configuration: {e:#}");
            std::process::exit(1);
        }
    };
    tracing::info!(roles = role_map.all_roles().len(), "role map loaded");

    let state = AppState::new(Arc::new(role_map), config.security.jwt_secret.clone());
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 HRMS API Rust server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn load_role_map() -> anyhow::Result<RoleMap> {
    match &config::config().authz.roles_file {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read roles file {path}"))?;
            RoleMap::from_yaml(&yaml).with_context(|| format!("roles file {path} is invalid"))
        }
        None => Ok(RoleMap::builtin()?),
    }
}
