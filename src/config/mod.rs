use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Process-wide application settings, resolved from the environment once at
/// startup. Authorization configuration (the role map) is deliberately NOT
/// in here: it is built explicitly in `main` and injected through router
/// state so tests can swap it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub authz: AuthzConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Path to a roles YAML artifact. When unset, the embedded default
    /// (`config/roles.yaml`) is used.
    pub roles_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("HRMS_API_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.server.enable_cors = v.parse().unwrap_or(self.server.enable_cors);
        }
        if let Ok(v) = env::var("HRMS_JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("HRMS_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("HRMS_ROLES_FILE") {
            self.authz.roles_file = Some(v);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
            },
            security: SecurityConfig {
                // Development-only default; overridden via HRMS_JWT_SECRET
                jwt_secret: "hrms-dev-secret".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
            },
            authz: AuthzConfig { roles_file: None },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
            },
            authz: AuthzConfig { roles_file: None },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 3000,
                enable_cors: false,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 4,
            },
            authz: AuthzConfig { roles_file: None },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 3000);
        assert!(!config.security.jwt_secret.is_empty());
        assert_eq!(config.security.jwt_expiry_hours, 24 * 7);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(!config.server.enable_cors);
        // Production has no baked-in secret; it must come from the env.
        assert!(config.security.jwt_secret.is_empty());
        assert_eq!(config.security.jwt_expiry_hours, 4);
    }
}
