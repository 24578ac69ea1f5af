use std::sync::Arc;

use crate::authz::RoleMap;
use crate::identity::IdentityResolver;

/// Shared router state. The role map is built and validated once in `main`
/// and injected here; nothing reaches for it through a global.
#[derive(Clone)]
pub struct AppState {
    pub role_map: Arc<RoleMap>,
    pub resolver: Arc<IdentityResolver>,
}

impl AppState {
    pub fn new(role_map: Arc<RoleMap>, jwt_secret: impl Into<String>) -> Self {
        let resolver = Arc::new(IdentityResolver::new(role_map.clone(), jwt_secret));
        Self { role_map, resolver }
    }
}
