//! Role-based access control core: permission catalog, role map, principal
//! and the pure authorization gate. Everything here is side-effect free and
//! shared by the server middleware and the client-side route guard.

pub mod gate;
pub mod permission;
pub mod principal;
pub mod roles;

pub use gate::{allow, Decision, Requirement};
pub use permission::Permission;
pub use principal::Principal;
pub use roles::{ConfigError, Role, RoleMap};
