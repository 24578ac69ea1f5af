// Public handlers: token acquisition and service metadata. No credential
// required; everything else lives behind the /api guards.

pub mod auth;
