pub mod authz;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
