//! API endpoint modules.

pub mod auth;
pub mod fotos;
pub mod health;
pub mod inspetores;
pub mod laudos;
pub mod openapi;

pub use auth::configure_routes as configure_auth_routes;
pub use fotos::configure_routes as configure_foto_routes;
pub use health::configure_routes as configure_health_routes;
pub use inspetores::configure_routes as configure_inspetor_routes;
pub use laudos::configure_routes as configure_laudo_routes;
pub use openapi::ApiDoc;
