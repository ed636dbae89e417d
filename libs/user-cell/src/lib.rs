pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use middleware::admin_middleware;
pub use models::*;
pub use router::user_routes;
pub use services::UserService;
