//! HTTP Layer - RESTful API + 静态前端

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::AuthenticatedTeacher;
pub use routes::create_routes;
pub use server::HttpServer;
pub use state::AppState;
