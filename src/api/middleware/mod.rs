//! API middleware components

pub mod cors;
pub mod logging;
pub mod timeout;

pub use cors::cors_middleware;
pub use logging::logging_middleware;
pub use timeout::timeout_middleware;
