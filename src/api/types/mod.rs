//! Request/response codec shared by all handlers

pub mod error;
pub mod json;
pub mod response;

pub use error::{ApiError, ApiErrorResponse, ErrorMessage};
pub use json::Json;
pub use response::ApiResponse;
