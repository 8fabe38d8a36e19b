//! HTTP API module for the criteria wizard.
//!
//! This module exposes the wizard and the criteria registry to a remote UI.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CriteriaRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
