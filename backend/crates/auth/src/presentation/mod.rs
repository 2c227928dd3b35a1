//! Presentation Layer
//!
//! HTML handlers, forms, router, and session middleware.

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentUser, SessionGate, require_session};
pub use router::{auth_router, auth_router_generic};
